//! Data types for the frame stream.

/// Stream header: who wrote it and what shape every frame has.
///
/// # Examples
///
/// ```
/// use tepid_frames::FrameHeader;
///
/// let header = FrameHeader::new(241, 241, 9.0);
/// assert_eq!(header.shape(), (241, 241));
/// assert_eq!(header.producer, concat!("tepid-frames ", env!("CARGO_PKG_VERSION")));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FrameHeader {
    /// Name and version of the writing crate.
    pub producer: String,
    /// Grid rows in every frame.
    pub rows: u32,
    /// Grid columns in every frame (full width).
    pub cols: u32,
    /// Physical side length of the plate.
    pub domain_size: f64,
}

impl FrameHeader {
    /// Header for a `rows x cols` series stamped with this crate's version.
    pub fn new(rows: u32, cols: u32, domain_size: f64) -> Self {
        Self {
            producer: concat!("tepid-frames ", env!("CARGO_PKG_VERSION")).to_string(),
            rows,
            cols,
            domain_size,
        }
    }

    /// `(rows, cols)` as `usize`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows as usize, self.cols as usize)
    }
}
