//! Structured-grid CSV output.
//!
//! One table per snapshot with columns `i,j,k,x,y,Temperature`, where `i`
//! is the column, `j` the row, `k` is always 0, and `x`/`y` are physical
//! coordinates spanning `0..domain_size`. Visualization tools that read
//! structured point tables can load the series directly.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tepid_core::{Field, Iteration, Snapshot};
use tracing::debug;

use crate::error::FrameError;
use crate::sink::{SequenceCheck, SnapshotSink};

/// Column header written at the top of every table.
pub const CSV_HEADER: &str = "i,j,k,x,y,Temperature";

/// Write `field` as a structured point table.
pub fn write_structured_csv(
    w: &mut dyn Write,
    field: &Field,
    domain_size: f64,
) -> Result<(), FrameError> {
    let spacing = |n: usize| {
        if n > 1 {
            domain_size / (n - 1) as f64
        } else {
            0.0
        }
    };
    let h_x = spacing(field.cols());
    let h_y = spacing(field.rows());

    writeln!(w, "{CSV_HEADER}")?;
    for j in 0..field.rows() {
        let y = j as f64 * h_y;
        for (i, t) in field.row(j).iter().enumerate() {
            let x = i as f64 * h_x;
            writeln!(w, "{i},{j},0,{x},{y},{t}")?;
        }
    }
    Ok(())
}

/// Writes each snapshot to its own CSV file in a directory.
///
/// Files are named `{prefix}_{iteration:06}.csv`. The final snapshot is
/// additionally written to `{prefix}_final.csv`.
#[derive(Debug)]
pub struct CsvSnapshotWriter {
    dir: PathBuf,
    prefix: String,
    domain_size: f64,
    sequence: SequenceCheck,
    files_written: u64,
}

impl CsvSnapshotWriter {
    /// Create the output directory (if needed) and return a writer.
    pub fn new(
        dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        domain_size: f64,
    ) -> Result<Self, FrameError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: prefix.into(),
            domain_size,
            sequence: SequenceCheck::default(),
            files_written: 0,
        })
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for `iteration`.
    pub fn path_for(&self, iteration: Iteration) -> PathBuf {
        self.dir
            .join(format!("{}_{:06}.csv", self.prefix, iteration.0))
    }

    /// Path of the copy written for the final snapshot.
    pub fn final_path(&self) -> PathBuf {
        self.dir.join(format!("{}_final.csv", self.prefix))
    }

    /// Number of files written so far (the final copy counts).
    pub fn files_written(&self) -> u64 {
        self.files_written
    }

    fn write_file(&mut self, path: &Path, field: &Field) -> Result<(), FrameError> {
        let mut w = BufWriter::new(File::create(path)?);
        write_structured_csv(&mut w, field, self.domain_size)?;
        w.flush()?;
        self.files_written += 1;
        debug!(path = %path.display(), "wrote snapshot table");
        Ok(())
    }
}

impl SnapshotSink for CsvSnapshotWriter {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError> {
        self.sequence.advance(snapshot.iteration())?;
        let path = self.path_for(snapshot.iteration());
        self.write_file(&path, snapshot.field())?;
        if snapshot.is_final() {
            let final_path = self.final_path();
            self.write_file(&final_path, snapshot.field())?;
        }
        Ok(())
    }
}
