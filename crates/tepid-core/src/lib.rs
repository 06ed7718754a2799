//! Core types for the Tepid steady-state plate solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions shared by every other crate in the workspace:
//! the temperature [`Field`], the [`FixedMask`], the [`Plate`] geometry,
//! the left/right symmetry helpers, [`Snapshot`]s and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod plate;
pub mod snapshot;
pub mod symmetry;

pub use error::{ConfigError, SolveError};
pub use field::{Field, FixedMask};
pub use id::Iteration;
pub use plate::Plate;
pub use snapshot::Snapshot;
pub use symmetry::{half_cols, mirror_col, mirror_full, reflect};
