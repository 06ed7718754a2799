//! Jacobi relaxation for the Tepid plate solver.
//!
//! Relaxes only the stored left half of the plate. Neighbours across the
//! symmetry axis are read from their mirror image, so the right half never
//! needs to exist during the solve.
//!
//! - [`jacobi_sweep`]: pure `(previous, mask) -> next` function
//! - [`jacobi_sweep_into`]: writes into a caller buffer and returns the max change
//! - [`Stencil`]: precomputed neighbour table for repeated sweeps

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod grid_helpers;
pub mod sweep;

pub use sweep::{jacobi_sweep, jacobi_sweep_into, Stencil};
