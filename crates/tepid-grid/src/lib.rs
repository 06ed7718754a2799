//! Grid construction for the Tepid plate solver.
//!
//! Turns a [`PlateSpec`] (domain size, resolution, initial guess, boundary
//! profiles and optional hot block) into the initial half-domain
//! [`Field`](tepid_core::Field) and [`FixedMask`](tepid_core::FixedMask).
//!
//! # Precedence
//!
//! Every stored cell is assigned by exactly one rule, checked in order:
//! hot block, bottom edge, top edge, outer wall, interior. Configurations
//! whose block would reach a boundary edge are rejected up front.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod builder;
pub mod edge;
pub mod spec;

pub use block::{BlockFootprint, HotBlock};
pub use builder::{build_grid, classify, CellRule, InitialGrid};
pub use edge::{BoundarySpec, Edge, EdgeProfile};
pub use spec::{PlateSpec, ResolvedSpec};
