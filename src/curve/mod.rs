//! Peano space-filling curve over refined trees
//!
//! This module contains the curve-related functionality:
//! - Linear indexing of child positions
//! - Motif tables of the Peano replacement pattern
//! - Peano-ordered leaf traversal
//! - Contiguous partitioning of the ordered leaves

/// Base-3 conversion between grid positions and linear indices
pub mod codec;
/// Motif orientations and their lookup tables
pub mod motif;
/// Contiguous chunking of the ordered leaf sequence
pub mod partition;
/// Recursive Peano-ordered leaf traversal
pub mod traversal;

pub use motif::Motif;
pub use partition::Partitioning;
pub use traversal::{LeafCell, TraversalConfig, traverse};
