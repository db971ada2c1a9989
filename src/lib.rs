//! Adaptive ternary tree refinement linearised along a Peano space-filling curve
//!
//! A square (or cubic) domain is subdivided into 3x3 (or 3x3x3) children
//! wherever a caller-supplied predicate asks for it. The leaves of a 2-D tree
//! are then visited along a Peano curve, whose orientation at every node is
//! tracked by a four-state motif, producing an ordered sequence of cells in
//! which consecutive entries are spatial neighbours.

#![forbid(unsafe_code)]

/// Built-in refinement criteria of the demo domain
pub mod criteria;
/// Index codec, motif tables, Peano traversal and partitioning
pub mod curve;
/// Input/output operations and error handling
pub mod io;
/// Cell geometry, tree nodes, refinement and tiling checks
pub mod spatial;

pub use curve::{LeafCell, Motif, Partitioning, TraversalConfig};
pub use io::error::{PeanoError, Result};
pub use spatial::{AdaptiveTree, CellGeometry, Dimension, RefinementLimits, TreeNode};
