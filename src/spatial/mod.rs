//! Spatial tree structures and refinement
//!
//! This module contains the tree-related functionality:
//! - Cell geometry and dimensionality
//! - Tree nodes with owned child slots
//! - Predicate-driven refinement
//! - Tiling verification of the resulting leaves

/// Leaf coverage checks against the domain
pub mod coverage;
/// Cell geometry and child subdivision
pub mod geometry;
/// Tree node with a flat array of child slots
pub mod node;
/// Recursive subdivision under a caller predicate
pub mod refinement;
/// Root node bundled with its domain
pub mod tree;

pub use geometry::{CellGeometry, Dimension};
pub use node::TreeNode;
pub use refinement::{RefinementLimits, refine};
pub use tree::AdaptiveTree;
