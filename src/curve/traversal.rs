//! Peano-ordered walk over the leaves of a refined 2-D tree
//!
//! The walk carries the current motif on the recursion stack. At every refined
//! node the nine children are visited in the order the motif prescribes and
//! each child is entered with the motif it inherits. Consecutive leaves are
//! therefore neighbours in space (across level changes, near neighbours).

use num_traits::Float;

use crate::curve::motif::{Motif, PEANO_STEPS};
use crate::io::error::{PeanoError, Result};
use crate::spatial::geometry::{CellGeometry, Dimension};
use crate::spatial::node::TreeNode;
use crate::spatial::tree::AdaptiveTree;

/// Geometry of one emitted leaf
#[derive(Debug, Clone, PartialEq)]
pub struct LeafCell<T> {
    /// Midpoint of the cell
    pub centre: Vec<T>,
    /// Lower corner
    pub offset: Vec<T>,
    /// Per-axis extent
    pub size: Vec<T>,
}

impl<T: Float> LeafCell<T> {
    fn from_cell(cell: &CellGeometry<T>) -> Self {
        Self {
            centre: cell.centre(),
            offset: cell.offset().to_vec(),
            size: cell.size().to_vec(),
        }
    }
}

/// Starting orientation and emission threshold of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Motif of the root cell
    pub motif: Motif,
    /// Leaves shallower than this depth are not emitted
    pub first_level: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            motif: Motif::P,
            first_level: 0,
        }
    }
}

/// Append the leaves below `node` to `out` in Peano order
///
/// `cell` is the geometry of `node`, which sits at depth zero. The tree is
/// only read.
///
/// # Errors
///
/// Returns an error if:
/// - the tree is 3-D (no replacement pattern exists for 3x3x3 cells)
/// - `cell` and `node` disagree on dimensionality
pub fn traverse<T: Float>(
    node: &TreeNode,
    cell: &CellGeometry<T>,
    config: TraversalConfig,
    out: &mut Vec<LeafCell<T>>,
) -> Result<()> {
    if node.dimension() != Dimension::Two {
        return Err(PeanoError::UnsupportedTraversal {
            axes: node.dimension().axes(),
        });
    }
    if cell.dimension() != Dimension::Two {
        return Err(PeanoError::GeometryMismatch {
            expected: Dimension::Two.axes(),
            found: cell.dimension().axes(),
        });
    }
    visit(node, cell, config.motif, 0, config.first_level, out)
}

fn visit<T: Float>(
    node: &TreeNode,
    cell: &CellGeometry<T>,
    motif: Motif,
    depth: usize,
    first_level: usize,
    out: &mut Vec<LeafCell<T>>,
) -> Result<()> {
    if node.is_leaf() {
        if depth >= first_level {
            out.push(LeafCell::from_cell(cell));
        }
        return Ok(());
    }

    for peano_index in 0..PEANO_STEPS {
        let pos = motif.child_position(peano_index)?;
        let Some(child) = node.child(pos) else {
            continue;
        };
        let child_motif = motif.child_motif(pos)?;
        visit(
            child,
            &cell.child(pos),
            child_motif,
            depth + 1,
            first_level,
            out,
        )?;
    }
    Ok(())
}

impl<T: Float> AdaptiveTree<T> {
    /// Leaves of the whole tree in Peano order
    ///
    /// # Errors
    ///
    /// Returns [`PeanoError::UnsupportedTraversal`] for 3-D trees
    pub fn peano_order(&self, config: TraversalConfig) -> Result<Vec<LeafCell<T>>> {
        let mut out = Vec::with_capacity(self.leaf_count());
        traverse(self.root(), self.domain(), config, &mut out)?;
        Ok(out)
    }
}
