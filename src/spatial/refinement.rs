//! Predicate-driven recursive subdivision
//!
//! A cell is split into its full 3x3 (or 3x3x3) grid of children whenever the
//! caller's predicate returns `true` for the cell's offset, size and depth.
//!
//! Termination is the predicate's responsibility: it must return `false` for
//! every branch within finitely many levels. The engine imposes no cap of its
//! own unless [`RefinementLimits::depth_ceiling`] is set, in which case a
//! predicate that still asks to subdivide at the ceiling aborts refinement
//! with [`PeanoError::UnboundedRefinement`].

use num_traits::Float;

use crate::curve::codec::positions;
use crate::io::error::{PeanoError, Result};
use crate::spatial::geometry::CellGeometry;
use crate::spatial::node::TreeNode;

/// Optional safety net for refinement depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefinementLimits {
    /// Deepest level at which a cell may still be subdivided, exclusive
    pub depth_ceiling: Option<usize>,
}

impl RefinementLimits {
    /// No ceiling; the predicate alone decides termination
    pub const fn unbounded() -> Self {
        Self {
            depth_ceiling: None,
        }
    }

    /// Abort once the predicate asks to subdivide a cell at depth `ceiling`
    pub const fn with_ceiling(ceiling: usize) -> Self {
        Self {
            depth_ceiling: Some(ceiling),
        }
    }

    const fn check(self, depth: usize) -> Result<()> {
        match self.depth_ceiling {
            Some(ceiling) if depth >= ceiling => Err(PeanoError::UnboundedRefinement { ceiling }),
            _ => Ok(()),
        }
    }
}

/// Refine `node`, whose geometry is `cell`, starting at depth zero
///
/// The predicate receives `(offset, size, depth)` of every candidate cell.
/// Children are created in linear index order; the order has no effect on the
/// resulting tree.
///
/// # Errors
///
/// Returns an error if:
/// - `cell` and `node` disagree on dimensionality
/// - the depth ceiling in `limits` is reached while the predicate still
///   subdivides (the tree is left partially refined)
pub fn refine<T, F>(
    node: &mut TreeNode,
    cell: &CellGeometry<T>,
    predicate: &F,
    limits: RefinementLimits,
) -> Result<()>
where
    T: Float,
    F: Fn(&[T], &[T], usize) -> bool + ?Sized,
{
    if cell.dimension() != node.dimension() {
        return Err(PeanoError::GeometryMismatch {
            expected: node.dimension().axes(),
            found: cell.dimension().axes(),
        });
    }
    refine_at(node, cell, predicate, 0, limits)
}

fn refine_at<T, F>(
    node: &mut TreeNode,
    cell: &CellGeometry<T>,
    predicate: &F,
    depth: usize,
    limits: RefinementLimits,
) -> Result<()>
where
    T: Float,
    F: Fn(&[T], &[T], usize) -> bool + ?Sized,
{
    if !predicate(cell.offset(), cell.size(), depth) {
        return Ok(());
    }
    limits.check(depth)?;

    let dimension = node.dimension();
    for pos in positions(dimension) {
        let mut child = TreeNode::new(dimension);
        refine_at(&mut child, &cell.child(pos), predicate, depth + 1, limits)?;
        node.put_child(pos, child)?;
    }
    Ok(())
}
