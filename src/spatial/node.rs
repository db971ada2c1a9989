//! Ternary tree node with a flat array of owned child slots
//!
//! Each node owns its children outright; the slot array is allocated on the
//! first `put_child` and is indexed by the linearised child position. A node
//! without a slot array is a leaf.

use num_traits::Float;

use crate::curve::codec::{GridPosition, linearise, positions};
use crate::io::error::{Result, domain_error};
use crate::spatial::geometry::{CellGeometry, Dimension};

/// One cell of an adaptively refined tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    dimension: Dimension,
    children: Option<Box<[Option<Self>]>>,
}

impl TreeNode {
    /// Create a leaf with all child slots empty
    pub const fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            children: None,
        }
    }

    /// Dimensionality fixed at construction
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Whether the node has been subdivided
    pub const fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Whether the node was never subdivided
    pub const fn is_leaf(&self) -> bool {
        !self.has_children()
    }

    /// Install `child` at `pos` and mark this node as subdivided
    ///
    /// Each slot is expected to be written once; a second write replaces the
    /// previous subtree.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `pos` lies outside the grid or the child's
    /// dimensionality differs from this node's
    pub fn put_child(&mut self, pos: GridPosition, child: Self) -> Result<()> {
        if child.dimension != self.dimension {
            return Err(domain_error(
                "put_child",
                child.dimension.axes(),
                self.dimension.axes(),
            ));
        }

        let index = linearise(pos, self.dimension)?;
        let count = self.dimension.child_count();
        let slots = self
            .children
            .get_or_insert_with(|| std::iter::repeat_with(|| None).take(count).collect());

        let slot = slots
            .get_mut(index)
            .ok_or_else(|| domain_error("put_child", index, count))?;
        *slot = Some(child);
        Ok(())
    }

    /// Child at `pos`, or `None` for an empty slot, a leaf, or an out-of-grid position
    pub fn child(&self, pos: GridPosition) -> Option<&Self> {
        let index = linearise(pos, self.dimension).ok()?;
        self.children.as_ref()?.get(index)?.as_ref()
    }

    /// Occupied child slots in linear index order
    pub fn children(&self) -> impl Iterator<Item = (GridPosition, &Self)> {
        positions(self.dimension)
            .zip(self.children.iter().flat_map(|slots| slots.iter()))
            .filter_map(|(pos, slot)| slot.as_ref().map(|child| (pos, child)))
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children().map(|(_, child)| child.leaf_count()).sum()
    }

    /// Height of this subtree; zero for a leaf
    pub fn depth(&self) -> usize {
        self.children()
            .map(|(_, child)| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Leaf geometries in linear slot order (no space-filling curve involved)
    ///
    /// `cell` is the geometry of this node. Works for 2-D and 3-D trees.
    pub fn leaves<T: Float>(&self, cell: &CellGeometry<T>) -> Vec<CellGeometry<T>> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(cell, &mut out);
        out
    }

    fn collect_leaves<T: Float>(&self, cell: &CellGeometry<T>, out: &mut Vec<CellGeometry<T>>) {
        if self.is_leaf() {
            out.push(cell.clone());
            return;
        }
        for (pos, child) in self.children() {
            child.collect_leaves(&cell.child(pos), out);
        }
    }
}
