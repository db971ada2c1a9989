//! Root node bundled with the geometry of the domain it covers

use num_traits::Float;

use crate::io::error::Result;
use crate::spatial::geometry::{CellGeometry, Dimension};
use crate::spatial::node::TreeNode;
use crate::spatial::refinement::{RefinementLimits, refine};

/// Adaptively refined tree over a fixed rectangular (or box) domain
///
/// Built once by [`AdaptiveTree::build`] and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveTree<T> {
    root: TreeNode,
    domain: CellGeometry<T>,
}

impl<T: Float> AdaptiveTree<T> {
    /// Refine a fresh root over `domain` under `predicate`
    ///
    /// # Errors
    ///
    /// Returns [`crate::PeanoError::UnboundedRefinement`] if `limits` carries a
    /// ceiling that the predicate reaches
    pub fn build<F>(domain: CellGeometry<T>, predicate: &F, limits: RefinementLimits) -> Result<Self>
    where
        F: Fn(&[T], &[T], usize) -> bool + ?Sized,
    {
        let mut root = TreeNode::new(domain.dimension());
        refine(&mut root, &domain, predicate, limits)?;
        Ok(Self { root, domain })
    }

    /// Root node
    pub const fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Geometry of the root cell
    pub const fn domain(&self) -> &CellGeometry<T> {
        &self.domain
    }

    /// Dimensionality of the whole tree
    pub const fn dimension(&self) -> Dimension {
        self.root.dimension()
    }

    /// Leaf geometries in linear slot order
    pub fn leaves(&self) -> Vec<CellGeometry<T>> {
        self.root.leaves(&self.domain)
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Deepest refinement level reached
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
