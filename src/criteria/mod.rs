//! Built-in refinement criteria of the demo domain

/// Predicates for the scaling, broadcast, enclaves, sphere, uniform and random shapes
pub mod predicates;

pub use predicates::{Criterion, CriterionKind};
