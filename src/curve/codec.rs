//! Mixed-radix base-3 conversion between grid positions and linear indices
//!
//! A child slot of a refined node is addressed either by its per-axis position
//! `[x, y, z]` (each in `0..3`) or by the linear index `x + 3y + 9z`. In 2-D the
//! `z` component is forced to zero.

use crate::io::error::{Result, domain_error};
use crate::spatial::geometry::Dimension;

/// Number of children along each axis of a refined cell
pub const GRID_EXTENT: usize = 3;

/// Per-axis child position, third component zero in 2-D
pub type GridPosition = [usize; 3];

/// Linear index of a grid position
///
/// # Errors
///
/// Returns a domain error if any considered component is 3 or larger
pub fn linearise(pos: GridPosition, dimension: Dimension) -> Result<usize> {
    let [x, y, z] = pos;
    let z = match dimension {
        Dimension::Two => 0,
        Dimension::Three => z,
    };

    for component in [x, y, z] {
        if component >= GRID_EXTENT {
            return Err(domain_error("linearise", component, GRID_EXTENT));
        }
    }

    Ok(x + GRID_EXTENT * y + GRID_EXTENT * GRID_EXTENT * z)
}

/// Grid position of a linear index, exact inverse of [`linearise`]
///
/// # Errors
///
/// Returns a domain error if `index` is not below 9 (2-D) or 27 (3-D)
pub const fn delinearise(index: usize, dimension: Dimension) -> Result<GridPosition> {
    let limit = dimension.child_count();
    if index >= limit {
        return Err(domain_error("delinearise", index, limit));
    }

    let x = index % GRID_EXTENT;
    let y = (index / GRID_EXTENT) % GRID_EXTENT;
    let z = index / (GRID_EXTENT * GRID_EXTENT);
    Ok([x, y, z])
}

/// Every grid position of a refined node, in linear index order
pub fn positions(dimension: Dimension) -> impl Iterator<Item = GridPosition> {
    (0..dimension.child_count()).map(|index| {
        [
            index % GRID_EXTENT,
            (index / GRID_EXTENT) % GRID_EXTENT,
            index / (GRID_EXTENT * GRID_EXTENT),
        ]
    })
}
