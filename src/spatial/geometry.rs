//! Cell geometry and fixed dimensionality
//!
//! A cell is an axis-aligned box given by its lower corner and per-axis extent.
//! Children of a cell are the 3 (or 3x3) equal subdivisions along every axis.

use num_traits::Float;

use crate::curve::codec::{GRID_EXTENT, GridPosition};
use crate::io::error::{PeanoError, Result, invalid_parameter};

/// Dimensionality of a tree, fixed when the root is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Square domain, 3x3 children per node
    Two,
    /// Cubic domain, 3x3x3 children per node
    Three,
}

impl Dimension {
    /// Number of coordinate axes
    pub const fn axes(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Number of child slots of a refined node (9 or 27)
    pub const fn child_count(self) -> usize {
        match self {
            Self::Two => GRID_EXTENT * GRID_EXTENT,
            Self::Three => GRID_EXTENT * GRID_EXTENT * GRID_EXTENT,
        }
    }
}

impl TryFrom<usize> for Dimension {
    type Error = PeanoError;

    fn try_from(axes: usize) -> Result<Self> {
        match axes {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(PeanoError::UnsupportedDimension { axes }),
        }
    }
}

/// Axis-aligned cell: lower corner plus positive per-axis extent
#[derive(Debug, Clone, PartialEq)]
pub struct CellGeometry<T> {
    offset: Vec<T>,
    size: Vec<T>,
}

impl<T: Float> CellGeometry<T> {
    /// Create a validated cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `offset` and `size` differ in length
    /// - the length is neither 2 nor 3
    /// - any extent is not strictly positive and finite
    /// - any offset coordinate is not finite
    pub fn new(offset: Vec<T>, size: Vec<T>) -> Result<Self> {
        if offset.len() != size.len() {
            return Err(PeanoError::GeometryMismatch {
                expected: offset.len(),
                found: size.len(),
            });
        }
        Dimension::try_from(offset.len())?;

        if let Some((axis, extent)) = size
            .iter()
            .enumerate()
            .find(|(_, extent)| !(extent.is_finite() && **extent > T::zero()))
        {
            return Err(invalid_parameter(
                "size",
                &extent.to_f64().unwrap_or(f64::NAN),
                &format!("extent along axis {axis} must be positive and finite"),
            ));
        }
        if let Some((axis, corner)) = offset
            .iter()
            .enumerate()
            .find(|(_, corner)| !corner.is_finite())
        {
            return Err(invalid_parameter(
                "offset",
                &corner.to_f64().unwrap_or(f64::NAN),
                &format!("coordinate along axis {axis} must be finite"),
            ));
        }

        Ok(Self { offset, size })
    }

    /// Lower corner coordinates
    pub fn offset(&self) -> &[T] {
        &self.offset
    }

    /// Per-axis extent
    pub fn size(&self) -> &[T] {
        &self.size
    }

    /// Dimensionality of the cell
    pub const fn dimension(&self) -> Dimension {
        if self.offset.len() == 3 {
            Dimension::Three
        } else {
            Dimension::Two
        }
    }

    /// Cell midpoint, `offset + size / 2`
    pub fn centre(&self) -> Vec<T> {
        let half = T::one() / (T::one() + T::one());
        self.offset
            .iter()
            .zip(&self.size)
            .map(|(&corner, &extent)| corner + half * extent)
            .collect()
    }

    /// Geometry of the child at `pos` in this cell's grid
    ///
    /// Each extent shrinks by a factor of three and the corner moves by
    /// `pos[i]` child widths along axis `i`.
    pub fn child(&self, pos: GridPosition) -> Self {
        let three = grid_steps::<T>(GRID_EXTENT);
        let mut size = Vec::with_capacity(self.size.len());
        let mut offset = Vec::with_capacity(self.offset.len());

        for ((&corner, &extent), &step) in self.offset.iter().zip(&self.size).zip(pos.iter()) {
            let child_extent = extent / three;
            size.push(child_extent);
            offset.push(corner + grid_steps::<T>(step) * child_extent);
        }

        Self { offset, size }
    }

    /// Check whether the cell contains a point (lower bounds inclusive)
    pub fn contains(&self, point: &[T]) -> bool {
        point.len() == self.offset.len()
            && point
                .iter()
                .zip(self.offset.iter().zip(&self.size))
                .all(|(&p, (&corner, &extent))| p >= corner && p < corner + extent)
    }
}

/// Small non-negative integer as an exact float
fn grid_steps<T: Float>(steps: usize) -> T {
    (0..steps).fold(T::zero(), |acc, _| acc + T::one())
}
