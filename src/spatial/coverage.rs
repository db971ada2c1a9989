//! Tiling verification of leaf cells against their domain
//!
//! Leaves are rasterised onto a uniform grid whose spacing is the finest leaf
//! extent along each axis. A correct refinement covers every fine cell exactly
//! once; anything else is reported as gaps, overlaps or out-of-domain cells.

use bitvec::prelude::*;
use num_traits::Float;

use crate::io::configuration::MAX_COVERAGE_CELLS;
use crate::io::error::{PeanoError, Result, invalid_parameter};
use crate::spatial::geometry::CellGeometry;

/// Outcome of rasterising a set of leaves over the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingReport {
    /// Fine cells per axis (third entry is 1 in 2-D)
    pub resolution: [usize; 3],
    /// Fine cells covered by no leaf
    pub gaps: usize,
    /// Fine cells covered more than once, counted per extra cover
    pub overlaps: usize,
    /// Fine cells of leaves lying outside the domain
    pub outside: usize,
}

impl TilingReport {
    /// Whether the leaves tile the domain with no gaps or overlaps
    pub const fn is_exact(&self) -> bool {
        self.gaps == 0 && self.overlaps == 0 && self.outside == 0
    }

    /// Convert a non-exact report into [`PeanoError::InvalidTiling`]
    ///
    /// # Errors
    ///
    /// Returns an error if the tiling has gaps, overlaps or cells outside the domain
    pub const fn into_result(self) -> Result<Self> {
        if self.is_exact() {
            Ok(self)
        } else {
            Err(PeanoError::InvalidTiling {
                gaps: self.gaps,
                overlaps: self.overlaps,
                outside: self.outside,
            })
        }
    }
}

/// Rasterise `leaves` over `domain` and count coverage defects
///
/// # Errors
///
/// Returns an error if:
/// - a leaf's dimensionality differs from the domain's
/// - the fine grid would exceed [`MAX_COVERAGE_CELLS`]
pub fn verify_tiling<T: Float>(
    domain: &CellGeometry<T>,
    leaves: &[CellGeometry<T>],
) -> Result<TilingReport> {
    let axes = domain.dimension().axes();
    if let Some(leaf) = leaves.iter().find(|leaf| leaf.dimension() != domain.dimension()) {
        return Err(PeanoError::GeometryMismatch {
            expected: axes,
            found: leaf.dimension().axes(),
        });
    }

    let mut finest = domain.size().to_vec();
    for leaf in leaves {
        for (fine, &extent) in finest.iter_mut().zip(leaf.size()) {
            *fine = Float::min(*fine, extent);
        }
    }

    let mut resolution = [1_usize; 3];
    for ((cells, &extent), &fine) in resolution.iter_mut().zip(domain.size()).zip(&finest) {
        *cells = steps(extent, fine);
    }
    let total = resolution.iter().try_fold(1_usize, |acc, &n| acc.checked_mul(n));
    let total = match total {
        Some(total) if total <= MAX_COVERAGE_CELLS => total,
        _ => {
            return Err(invalid_parameter(
                "resolution",
                &format!("{resolution:?}"),
                &format!("tiling check is limited to {MAX_COVERAGE_CELLS} cells"),
            ));
        }
    };

    let mut covered = bitvec![0; total];
    let mut overlaps = 0;
    let mut outside = 0;

    for leaf in leaves {
        let mut start = [0_i64; 3];
        let mut extent = [1_usize; 3];
        for axis in 0..axes {
            let (Some(corner), Some(origin), Some(size), Some(fine)) = (
                leaf.offset().get(axis),
                domain.offset().get(axis),
                leaf.size().get(axis),
                finest.get(axis),
            ) else {
                continue;
            };
            if let (Some(first), Some(count)) = (start.get_mut(axis), extent.get_mut(axis)) {
                *first = ((*corner - *origin) / *fine).round().to_i64().unwrap_or(i64::MIN);
                *count = steps(*size, *fine);
            }
        }

        for k in 0..extent[2] {
            for j in 0..extent[1] {
                for i in 0..extent[0] {
                    let cell = [
                        start[0].saturating_add(i as i64),
                        start[1].saturating_add(j as i64),
                        start[2].saturating_add(k as i64),
                    ];
                    match fine_index(cell, resolution) {
                        Some(index) => {
                            if covered.get(index).as_deref() == Some(&true) {
                                overlaps += 1;
                            } else {
                                covered.set(index, true);
                            }
                        }
                        None => outside += 1,
                    }
                }
            }
        }
    }

    Ok(TilingReport {
        resolution,
        gaps: covered.count_zeros(),
        overlaps,
        outside,
    })
}

/// Number of fine cells of width `fine` spanning `extent`
fn steps<T: Float>(extent: T, fine: T) -> usize {
    (extent / fine).round().to_usize().unwrap_or(0).max(1)
}

fn fine_index(cell: [i64; 3], resolution: [usize; 3]) -> Option<usize> {
    let mut index = 0;
    let mut stride = 1;
    for (&c, &n) in cell.iter().zip(&resolution) {
        let c = usize::try_from(c).ok().filter(|&c| c < n)?;
        index += c * stride;
        stride *= n;
    }
    Some(index)
}
