//! Peano replacement patterns for the 3x3 grid
//!
//! The curve through a refined square is one of four orientations. `P` is the
//! canonical serpentine that enters at the lower-left child and leaves at the
//! upper-right one:
//!
//! ```text
//! 6 7 8
//! 5 4 3
//! 0 1 2
//! ```
//!
//! `Q`, `R` and `S` are its reflections. Every child inherits an orientation
//! from its parent's orientation and its position, so that the exit child of
//! one subtree always touches the entry child of the next:
//!
//! ```text
//! P -> P Q P      Q -> Q P Q      R -> R S R      S -> S R S
//!      S R S           R S R           Q P Q           P Q P
//!      P Q P           Q P Q           R S R           S R S
//! ```
//!
//! See M. Bader, *Space-Filling Curves*, Springer 2013.

use std::fmt;

use clap::ValueEnum;

use crate::curve::codec::{GridPosition, delinearise, linearise};
use crate::io::error::{Result, domain_error};
use crate::spatial::geometry::Dimension;

/// Number of Peano steps through one refined 2-D cell
pub const PEANO_STEPS: usize = 9;

/// Orientation of the Peano curve inside one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum Motif {
    /// Lower-left to upper-right, rows traversed first
    P,
    /// Upper-left to lower-right
    Q,
    /// Upper-right to lower-left
    R,
    /// Lower-right to upper-left
    S,
}

// Peano index of the child at each linear grid position, per motif
const PEANO_INDEX_AT: [[usize; PEANO_STEPS]; 4] = [
    [0, 1, 2, 5, 4, 3, 6, 7, 8],
    [6, 7, 8, 5, 4, 3, 0, 1, 2],
    [8, 7, 6, 3, 4, 5, 2, 1, 0],
    [2, 1, 0, 3, 4, 5, 8, 7, 6],
];

// Motif inherited by the child at each linear grid position, per motif
const CHILD_MOTIFS: [[Motif; PEANO_STEPS]; 4] = {
    use Motif::{P, Q, R, S};
    [
        [P, Q, P, S, R, S, P, Q, P],
        [Q, P, Q, R, S, R, Q, P, Q],
        [R, S, R, Q, P, Q, R, S, R],
        [S, R, S, P, Q, P, S, R, S],
    ]
};

impl Motif {
    /// All four orientations
    pub const ALL: [Self; 4] = [Self::P, Self::Q, Self::R, Self::S];

    const fn table_row(self) -> usize {
        match self {
            Self::P => 0,
            Self::Q => 1,
            Self::R => 2,
            Self::S => 3,
        }
    }

    /// Grid position of the `peano_index`-th child visited under this motif
    ///
    /// # Errors
    ///
    /// Returns a domain error if `peano_index` is 9 or larger
    pub fn child_position(self, peano_index: usize) -> Result<GridPosition> {
        let linear = PEANO_INDEX_AT
            .get(self.table_row())
            .and_then(|row| row.iter().position(|&step| step == peano_index))
            .ok_or_else(|| domain_error("child_position", peano_index, PEANO_STEPS))?;
        delinearise(linear, Dimension::Two)
    }

    /// Motif inherited by the child at `child_pos`
    ///
    /// # Errors
    ///
    /// Returns a domain error if `child_pos` lies outside the 3x3 grid
    pub fn child_motif(self, child_pos: GridPosition) -> Result<Self> {
        let linear = linearise(child_pos, Dimension::Two)?;
        CHILD_MOTIFS
            .get(self.table_row())
            .and_then(|row| row.get(linear))
            .copied()
            .ok_or_else(|| domain_error("child_motif", linear, PEANO_STEPS))
    }

    /// The nine child positions in visiting order, each with its inherited motif
    ///
    /// # Errors
    ///
    /// Never fails for the built-in tables; errors are propagated from the
    /// lookups for completeness
    pub fn replacement(self) -> Result<[(GridPosition, Self); PEANO_STEPS]> {
        let mut pattern = [([0; 3], self); PEANO_STEPS];
        for (peano_index, slot) in pattern.iter_mut().enumerate() {
            let pos = self.child_position(peano_index)?;
            *slot = (pos, self.child_motif(pos)?);
        }
        Ok(pattern)
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
        };
        f.write_str(symbol)
    }
}

/// Grid position of the `peano_index`-th child of a cell with `parent` motif
///
/// # Errors
///
/// Returns a domain error if `peano_index` is 9 or larger
pub fn child_position_of(peano_index: usize, parent: Motif) -> Result<GridPosition> {
    parent.child_position(peano_index)
}

/// Motif of the child at `child_pos` of a cell with `parent` motif
///
/// # Errors
///
/// Returns a domain error if `child_pos` lies outside the 3x3 grid
pub fn motif_of(child_pos: GridPosition, parent: Motif) -> Result<Motif> {
    parent.child_motif(child_pos)
}
