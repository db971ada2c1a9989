//! Built-in refinement predicates for the reference `[0, 3] x [0, 3]` domain
//!
//! Each criterion is a pure function of a cell's offset, size and depth, and
//! never asks to subdivide at or beyond its maximum depth.

use std::fmt;

use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    DEFAULT_MAX_DEPTH, DEFAULT_SEED, DOMAIN_SIZE, RANDOM_REFINEMENT_PROBABILITY, SPHERE_RADIUS,
};

/// Shape of the refined region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CriterionKind {
    /// Ring around the middle block, shrinking with depth
    Scaling,
    /// Only the upper-right corner is refined below the first level
    Broadcast,
    /// Uniform refinement plus one extra level in the middle block
    Enclaves,
    /// Cells cut by a circle around the domain centre
    Sphere,
    /// Every cell down to the maximum depth
    Uniform,
    /// Seeded coin flip per cell
    Random,
}

impl CriterionKind {
    /// All built-in criteria
    pub const ALL: [Self; 6] = [
        Self::Scaling,
        Self::Broadcast,
        Self::Enclaves,
        Self::Sphere,
        Self::Uniform,
        Self::Random,
    ];

    /// Lowercase name, also used for output file stems
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scaling => "scaling",
            Self::Broadcast => "broadcast",
            Self::Enclaves => "enclaves",
            Self::Sphere => "sphere",
            Self::Uniform => "uniform",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in refinement predicate with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    /// Which region is refined
    pub kind: CriterionKind,
    /// Cells at this depth or deeper are never subdivided
    pub max_depth: usize,
    /// Extent of the domain, used to locate its centre
    pub domain_size: [f64; 2],
    /// Seed of the random criterion
    pub seed: u64,
}

impl Criterion {
    /// Criterion over the reference domain with default depth and seed
    pub const fn new(kind: CriterionKind) -> Self {
        Self {
            kind,
            max_depth: DEFAULT_MAX_DEPTH,
            domain_size: DOMAIN_SIZE,
            seed: DEFAULT_SEED,
        }
    }

    /// Override the maximum depth
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Override the random seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Whether the cell at `offset`/`size`/`depth` is subdivided
    pub fn should_refine(&self, offset: &[f64], size: &[f64], depth: usize) -> bool {
        let centre = centre_of(offset, size);
        match self.kind {
            CriterionKind::Scaling => self.scaling(&centre, size, depth),
            CriterionKind::Broadcast => self.broadcast(&centre, depth),
            CriterionKind::Enclaves => self.enclaves(&centre, depth),
            CriterionKind::Sphere => self.sphere(&centre, size, depth),
            CriterionKind::Uniform => depth < self.max_depth,
            CriterionKind::Random => self.random(offset, depth),
        }
    }

    /// Borrow the criterion as a refinement predicate
    pub fn predicate(&self) -> impl Fn(&[f64], &[f64], usize) -> bool + '_ {
        move |offset: &[f64], size: &[f64], depth: usize| self.should_refine(offset, size, depth)
    }

    fn scaling(&self, centre: &[f64; 2], size: &[f64], depth: usize) -> bool {
        if depth >= self.max_depth {
            return false;
        }
        if depth == 0 {
            return true;
        }
        for (&c, &dx) in centre.iter().zip(size) {
            if c < 1.0 - dx || c > 2.0 + dx {
                return false;
            }
        }
        !(centre[0] > 1.0 && centre[0] <= 2.0 && centre[1] > 1.0 && centre[1] <= 2.0)
    }

    fn broadcast(&self, centre: &[f64; 2], depth: usize) -> bool {
        if depth >= self.max_depth {
            return false;
        }
        depth < 1 || (centre[0] > 2.0 && centre[1] > 2.0)
    }

    fn enclaves(&self, centre: &[f64; 2], depth: usize) -> bool {
        if depth + 1 < self.max_depth {
            return true;
        }
        depth + 1 == self.max_depth
            && centre[0] > 1.0
            && centre[0] < 2.0
            && centre[1] > 1.0
            && centre[1] < 2.0
    }

    fn sphere(&self, centre: &[f64; 2], size: &[f64], depth: usize) -> bool {
        if depth < 1 {
            return true;
        }
        if depth >= self.max_depth {
            return false;
        }
        let x0 = [self.domain_size[0] / 2.0, self.domain_size[1] / 2.0];
        let (dx, dy) = (centre[0] - x0[0], centre[1] - x0[1]);
        // Unfused: leaf counts depend on the exact rounding of the radius
        #[allow(clippy::suboptimal_flops)]
        let r = (dx * dx + dy * dy).sqrt();
        let band = size.first().copied().unwrap_or(0.0) * 2.0 / 3.0;
        r > SPHERE_RADIUS - band && r < SPHERE_RADIUS + band
    }

    fn random(&self, offset: &[f64], depth: usize) -> bool {
        if depth >= self.max_depth {
            return false;
        }
        if depth == 0 {
            return true;
        }
        let cell_key = offset
            .iter()
            .fold(depth as u64, |acc, coordinate| {
                acc.rotate_left(17) ^ coordinate.to_bits()
            });
        let mut rng = StdRng::seed_from_u64(self.seed ^ cell_key);
        rng.random_bool(RANDOM_REFINEMENT_PROBABILITY)
    }
}

fn centre_of(offset: &[f64], size: &[f64]) -> [f64; 2] {
    let mut centre = [0.0; 2];
    for ((c, &corner), &extent) in centre.iter_mut().zip(offset).zip(size) {
        *c = 0.5f64.mul_add(extent, corner);
    }
    centre
}
