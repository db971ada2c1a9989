//! Command-line interface for refining demo domains and exporting their Peano curves

use crate::criteria::{Criterion, CriterionKind};
use crate::curve::{LeafCell, Motif, Partitioning, TraversalConfig};
use crate::io::configuration::{
    DEFAULT_DEPTH_CEILING, DEFAULT_FIRST_LEVEL, DEFAULT_MAX_DEPTH, DEFAULT_PARTITIONS,
    DEFAULT_RESOLUTION, DEFAULT_SEED, DOMAIN_OFFSET, DOMAIN_SIZE, PNG_EXTENSION, TIKZ_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::{ProgressManager, Stage};
use crate::io::tikz::export_tikz;
use crate::spatial::coverage::{TilingReport, verify_tiling};
use crate::spatial::{AdaptiveTree, CellGeometry, RefinementLimits};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "peanotree")]
#[command(
    author,
    version,
    about = "Refine a square domain adaptively and linearise its leaves along a Peano curve"
)]
/// Command-line arguments for the curve export tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving one output file per criterion
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Refinement criteria to run
    #[arg(short, long = "criterion", value_enum, default_values_t = [CriterionKind::Sphere])]
    pub criteria: Vec<CriterionKind>,

    /// Deepest refinement level of the built-in criteria
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Number of contiguous partitions along the curve
    #[arg(short, long, default_value_t = DEFAULT_PARTITIONS)]
    pub partitions: usize,

    /// Shallowest depth at which leaves are emitted
    #[arg(short = 'l', long, default_value_t = DEFAULT_FIRST_LEVEL)]
    pub first_level: usize,

    /// Motif of the root cell
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = Motif::P)]
    pub motif: Motif,

    /// Seed of the random criterion
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Abort when a criterion still subdivides at this depth
    #[arg(long, default_value_t = DEFAULT_DEPTH_CEILING)]
    pub depth_ceiling: usize,

    /// Also export a PNG rendering
    #[arg(long)]
    pub png: bool,

    /// Edge length of the PNG rendering in pixels
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: u32,

    /// Fail unless the leaves tile the domain exactly
    #[arg(long)]
    pub verify: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process criteria even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Criteria to run, duplicates removed, in command-line order
    pub fn unique_criteria(&self) -> Vec<CriterionKind> {
        let mut unique = Vec::with_capacity(self.criteria.len());
        for kind in &self.criteria {
            if !unique.contains(kind) {
                unique.push(*kind);
            }
        }
        unique
    }

    /// Traversal settings selected on the command line
    pub const fn traversal_config(&self) -> TraversalConfig {
        TraversalConfig {
            motif: self.motif,
            first_level: self.first_level,
        }
    }
}

/// Leaves of one criterion in curve order, with their partitioning
#[derive(Debug, Clone)]
pub struct CurveResult {
    /// Criterion that produced the tree
    pub kind: CriterionKind,
    /// Leaves in Peano order
    pub leaves: Vec<LeafCell<f64>>,
    /// Contiguous grouping of the leaves
    pub partitioning: Partitioning,
    /// Coverage check, present when verification was requested
    pub tiling: Option<TilingReport>,
    /// Total number of tree nodes
    pub node_count: usize,
}

/// Orchestrates refinement, traversal and export for every selected criterion
pub struct CurveProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CurveProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run every criterion according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, refinement hits the
    /// depth ceiling, verification fails, or an output cannot be written
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;
        let kinds = self.cli.unique_criteria();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(kinds.len());
        }

        for (index, kind) in kinds.iter().enumerate() {
            if let Some(ref pm) = self.progress_manager {
                pm.start_job(index, kind.name());
            }

            if !self.should_process(*kind) {
                if let Some(ref pm) = self.progress_manager {
                    pm.skip_job(index);
                }
                continue;
            }

            let result = self.run_criterion(*kind, index)?;
            self.export(&result, index)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_job(index, result.leaves.len());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Refine, traverse, partition and optionally verify one criterion
    ///
    /// # Errors
    ///
    /// Returns an error if refinement hits the depth ceiling, the partition
    /// count is zero, or verification finds an inexact tiling
    pub fn run_criterion(&self, kind: CriterionKind, index: usize) -> Result<CurveResult> {
        let criterion = Criterion::new(kind)
            .with_max_depth(self.cli.max_depth)
            .with_seed(self.cli.seed);
        let domain = CellGeometry::new(DOMAIN_OFFSET.to_vec(), DOMAIN_SIZE.to_vec())?;

        self.stage(index, Stage::Refining);
        let predicate = criterion.predicate();
        let tree = AdaptiveTree::build(
            domain,
            &predicate,
            RefinementLimits::with_ceiling(self.cli.depth_ceiling),
        )?;

        self.stage(index, Stage::Traversing);
        let leaves = tree.peano_order(self.cli.traversal_config())?;
        let partitioning = Partitioning::new(leaves.len(), self.cli.partitions)?;

        let tiling = if self.cli.verify {
            self.stage(index, Stage::Verifying);
            Some(verify_tiling(tree.domain(), &tree.leaves())?.into_result()?)
        } else {
            None
        };

        Ok(CurveResult {
            kind,
            leaves,
            partitioning,
            tiling,
            node_count: tree.node_count(),
        })
    }

    fn export(&self, result: &CurveResult, index: usize) -> Result<()> {
        self.stage(index, Stage::Exporting);

        let tikz_path = self.output_path(result.kind, TIKZ_EXTENSION);
        export_tikz(&result.leaves, &result.partitioning, &tikz_path)?;

        if self.cli.png {
            let domain = CellGeometry::new(DOMAIN_OFFSET.to_vec(), DOMAIN_SIZE.to_vec())?;
            let png_path = self.output_path(result.kind, PNG_EXTENSION);
            export_png(
                &domain,
                &result.leaves,
                &result.partitioning,
                self.cli.resolution,
                &png_path,
            )?;
        }

        self.report(result);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.partitions == 0 {
            return Err(invalid_parameter(
                "partitions",
                &self.cli.partitions,
                &"at least one partition is required",
            ));
        }
        if self.cli.max_depth > self.cli.depth_ceiling {
            return Err(invalid_parameter(
                "max-depth",
                &self.cli.max_depth,
                &format!("exceeds the depth ceiling {}", self.cli.depth_ceiling),
            ));
        }
        if self.cli.output_dir.is_file() {
            return Err(invalid_parameter(
                "output-dir",
                &self.cli.output_dir.display(),
                &"must be a directory",
            ));
        }
        Ok(())
    }

    fn should_process(&self, kind: CriterionKind) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        // Skip only when every requested format is already on disk
        let complete = self
            .requested_extensions()
            .iter()
            .all(|extension| self.output_path(kind, extension).exists());
        if complete {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet && self.progress_manager.is_none() {
                eprintln!("Skipping: {kind} (output exists)");
            }
            false
        } else {
            true
        }
    }

    fn requested_extensions(&self) -> Vec<&'static str> {
        let mut extensions = vec![TIKZ_EXTENSION];
        if self.cli.png {
            extensions.push(PNG_EXTENSION);
        }
        extensions
    }

    // Allow print for the per-criterion summary
    #[allow(clippy::print_stderr)]
    fn report(&self, result: &CurveResult) {
        if self.cli.quiet {
            return;
        }
        if let Some(tiling) = result.tiling {
            eprintln!(
                "{}: {} leaves, {} nodes, tiling {}x{} exact",
                result.kind,
                result.leaves.len(),
                result.node_count,
                tiling.resolution[0],
                tiling.resolution[1],
            );
        }
    }

    fn stage(&self, index: usize, stage: Stage) {
        if let Some(ref pm) = self.progress_manager {
            pm.set_stage(index, stage);
        }
    }

    /// Output file for `kind` with the given extension
    pub fn output_path(&self, kind: CriterionKind, extension: &str) -> PathBuf {
        output_path_in(&self.cli.output_dir, kind, extension)
    }
}

fn output_path_in(dir: &Path, kind: CriterionKind, extension: &str) -> PathBuf {
    dir.join(format!("{}.{extension}", kind.name()))
}
