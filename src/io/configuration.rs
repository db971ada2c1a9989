//! Domain constants and runtime configuration defaults

// Reference domain of the demo criteria
/// Lower corner of the default domain
pub const DOMAIN_OFFSET: [f64; 2] = [0.0, 0.0];
/// Extent of the default domain
pub const DOMAIN_SIZE: [f64; 2] = [3.0, 3.0];

// Default values for configurable parameters
/// Deepest level the built-in criteria refine to
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// Number of contiguous groups the curve is cut into
pub const DEFAULT_PARTITIONS: usize = 4;
/// Shallowest depth at which leaves are emitted (drops an unrefined root)
pub const DEFAULT_FIRST_LEVEL: usize = 1;
/// Fixed seed for the random criterion
pub const DEFAULT_SEED: u64 = 42;

// Prevents a runaway predicate from exhausting the stack
/// Depth at which the CLI aborts refinement
pub const DEFAULT_DEPTH_CEILING: usize = 12;

// Criterion shape parameters
/// Radius of the circle traced by the sphere criterion
pub const SPHERE_RADIUS: f64 = 0.99;
/// Probability that the random criterion subdivides a cell
pub const RANDOM_REFINEMENT_PROBABILITY: f64 = 0.5;

// Safety limit for the occupancy mask used by tiling verification
/// Maximum number of fine cells rasterised during verification
pub const MAX_COVERAGE_CELLS: usize = 1 << 26;

// Output settings
/// Default PNG edge length in pixels (3^6)
pub const DEFAULT_RESOLUTION: u32 = 729;
/// Largest accepted PNG edge length in pixels
pub const MAX_RESOLUTION: u32 = 8192;
/// Extension of the TikZ output files
pub const TIKZ_EXTENSION: &str = "tex";
/// Extension of the raster output files
pub const PNG_EXTENSION: &str = "png";

/// Fill colors cycled through for consecutive partitions
pub const PARTITION_PALETTE: [[u8; 3]; 8] = [
    [228, 26, 28],
    [55, 126, 184],
    [77, 175, 74],
    [152, 78, 163],
    [255, 127, 0],
    [255, 255, 51],
    [166, 86, 40],
    [247, 129, 191],
];
/// Cell border color in raster output
pub const BORDER_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Curve color in raster output
pub const CURVE_COLOR: [u8; 4] = [20, 20, 20, 255];
/// Background color for pixels no leaf covers
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
