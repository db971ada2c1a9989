//! Input/output operations and error handling

/// Command-line parsing and per-criterion orchestration
pub mod cli;
/// Domain constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of partitioned leaves
pub mod image;
/// Progress bars for batches of criteria
pub mod progress;
/// TikZ rendering of partitioned leaves
pub mod tikz;
