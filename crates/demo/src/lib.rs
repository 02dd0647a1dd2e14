// File: crates/demo/src/lib.rs
// Summary: Shared pieces of the demo binaries: CLI options, data sources, chart setup and logging.

pub mod cli;
pub mod data;
pub mod logging;
pub mod setup;

pub use cli::ChartArgs;
pub use setup::{build_charts, resolve_config};
