//! # Puzzlebox
//!
//! Parametric generator for foldable box templates (dielines).
//!
//! ## Architecture
//!
//! Puzzlebox is organized as a workspace with multiple crates:
//!
//! 1. **puzzlebox-core** - Path builder with per-corner rounding, path data, shapes
//! 2. **puzzlebox-layout** - Box dimensions, dieline features, SVG export
//! 3. **puzzlebox-settings** - JSON/TOML configuration
//! 4. **puzzlebox** - Command line binary tying the crates together

pub mod cli;

pub use cli::{run, Cli, OutputFormat, RunSummary};

pub use puzzlebox_core::{CornerPolicy, PathBuilder, PathCommand, PathData, PathError, Point};
pub use puzzlebox_layout::{BoxDimensions, BoxTemplate, FeatureKind, LayoutError, RenderOptions};
pub use puzzlebox_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging to stderr with:
/// - RUST_LOG environment variable support
/// - INFO by default, DEBUG when `verbose`
/// - Target and line numbers on every event
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
