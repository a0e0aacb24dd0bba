//! Command line interface: argument parsing and the generate pipeline.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use puzzlebox_layout::{render, write_svg, BoxDimensions, BoxTemplate};
use puzzlebox_settings::Config;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// SVG dieline
    #[default]
    Svg,
    /// Path descriptions keyed by feature
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "puzzlebox",
    version,
    about = "Generate foldable box templates (dielines) as SVG"
)]
pub struct Cli {
    /// Output file name (".svg" is appended when missing)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Output directory, created when missing
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Front and back panel width in mm [default: 276]
    #[arg(long)]
    pub width: Option<f64>,

    /// Side panel width in mm [default: 206]
    #[arg(long)]
    pub depth: Option<f64>,

    /// Panel height in mm [default: 196]
    #[arg(long)]
    pub height: Option<f64>,

    /// Fold gap at both ends of each flap in mm [default: 2]
    #[arg(long)]
    pub gap: Option<f64>,

    /// Corner radius for flaps and tabs in mm [default: 0]
    #[arg(long)]
    pub radius: Option<f64>,

    /// Configuration file (.toml or .json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Omit the generation timestamp from the document
    #[arg(long)]
    pub no_timestamp: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub path: PathBuf,
    /// Box dimensions the template was generated for
    pub dimensions: BoxDimensions,
    /// Template extent, without padding
    pub width: f64,
    pub height: f64,
    pub paths: usize,
}

impl Cli {
    /// Load the configuration and apply command line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => match Config::default_path() {
                Some(path) => Config::load_or_default(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            },
        };

        let settings = &mut config.box_settings;
        for (value, slot) in [
            (self.width, &mut settings.width),
            (self.depth, &mut settings.depth),
            (self.height, &mut settings.height),
            (self.gap, &mut settings.fold_gap),
            (self.radius, &mut settings.corner_radius),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(output) = &self.output {
            config.output.file_name = Some(output.clone());
        }
        if let Some(dir) = &self.dir {
            config.output.directory = dir.clone();
        }
        if self.no_timestamp {
            config.output.timestamp = false;
        }

        debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

/// Generate the template described by `cli` and write it to disk.
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let config = cli.resolve_config()?;
    config.validate()?;

    let template = BoxTemplate::generate(&config.dimensions())?;

    let directory = &config.output.directory;
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create output directory {}", directory.display()))?;

    let mut path = config.output_path();
    match cli.format {
        OutputFormat::Svg => {
            let document = render(&template, &config.render_options());
            write_svg(&path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        OutputFormat::Json => {
            path.set_extension("json");
            fs::write(&path, template.to_json()?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(file = %path.display(), "Wrote JSON template");
        }
    }

    Ok(RunSummary {
        path,
        dimensions: template.dimensions().clone(),
        width: template.width(),
        height: template.height(),
        paths: template.path_count(),
    })
}
