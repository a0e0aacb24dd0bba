//! Configuration file handling for Puzzlebox
//!
//! Supports JSON and TOML files, chosen by extension. Every section has
//! defaults, so a partial file only overrides what it names.

use crate::error::{SettingsError, SettingsResult};
use puzzlebox_layout::{BoxDimensions, RenderOptions, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Box dimension settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSettings {
    /// Front and back panel width in mm
    pub width: f64,
    /// Side panel width in mm
    pub depth: f64,
    /// Panel height in mm
    pub height: f64,
    /// Clearance at both ends of each flap in mm
    pub fold_gap: f64,
    /// Bottom flap height as a fraction of the depth
    pub bottom_tab_percent: f64,
    /// Outer corner radius for flaps and tabs in mm
    pub corner_radius: f64,
}

impl Default for BoxSettings {
    fn default() -> Self {
        let dims = BoxDimensions::default();
        Self {
            width: dims.width,
            depth: dims.depth,
            height: dims.height,
            fold_gap: dims.fold_gap,
            bottom_tab_percent: dims.bottom_tab_percent,
            corner_radius: dims.corner_radius,
        }
    }
}

impl BoxSettings {
    pub fn dimensions(&self) -> BoxDimensions {
        BoxDimensions {
            width: self.width,
            depth: self.depth,
            height: self.height,
            fold_gap: self.fold_gap,
            bottom_tab_percent: self.bottom_tab_percent,
            corner_radius: self.corner_radius,
        }
    }
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the template is written to
    pub directory: PathBuf,
    /// Explicit file name; derived from the dimensions when unset
    pub file_name: Option<String>,
    /// Canvas padding around the template in mm
    pub padding: f64,
    /// Add a generation timestamp to the document
    pub timestamp: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("out"),
            file_name: None,
            padding: 20.0,
            timestamp: true,
        }
    }
}

impl OutputSettings {
    /// File name for a box: the explicit name with `.svg` ensured, or
    /// `box_<W>_<D>_<H>.svg`.
    pub fn file_name_for(&self, box_settings: &BoxSettings) -> String {
        match &self.file_name {
            Some(name) if name.ends_with(".svg") => name.clone(),
            Some(name) => {
                if Path::new(name).extension().is_some() {
                    warn!(file_name = %name, "Output file name lacks .svg extension, appending it");
                }
                format!("{}.svg", name)
            }
            None => format!(
                "box_{:.0}_{:.0}_{:.0}.svg",
                box_settings.width, box_settings.depth, box_settings.height
            ),
        }
    }

    /// Full output path for a box.
    pub fn path_for(&self, box_settings: &BoxSettings) -> PathBuf {
        self.directory.join(self.file_name_for(box_settings))
    }
}

/// Stroke appearance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub fold_color: String,
    pub cut_color: String,
    pub stroke_width: f64,
    /// SVG dash array for fold lines; empty for solid
    pub fold_dash: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            fold_color: "red".to_string(),
            cut_color: "blue".to_string(),
            stroke_width: 1.0,
            fold_dash: "5,1".to_string(),
        }
    }
}

impl StyleSettings {
    pub fn fold_style(&self) -> StrokeStyle {
        if self.fold_dash.trim().is_empty() {
            StrokeStyle::solid(&self.fold_color, self.stroke_width)
        } else {
            StrokeStyle::dashed(&self.fold_color, self.stroke_width, &self.fold_dash)
        }
    }

    pub fn cut_style(&self) -> StrokeStyle {
        StrokeStyle::solid(&self.cut_color, self.stroke_width)
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "box")]
    pub box_settings: BoxSettings,
    pub output: OutputSettings,
    pub style: StyleSettings,
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        config.validate()?;
        info!(file = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(file = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Platform config location, e.g. `~/.config/puzzlebox/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("puzzlebox").join(CONFIG_FILE_NAME))
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.box_settings
            .dimensions()
            .validate()
            .map_err(|e| SettingsError::invalid("box", e.to_string()))?;

        if !self.output.padding.is_finite() || self.output.padding < 0.0 {
            return Err(SettingsError::invalid("output.padding", "must be >= 0"));
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(SettingsError::invalid("output.directory", "must not be empty"));
        }

        if let Some(name) = &self.output.file_name {
            if name.trim().is_empty() {
                return Err(SettingsError::invalid("output.file_name", "must not be empty"));
            }
        }

        if !(self.style.stroke_width.is_finite() && self.style.stroke_width > 0.0) {
            return Err(SettingsError::invalid("style.stroke_width", "must be > 0"));
        }

        for (key, color) in [
            ("style.fold_color", &self.style.fold_color),
            ("style.cut_color", &self.style.cut_color),
        ] {
            if color.trim().is_empty() {
                return Err(SettingsError::invalid(key, "must not be empty"));
            }
        }

        Ok(())
    }

    pub fn dimensions(&self) -> BoxDimensions {
        self.box_settings.dimensions()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            padding: self.output.padding,
            fold_style: self.style.fold_style(),
            cut_style: self.style.cut_style(),
            title: None,
            timestamp: self.output.timestamp,
        }
    }

    /// Where the template for the current box is written.
    pub fn output_path(&self) -> PathBuf {
        self.output.path_for(&self.box_settings)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
