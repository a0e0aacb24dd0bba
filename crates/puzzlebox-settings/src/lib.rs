//! # Puzzlebox Settings
//!
//! Configuration for box generation, stored as JSON or TOML. Sections:
//! - `box`: dimensions, fold gap, flap proportions and corner radius
//! - `output`: directory, file name and canvas padding
//! - `style`: fold and cut stroke appearance

pub mod config;
pub mod error;

pub use config::{BoxSettings, Config, OutputSettings, StyleSettings, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
