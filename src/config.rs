//! Host configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists), or the file given with `--config`
//! 3. Environment variables prefixed with `TRACK_REVEAL_`
//!
//! Example environment variable: `TRACK_REVEAL_WINDOW__TARGET_FPS=30`
//!
//! Only the host is configurable. Animation timing and the track itself are
//! fixed constants.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::animation::timing::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Window and frame pacing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    pub title: String,
    /// Ticks delivered per second
    pub target_fps: u32,
    /// Sync presentation to the display refresh
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            title: "Track Creation Demonstration".to_string(),
            target_fps: 60,
            vsync: true,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Default the log filter to `debug` when RUST_LOG is unset
    pub verbose_logging: bool,
}

impl AppConfig {
    /// Load configuration with the default `config.ron` lookup
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, optionally from an explicit file instead of `config.ron`
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let file = match path {
            // An explicitly requested file must exist
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("config")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("window.width", i64::from(defaults.window.width))?
            .set_default("window.height", i64::from(defaults.window.height))?
            .set_default("window.title", defaults.window.title.clone())?
            .set_default("window.target_fps", i64::from(defaults.window.target_fps))?
            .set_default("window.vsync", defaults.window.vsync)?
            .set_default("debug.verbose_logging", defaults.debug.verbose_logging)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (TRACK_REVEAL_WINDOW__TARGET_FPS, etc.)
            .add_source(
                Environment::with_prefix("TRACK_REVEAL")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.window.target_fps == 0 {
            anyhow::bail!("window.target_fps must be at least 1");
        }
        if self.window.width == 0 || self.window.height == 0 {
            anyhow::bail!(
                "window size must be non-zero, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(())
    }

    /// Pretty RON rendering, used for debug logging
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize configuration")
    }
}
