// SPDX-License-Identifier: MIT OR Apache-2.0
//! Showcase configuration.
//!
//! Everything has a sensible default; the RON file is optional and mostly
//! useful for tweaking the demo cadence without rebuilding.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "showcase.ron";

/// Errors raised while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid RON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
    /// Initial logical width
    #[serde(default = "default_width")]
    pub width: f32,
    /// Initial logical height
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_title() -> String {
    "OSMOS \u{2014} Precision Systems".to_owned()
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    860.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Pipeline demo settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Milliseconds between animation ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Panel width below which the compact layout is used
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: f32,
}

fn default_tick_interval_ms() -> u64 {
    720
}

fn default_compact_breakpoint() -> f32 {
    osmos_showcase_graph::layout::DEFAULT_COMPACT_BREAKPOINT
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            compact_breakpoint: default_compact_breakpoint(),
        }
    }
}

impl DemoConfig {
    /// Tick interval in seconds
    pub fn tick_interval_secs(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}

/// Contact section settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Address shown as the direct mailto link
    #[serde(default = "default_contact_address")]
    pub address: String,
}

fn default_contact_address() -> String {
    "hello@osmos.dev".to_owned()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            address: default_contact_address(),
        }
    }
}

/// Top-level showcase configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
    /// Demo settings
    #[serde(default)]
    pub demo: DemoConfig,
    /// Contact settings
    #[serde(default)]
    pub contact: ContactConfig,
}

impl ShowcaseConfig {
    /// Load a config file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = ron::from_str(&content)?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is absent or
    /// malformed (a bad file is logged, never fatal)
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.demo.tick_interval_ms, 720);
        assert!((config.demo.tick_interval_secs() - 0.72).abs() < 1e-6);
        assert_eq!(config.contact.address, "hello@osmos.dev");
        assert!(config.window.title.starts_with("OSMOS"));
    }

    #[test]
    fn test_ron_round_trip() {
        let config = ShowcaseConfig::default();
        let ron_str = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let loaded: ShowcaseConfig = ron::from_str(&ron_str).unwrap();
        assert_eq!(loaded.demo.tick_interval_ms, config.demo.tick_interval_ms);
        assert_eq!(loaded.window.title, config.window.title);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: ShowcaseConfig =
            ron::from_str("(demo: (tick_interval_ms: 400))").unwrap();
        assert_eq!(loaded.demo.tick_interval_ms, 400);
        assert_eq!(
            loaded.demo.compact_breakpoint,
            osmos_showcase_graph::layout::DEFAULT_COMPACT_BREAKPOINT
        );
        assert_eq!(loaded.contact.address, "hello@osmos.dev");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = ShowcaseConfig::load_or_default(Path::new("definitely-not-here.ron"));
        assert_eq!(config.demo.tick_interval_ms, 720);
    }
}
