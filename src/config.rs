use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::layout::LayoutSettings;
use crate::core::matcher::CancellationPolicy;
use crate::core::selection::SelectionMode;
use crate::models::MapVariant;

/// Library configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub selection: SelectionSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Which hypothetical map the engine compares enacted maps against.
    /// An explicit selector, not an import-order accident.
    #[serde(default = "default_alternate_map")]
    pub alternate_map: MapVariant,
    #[serde(default = "default_lean_exemption")]
    pub lean_exemption: f64,
    #[serde(default = "default_max_district_ratio")]
    pub max_district_ratio: f64,
    #[serde(default = "default_cancellation_bound")]
    pub cancellation_bound: i32,
    #[serde(default = "default_strong_bound")]
    pub strong_bound: i32,
}

impl MatchingSettings {
    pub fn policy(&self) -> CancellationPolicy {
        CancellationPolicy {
            lean_exemption: self.lean_exemption,
            max_district_ratio: self.max_district_ratio,
            cancellation_bound: self.cancellation_bound,
            strong_bound: self.strong_bound,
        }
    }
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            alternate_map: default_alternate_map(),
            lean_exemption: default_lean_exemption(),
            max_district_ratio: default_max_district_ratio(),
            cancellation_bound: default_cancellation_bound(),
            strong_bound: default_strong_bound(),
        }
    }
}

fn default_alternate_map() -> MapVariant {
    MapVariant::Proportional
}
fn default_lean_exemption() -> f64 {
    3.0
}
fn default_max_district_ratio() -> f64 {
    1.3
}
fn default_cancellation_bound() -> i32 {
    2
}
fn default_strong_bound() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionSettings {
    #[serde(default = "default_selection_mode")]
    pub mode: SelectionMode,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            mode: default_selection_mode(),
        }
    }
}

fn default_selection_mode() -> SelectionMode {
    SelectionMode::Exclusive
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CEASEFIRE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CEASEFIRE_)
            // e.g., CEASEFIRE_MATCHING__ALTERNATE_MAP -> matching.alternate_map
            .add_source(
                Environment::with_prefix("CEASEFIRE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CEASEFIRE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
