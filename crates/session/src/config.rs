//! Session configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use metanin_core::CalcConfig;

/// Configuration required to bootstrap a build session.
///
/// Calculator overrides sit on top of whatever `config.toml` provides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory holding `config.toml` and `catalog.ron`.
    pub data_dir: Option<PathBuf>,
    pub max_points: Option<u32>,
    pub include_common: Option<bool>,
    /// Directory for the session log file; stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `METANIN_DATA_DIR` - Content data directory (default: compiled-in catalog)
    /// - `METANIN_MAX_POINTS` - Global point cap (default: 285)
    /// - `METANIN_INCLUDE_COMMON` - Include the Common group (default: true)
    /// - `METANIN_LOG_DIR` - Log file directory (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load a `.env` file if present, then read the environment.
    pub fn load() -> Self {
        // Missing .env is not an error
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: read("METANIN_DATA_DIR").map(PathBuf::from),
            max_points: read("METANIN_MAX_POINTS").and_then(|v| parse(&v)),
            include_common: read("METANIN_INCLUDE_COMMON").and_then(|v| parse_flag(&v)),
            log_dir: read("METANIN_LOG_DIR").map(PathBuf::from),
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_max_points(mut self, max_points: u32) -> Self {
        self.max_points = Some(max_points);
        self
    }

    pub fn with_common(mut self, include_common: bool) -> Self {
        self.include_common = Some(include_common);
        self
    }

    /// Apply the overrides to a calculator configuration.
    pub fn apply(&self, mut calc: CalcConfig) -> CalcConfig {
        if let Some(max_points) = self.max_points {
            calc.max_points = max_points;
        }
        if let Some(include_common) = self.include_common {
            calc.include_common = include_common;
        }
        calc
    }
}

fn parse<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    value.trim().parse().ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
