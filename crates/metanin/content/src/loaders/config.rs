//! Calculator configuration loader.

use std::path::Path;

use metanin_core::CalcConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculator configuration from TOML files.
///
/// Missing keys fall back to [`CalcConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<CalcConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CalcConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
