//! Content factory for building oracles from a data directory.

use std::path::{Path, PathBuf};

use metanin_core::CalcConfig;

use crate::loaders::{CatalogData, CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads calculator content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── catalog.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CATALOG_FILE: &'static str = "catalog.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load calculator configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CalcConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load the technique catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<CatalogData> {
        CatalogLoader::load(&self.catalog_path())
    }

    pub fn has_config(&self) -> bool {
        self.config_path().is_file()
    }

    pub fn has_catalog(&self) -> bool {
        self.catalog_path().is_file()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Self::CONFIG_FILE)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(Self::CATALOG_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
