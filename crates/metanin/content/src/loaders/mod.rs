//! Content loaders for reading catalog and configuration files.
//!
//! RON is used for catalogs and TOML for calculator configuration, the same
//! split the data directory uses (see [`ContentFactory`]).

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{CatalogData, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
