//! Technique catalog loader.
//!
//! Catalog files carry a `schema_version`; files written against another
//! revision are rejected instead of being read with shifted semantics.

use std::collections::HashSet;
use std::path::Path;

use metanin_core::{CATALOG_SCHEMA_VERSION, Technique, TechniqueOracle, Weapon};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Technique catalog structure for RON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub schema_version: u32,
    pub techniques: Vec<Technique>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

impl TechniqueOracle for CatalogData {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }

    fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }
}

/// Loader for technique catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<CatalogData> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    /// Parse and check a catalog document.
    pub fn parse(content: &str) -> LoadResult<CatalogData> {
        let data: CatalogData = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        if data.schema_version != CATALOG_SCHEMA_VERSION {
            anyhow::bail!(
                "catalog schema version {} is not supported (expected {})",
                data.schema_version,
                CATALOG_SCHEMA_VERSION
            );
        }

        let mut seen = HashSet::new();
        for technique in &data.techniques {
            if !seen.insert((technique.element, technique.name.to_ascii_lowercase())) {
                anyhow::bail!(
                    "duplicate {} technique '{}'",
                    technique.element,
                    technique.name
                );
            }
        }

        let mut weapons = HashSet::new();
        for weapon in &data.weapons {
            if !weapons.insert(weapon.name.to_ascii_lowercase()) {
                anyhow::bail!("duplicate weapon '{}'", weapon.name);
            }
        }

        Ok(data)
    }
}
