//! Compiled-in technique catalog.
//!
//! Rows are kept as plain const tables so the reference data reads like a
//! spreadsheet; [`StaticCatalog::new`] turns them into records once.

mod techniques;
mod weapons;

use metanin_core::{CATALOG_SCHEMA_VERSION, Technique, TechniqueOracle, Weapon};

/// Catalog built from the tables shipped with the crate.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    techniques: Vec<Technique>,
    weapons: Vec<Weapon>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            techniques: techniques::TECHNIQUES
                .iter()
                .map(techniques::TechniqueRow::to_technique)
                .collect(),
            weapons: weapons::WEAPONS
                .iter()
                .map(weapons::WeaponRow::to_weapon)
                .collect(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TechniqueOracle for StaticCatalog {
    fn schema_version(&self) -> u32 {
        CATALOG_SCHEMA_VERSION
    }

    fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }
}
