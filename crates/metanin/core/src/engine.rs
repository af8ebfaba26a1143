//! Full recompute pipeline for a build.
//!
//! The [`BuildEngine`] runs every calculation in dependency order:
//!
//! ```text
//! Build ──► AttributeResolver ──► ResolvedAttributes ──► DamageEngine
//!   │                                                        │
//!   └────► ProgressionCalculator ──► BuildValidator          │
//!                     │                                      │
//!                     └──────────── level gates ─────────────┘
//! ```
//!
//! Every call recomputes from scratch; nothing is cached between calls.

use crate::build::Build;
use crate::catalog::{ActiveSelection, TechniqueOracle};
use crate::config::CalcConfig;
use crate::damage::{
    RotationSummary, SortKey, SortOrder, TechniqueTable, WeaponRow, compute_rotation_summary,
};
use crate::progression::Progression;
use crate::stats::ResolvedAttributes;
use crate::validation::{ValidationReport, ValidationState};

/// Everything the presentation layer renders for one build.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildReport {
    pub resolved: ResolvedAttributes,
    pub progression: Progression,
    pub validation: ValidationReport,
    /// Candidate techniques of the selected groups, locked ones flagged.
    pub techniques: TechniqueTable,
    pub rotation: RotationSummary,
    /// Every weapon in the catalog, reported individually.
    pub weapons: Vec<WeaponRow>,
    /// Row of the equipped weapon, if the build names a known one.
    pub equipped_weapon: Option<WeaponRow>,
}

impl BuildReport {
    pub fn state(&self) -> ValidationState {
        self.validation.state()
    }

    /// Technique table sorted for display.
    pub fn sorted_techniques(&self, key: SortKey, order: SortOrder) -> TechniqueTable {
        self.techniques.sorted(key, order)
    }
}

/// Evaluates builds against a technique catalog.
pub struct BuildEngine<'a, O: TechniqueOracle + ?Sized> {
    catalog: &'a O,
    config: CalcConfig,
}

impl<'a, O: TechniqueOracle + ?Sized> BuildEngine<'a, O> {
    pub fn new(catalog: &'a O) -> Self {
        Self::with_config(catalog, CalcConfig::default())
    }

    pub fn with_config(catalog: &'a O, config: CalcConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'a O {
        self.catalog
    }

    /// Run the full pipeline for `build`.
    pub fn evaluate(&self, build: &Build) -> BuildReport {
        let resolved = build.resolve();

        let progression = Progression::from_spent(build.points_spent(), self.config.max_points);
        let validation = ValidationReport::check(
            progression.points_spent,
            progression.points_available,
            self.config.max_points,
        );

        let selection = self.selection(build, progression.level);
        let candidates = selection.candidates(self.catalog);
        let techniques =
            TechniqueTable::build(candidates.iter().copied(), &resolved, progression.level);
        let rotation = compute_rotation_summary(selection.active(self.catalog), &resolved);

        let weapons = self
            .catalog
            .weapons()
            .iter()
            .map(|w| WeaponRow::new(w, &resolved))
            .collect();
        let equipped_weapon = build
            .weapon()
            .and_then(|name| self.catalog.weapon(name))
            .map(|w| WeaponRow::new(w, &resolved));

        BuildReport {
            resolved,
            progression,
            validation,
            techniques,
            rotation,
            weapons,
            equipped_weapon,
        }
    }

    /// Active technique selection for `build` at `level`.
    pub fn selection(&self, build: &Build, level: u32) -> ActiveSelection {
        ActiveSelection {
            primary: build.primary(),
            secondary: build.secondary(),
            include_common: self.config.include_common,
            level,
        }
    }
}
