//! Deterministic build calculation rules.
//!
//! `metanin-core` defines the canonical rules (attribute resolution, level
//! curve, technique damage, build validation) and exposes pure APIs that the
//! session layer and any presentation layer call into. The full pipeline runs
//! through [`engine::BuildEngine`]; catalog data is read through the
//! [`catalog::TechniqueOracle`] trait and provided by `metanin-content`.
pub mod build;
pub mod catalog;
pub mod config;
pub mod damage;
pub mod engine;
pub mod error;
pub mod progression;
pub mod stats;
pub mod technique;
pub mod validation;

pub use build::Build;
pub use catalog::{ActiveSelection, CATALOG_SCHEMA_VERSION, TechniqueOracle};
pub use config::CalcConfig;
pub use damage::{
    DamageFigures, RotationSummary, SortKey, SortOrder, TechniqueRow, TechniqueTable, WeaponRow,
    compute_rotation_summary, compute_technique_row, damage_figures,
};
pub use engine::{BuildEngine, BuildReport};
pub use error::{BuildError, parse_element};
pub use progression::{
    Progression, compute_available_points, compute_level, compute_level_capped, remaining_points,
};
pub use stats::{
    Attribute, AttributeModifiers, BaseAttributes, Bonus, Charm, ResolvedAttributes,
    resolve_attributes,
};
pub use technique::{DamageSource, Element, Scaling, Technique, Weapon};
pub use validation::{
    ValidationReport, ValidationState, validate_build, validate_build_with_cap,
};
