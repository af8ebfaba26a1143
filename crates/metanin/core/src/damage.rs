//! Damage and DPS figures for techniques and weapons.
//!
//! Formula: `damage = base + resolved[scaling] × 0.6`, `dps = damage / cooldown`.
//! Instant (zero-cooldown) sources report 0 DPS.

use std::cmp::Ordering;

use crate::config::CalcConfig;
use crate::stats::ResolvedAttributes;
use crate::technique::{DamageSource, Element, Scaling, Technique, Weapon};

/// Damage and DPS for one damage source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageFigures {
    pub damage: f64,
    pub dps: f64,
}

/// Damage figures for any [`DamageSource`].
pub fn damage_figures<S>(source: &S, resolved: &ResolvedAttributes) -> DamageFigures
where
    S: DamageSource + ?Sized,
{
    let scaling = source
        .scaling()
        .attribute()
        .map_or(0.0, |a| f64::from(resolved.get(a)) * CalcConfig::SCALING_FACTOR);
    let damage = f64::from(source.base_damage()) + scaling;

    let dps = match source.cooldown() {
        0 => 0.0,
        cooldown => damage / f64::from(cooldown),
    };

    DamageFigures { damage, dps }
}

/// Damage figures for a single technique.
pub fn compute_technique_row(technique: &Technique, resolved: &ResolvedAttributes) -> DamageFigures {
    damage_figures(technique, resolved)
}

/// Aggregate figures for a technique rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationSummary {
    /// Σ damage / Σ cooldown over techniques with a cooldown.
    pub rotation_dps: f64,
    /// Σ chakra cost over every technique in the set.
    pub total_chakra_cost: u32,
}

/// Time-weighted DPS and total chakra cost of an active technique set.
///
/// Zero-cooldown techniques count towards chakra cost only.
pub fn compute_rotation_summary<'a, I>(active: I, resolved: &ResolvedAttributes) -> RotationSummary
where
    I: IntoIterator<Item = &'a Technique>,
{
    let mut damage_sum = 0.0;
    let mut cooldown_sum = 0u64;
    let mut total_chakra_cost = 0u32;

    for technique in active {
        total_chakra_cost = total_chakra_cost.saturating_add(technique.chakra_cost);
        if technique.cooldown > 0 {
            damage_sum += damage_figures(technique, resolved).damage;
            cooldown_sum += u64::from(technique.cooldown);
        }
    }

    let rotation_dps = if cooldown_sum > 0 {
        damage_sum / cooldown_sum as f64
    } else {
        0.0
    };

    RotationSummary {
        rotation_dps,
        total_chakra_cost,
    }
}

/// One row of the technique table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechniqueRow {
    pub name: String,
    pub element: Element,
    pub scaling: Scaling,
    pub damage: f64,
    pub dps: f64,
    pub chakra_cost: u32,
    pub cooldown: u32,
    pub min_level: Option<u32>,
    /// False when the character is below the technique's minimum level.
    pub unlocked: bool,
}

impl TechniqueRow {
    pub fn new(technique: &Technique, resolved: &ResolvedAttributes, level: u32) -> Self {
        let figures = damage_figures(technique, resolved);
        Self {
            name: technique.name.to_string(),
            element: technique.element,
            scaling: technique.scaling,
            damage: figures.damage,
            dps: figures.dps,
            chakra_cost: technique.chakra_cost,
            cooldown: technique.cooldown,
            min_level: technique.min_level,
            unlocked: technique.is_unlocked_at(level),
        }
    }
}

/// Columns the technique table can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortKey {
    Name,
    Element,
    Damage,
    #[default]
    Dps,
    ChakraCost,
    Cooldown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Technique rows for display, in catalog order until sorted.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechniqueTable {
    pub rows: Vec<TechniqueRow>,
}

impl TechniqueTable {
    pub fn build<'a, I>(techniques: I, resolved: &ResolvedAttributes, level: u32) -> Self
    where
        I: IntoIterator<Item = &'a Technique>,
    {
        Self {
            rows: techniques
                .into_iter()
                .map(|t| TechniqueRow::new(t, resolved, level))
                .collect(),
        }
    }

    /// Stable sort by `key`.
    pub fn sort_by(&mut self, key: SortKey, order: SortOrder) {
        self.rows.sort_by(|a, b| {
            let ordering = compare_rows(a, b, key);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    /// Sorted copy, leaving `self` untouched.
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Self {
        let mut table = self.clone();
        table.sort_by(key, order);
        table
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TechniqueRow> {
        self.rows.iter()
    }
}

fn compare_rows(a: &TechniqueRow, b: &TechniqueRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Element => a.element.cmp(&b.element),
        SortKey::Damage => a.damage.total_cmp(&b.damage),
        SortKey::Dps => a.dps.total_cmp(&b.dps),
        SortKey::ChakraCost => a.chakra_cost.cmp(&b.chakra_cost),
        SortKey::Cooldown => a.cooldown.cmp(&b.cooldown),
    }
}

/// Melee figures for one weapon. Weapons never join the rotation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRow {
    pub name: String,
    pub scaling: Scaling,
    pub damage: f64,
    pub dps: f64,
    pub attack_interval: u32,
}

impl WeaponRow {
    pub fn new(weapon: &Weapon, resolved: &ResolvedAttributes) -> Self {
        let figures = damage_figures(weapon, resolved);
        Self {
            name: weapon.name.to_string(),
            scaling: weapon.scaling,
            damage: figures.damage,
            dps: figures.dps,
            attack_interval: weapon.attack_interval,
        }
    }
}
