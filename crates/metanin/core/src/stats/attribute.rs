//! Attributes - the five trainable character stats.
//!
//! Base attributes are the only user-entered stats. Resolved attributes are
//! derived from them by the [`resolver`](super::resolver) and are never stored.

use crate::config::CalcConfig;

/// The five attributes that define a character build.
///
/// - **STR** (Strength): taijutsu and heavy weapon scaling
/// - **FRT** (Fortitude): survivability
/// - **INT** (Intellect): ninjutsu scaling
/// - **AGI** (Agility): light weapon scaling
/// - **CHK** (Chakra): chakra pool and medical scaling
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    #[strum(to_string = "Strength", serialize = "STR")]
    Strength,
    #[strum(to_string = "Fortitude", serialize = "FRT")]
    Fortitude,
    #[strum(to_string = "Intellect", serialize = "INT")]
    Intellect,
    #[strum(to_string = "Agility", serialize = "AGI")]
    Agility,
    #[strum(to_string = "Chakra", serialize = "CHK")]
    Chakra,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Fortitude,
        Attribute::Intellect,
        Attribute::Agility,
        Attribute::Chakra,
    ];

    /// Number of attributes.
    pub const COUNT: usize = Self::ALL.len();

    /// Three-letter abbreviation shown in build tables.
    pub const fn short_name(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Fortitude => "FRT",
            Attribute::Intellect => "INT",
            Attribute::Agility => "AGI",
            Attribute::Chakra => "CHK",
        }
    }

    /// Parse an attribute name, returning `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }
}

/// User-entered attribute values.
///
/// Values are expected to be at or above [`BaseAttributes::FLOOR`]; the
/// [`Build`](crate::Build) setters enforce that floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub strength: i32,
    pub fortitude: i32,
    pub intellect: i32,
    pub agility: i32,
    pub chakra: i32,
}

impl BaseAttributes {
    /// Minimum value of every base attribute.
    pub const FLOOR: i32 = CalcConfig::ATTRIBUTE_FLOOR;

    pub fn new(strength: i32, fortitude: i32, intellect: i32, agility: i32, chakra: i32) -> Self {
        Self {
            strength,
            fortitude,
            intellect,
            agility,
            chakra,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Fortitude => self.fortitude,
            Attribute::Intellect => self.intellect,
            Attribute::Agility => self.agility,
            Attribute::Chakra => self.chakra,
        }
    }

    /// Set an attribute, raising values below the floor to the floor.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        let value = value.max(Self::FLOOR);
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Fortitude => self.fortitude = value,
            Attribute::Intellect => self.intellect = value,
            Attribute::Agility => self.agility = value,
            Attribute::Chakra => self.chakra = value,
        }
    }

    /// Sum of all base values, widened so any five `i32` values fit.
    pub fn total(&self) -> i64 {
        Attribute::ALL.iter().map(|&a| i64::from(self.get(a))).sum()
    }

    /// Points invested above the floor baseline.
    ///
    /// `total - FLOOR × COUNT`, never negative, saturating at `u32::MAX`.
    pub fn points_spent(&self) -> u32 {
        let baseline = i64::from(Self::FLOOR) * Attribute::COUNT as i64;
        u32::try_from((self.total() - baseline).max(0)).unwrap_or(u32::MAX)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.iter().map(move |&a| (a, self.get(a)))
    }
}

impl Default for BaseAttributes {
    /// Fresh build: every attribute at the floor.
    fn default() -> Self {
        let floor = Self::FLOOR;
        Self::new(floor, floor, floor, floor, floor)
    }
}

/// Attribute values after guild, charm and faction bonuses.
///
/// This is the resolver's output and the DamageEngine's input.
/// It is NEVER stored - always recomputed when the build changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedAttributes {
    pub strength: i32,
    pub fortitude: i32,
    pub intellect: i32,
    pub agility: i32,
    pub chakra: i32,
}

impl ResolvedAttributes {
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Fortitude => self.fortitude,
            Attribute::Intellect => self.intellect,
            Attribute::Agility => self.agility,
            Attribute::Chakra => self.chakra,
        }
    }

    pub(crate) fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Fortitude => self.fortitude = value,
            Attribute::Intellect => self.intellect = value,
            Attribute::Agility => self.agility = value,
            Attribute::Chakra => self.chakra = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.iter().map(move |&a| (a, self.get(a)))
    }
}

impl From<&BaseAttributes> for ResolvedAttributes {
    /// Resolution with no bonuses at all.
    fn from(base: &BaseAttributes) -> Self {
        Self {
            strength: base.strength,
            fortitude: base.fortitude,
            intellect: base.intellect,
            agility: base.agility,
            chakra: base.chakra,
        }
    }
}
