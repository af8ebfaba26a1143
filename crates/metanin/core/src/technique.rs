//! Technique and weapon reference records.
//!
//! Records are plain data tagged by a closed [`Element`]. Concrete catalogs
//! live in `metanin-content`; the engine reads them through
//! [`TechniqueOracle`](crate::catalog::TechniqueOracle).

use std::borrow::Cow;

use crate::stats::Attribute;

/// Technique element (specialization).
///
/// `Common` is the catch-all utility group available to every build; it can
/// never be chosen as a primary or secondary element.
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
pub enum Element {
    Fire,
    Wind,
    Lightning,
    Earth,
    Water,
    Medical,
    Weapon,
    Taijutsu,
    Common,
}

impl Element {
    /// Elements that can be picked as primary or secondary specialization.
    pub const SELECTABLE: [Element; 8] = [
        Element::Fire,
        Element::Wind,
        Element::Lightning,
        Element::Earth,
        Element::Water,
        Element::Medical,
        Element::Weapon,
        Element::Taijutsu,
    ];

    pub const fn is_selectable(&self) -> bool {
        !matches!(self, Element::Common)
    }

    /// Secondary choices once `primary` is taken.
    pub fn secondary_choices(primary: Element) -> impl Iterator<Item = Element> {
        Self::SELECTABLE.into_iter().filter(move |e| *e != primary)
    }
}

/// Attribute a technique's damage scales with.
///
/// Unknown attribute names in catalog data become [`Scaling::None`]: the
/// technique still loads but gets no scaling contribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Scaling {
    Attribute(Attribute),
    #[default]
    None,
}

impl Scaling {
    pub fn from_name(name: &str) -> Self {
        Attribute::from_name(name).map_or(Scaling::None, Scaling::Attribute)
    }

    pub const fn attribute(&self) -> Option<Attribute> {
        match self {
            Scaling::Attribute(a) => Some(*a),
            Scaling::None => None,
        }
    }

    /// Label for table columns: `INT`, `STR`, … or `N/A`.
    pub const fn label(&self) -> &'static str {
        match self {
            Scaling::Attribute(a) => a.short_name(),
            Scaling::None => "N/A",
        }
    }
}

impl From<Attribute> for Scaling {
    fn from(attribute: Attribute) -> Self {
        Scaling::Attribute(attribute)
    }
}

impl From<String> for Scaling {
    fn from(name: String) -> Self {
        Scaling::from_name(&name)
    }
}

impl From<Scaling> for String {
    fn from(scaling: Scaling) -> Self {
        scaling.label().to_string()
    }
}

/// Anything that deals damage with the base + scaling formula.
pub trait DamageSource {
    fn base_damage(&self) -> u32;
    fn scaling(&self) -> Scaling;
    /// Time units between uses; 0 means instant.
    fn cooldown(&self) -> u32;
}

/// A named technique in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Technique {
    pub name: Cow<'static, str>,
    pub element: Element,
    pub base_damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: Scaling,
    pub chakra_cost: u32,
    pub cooldown: u32,
    /// Character level required to learn the technique.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_level: Option<u32>,
}

impl Technique {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        element: Element,
        base_damage: u32,
        scaling: Scaling,
        chakra_cost: u32,
        cooldown: u32,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            base_damage,
            scaling,
            chakra_cost,
            cooldown,
            min_level: None,
        }
    }

    /// Attach a minimum level requirement (builder pattern).
    #[must_use]
    pub fn with_min_level(mut self, level: u32) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Returns true if a character of `level` can use this technique.
    pub fn is_unlocked_at(&self, level: u32) -> bool {
        self.min_level.is_none_or(|required| level >= required)
    }
}

impl DamageSource for Technique {
    fn base_damage(&self) -> u32 {
        self.base_damage
    }

    fn scaling(&self) -> Scaling {
        self.scaling
    }

    fn cooldown(&self) -> u32 {
        self.cooldown
    }
}

/// Melee weapon definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: Cow<'static, str>,
    pub base_damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: Scaling,
    /// Time units between swings.
    pub attack_interval: u32,
}

impl Weapon {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        base_damage: u32,
        scaling: Scaling,
        attack_interval: u32,
    ) -> Self {
        Self {
            name: name.into(),
            base_damage,
            scaling,
            attack_interval,
        }
    }
}

impl DamageSource for Weapon {
    fn base_damage(&self) -> u32 {
        self.base_damage
    }

    fn scaling(&self) -> Scaling {
        self.scaling
    }

    fn cooldown(&self) -> u32 {
        self.attack_interval
    }
}
