//! Zodiac charms and their bonus table.

use super::attribute::Attribute;
use super::bonus::Bonus;

/// Cosmetic zodiac charm worn by the character.
///
/// Charms are a closed catalog. Names that do not match any charm resolve to
/// [`Charm::None`] through [`Charm::from_name`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Charm {
    #[default]
    None,
    Capricorn,
    Aquarius,
    Leo,
    #[strum(to_string = "Saggitarius", serialize = "Sagittarius")]
    #[cfg_attr(feature = "serde", serde(alias = "Sagittarius"))]
    Saggitarius,
    Virgo,
    Cancer,
    Pisces,
    Libra,
    Scorpio,
    Gemini,
    Taurus,
}

impl Charm {
    /// Every charm in selection order, `None` first.
    pub const ALL: [Charm; 12] = [
        Charm::None,
        Charm::Capricorn,
        Charm::Aquarius,
        Charm::Leo,
        Charm::Saggitarius,
        Charm::Virgo,
        Charm::Cancer,
        Charm::Pisces,
        Charm::Libra,
        Charm::Scorpio,
        Charm::Gemini,
        Charm::Taurus,
    ];

    /// Look up a charm by name; unknown names mean no charm.
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }

    /// Bonus this charm grants to `attribute`, if any.
    pub const fn bonus_for(&self, attribute: Attribute) -> Option<Bonus> {
        use Attribute::*;
        match (self, attribute) {
            (Charm::None, _) => None,
            (Charm::Capricorn, Fortitude) => Some(Bonus::flat(5)),
            (Charm::Aquarius, Intellect) => Some(Bonus::flat(5)),
            (Charm::Leo, Agility) => Some(Bonus::flat(5)),
            (Charm::Saggitarius, _) => Some(Bonus::flat(1)),
            (Charm::Virgo, Chakra) => Some(Bonus::flat(5)),
            (Charm::Cancer, Strength) => Some(Bonus::flat(1)),
            (Charm::Pisces, _) => Some(Bonus::flat(1)),
            (Charm::Libra, Intellect) => Some(Bonus::increased(5)),
            (Charm::Scorpio, Strength) => Some(Bonus::increased(5)),
            (Charm::Gemini, Agility) => Some(Bonus::increased(5)),
            (Charm::Taurus, Fortitude) => Some(Bonus::increased(5)),
            _ => None,
        }
    }

    /// Short label used next to the charm name in selection lists, e.g. `+5 FRT`.
    pub fn description(&self) -> String {
        let bonuses: Vec<(Attribute, Bonus)> = Attribute::ALL
            .iter()
            .filter_map(|&a| self.bonus_for(a).map(|b| (a, b)))
            .collect();

        if bonuses.is_empty() {
            return String::new();
        }

        let format_bonus = |bonus: &Bonus| match bonus {
            Bonus::Flat(v) => format!("+{v}"),
            Bonus::Increased(p) => format!("+{p}%"),
        };

        if bonuses.len() == Attribute::COUNT && bonuses.windows(2).all(|w| w[0].1 == w[1].1) {
            return format!("{} ALL", format_bonus(&bonuses[0].1));
        }

        bonuses
            .iter()
            .map(|(a, b)| format!("{} {}", format_bonus(b), a.short_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
