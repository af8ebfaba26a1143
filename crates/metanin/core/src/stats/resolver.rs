//! Attribute resolution - base attributes to resolved attributes.
//!
//! ResolvedAttributes = floor(Base × Guild% ⊕ Charm) + Faction
//!
//! The order is fixed: guild scaling first, then the charm bonus (flat bonuses
//! add to the truncated guild value, percentage bonuses multiply the untruncated
//! one), then the faction bonus.

use super::attribute::{Attribute, BaseAttributes, ResolvedAttributes};
use super::bonus::apply_charm;
use super::charm::Charm;
use crate::config::CalcConfig;

/// Inputs that modify base attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeModifiers {
    pub charm: Charm,
    /// Guild level, +1% to every attribute per level.
    pub guild_level: i32,
    /// Flat amount added to every attribute last.
    pub faction_bonus: i32,
}

impl AttributeModifiers {
    pub fn new(charm: Charm, guild_level: i32, faction_bonus: i32) -> Self {
        Self {
            charm,
            guild_level,
            faction_bonus,
        }
    }

    /// Resolve every attribute of `base`.
    pub fn resolve(&self, base: &BaseAttributes) -> ResolvedAttributes {
        let guild_percent = self.guild_level.clamp(0, CalcConfig::MAX_GUILD_LEVEL);

        let mut resolved = ResolvedAttributes::default();
        for (attribute, value) in base.iter() {
            resolved.set(attribute, self.resolve_one(attribute, value, guild_percent));
        }
        resolved
    }

    fn resolve_one(&self, attribute: Attribute, base: i32, guild_percent: i32) -> i32 {
        let charmed = apply_charm(base, guild_percent, self.charm.bonus_for(attribute));
        let total = charmed + i64::from(self.faction_bonus);
        total.clamp(0, i64::from(i32::MAX)) as i32
    }
}

/// Resolve base attributes under a charm, guild level and faction bonus.
///
/// Guild levels outside `0..=10` are clamped. Results never drop below zero.
pub fn resolve_attributes(
    base: &BaseAttributes,
    charm: Charm,
    guild_level: i32,
    faction_bonus: i32,
) -> ResolvedAttributes {
    AttributeModifiers::new(charm, guild_level, faction_bonus).resolve(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BaseAttributes {
        BaseAttributes::new(5, 95, 130, 5, 75)
    }

    #[test]
    fn identity_without_modifiers() {
        let base = sample();
        let resolved = resolve_attributes(&base, Charm::None, 0, 0);
        assert_eq!(resolved, ResolvedAttributes::from(&base));
    }

    #[test]
    fn guild_scaling_truncates() {
        let base = sample();
        for guild in 0..=10 {
            let resolved = resolve_attributes(&base, Charm::None, guild, 0);
            for (attribute, value) in base.iter() {
                let expected = value * (100 + guild) / 100;
                assert_eq!(resolved.get(attribute), expected, "{attribute} at guild {guild}");
            }
        }
    }

    #[test]
    fn flat_charm_adds_after_guild() {
        let base = BaseAttributes::new(17, 95, 130, 5, 75);
        let resolved = resolve_attributes(&base, Charm::Cancer, 7, 0);

        // floor(17 × 1.07) + 1 = 18 + 1
        assert_eq!(resolved.strength, 19);
        // untouched by Cancer
        assert_eq!(resolved.intellect, 130 * 107 / 100);
        assert_eq!(resolved.fortitude, 95 * 107 / 100);
    }

    #[test]
    fn percentage_charm_multiplies_guild_scaled_value() {
        let base = sample();

        let resolved = resolve_attributes(&base, Charm::Libra, 0, 0);
        // floor(130 × 1.05) = 136
        assert_eq!(resolved.intellect, 136);

        let resolved = resolve_attributes(&base, Charm::Libra, 5, 0);
        // floor(130 × 1.05 × 1.05) = floor(143.325)
        assert_eq!(resolved.intellect, 143);
        assert_eq!(resolved.strength, 5);
    }

    #[test]
    fn all_attribute_charm() {
        let base = sample();
        let resolved = resolve_attributes(&base, Charm::Pisces, 0, 0);
        for (attribute, value) in base.iter() {
            assert_eq!(resolved.get(attribute), value + 1);
        }
    }

    #[test]
    fn faction_bonus_applies_last() {
        let base = sample();
        let resolved = resolve_attributes(&base, Charm::Aquarius, 10, 3);
        // floor(130 × 1.10) + 5 + 3
        assert_eq!(resolved.intellect, 143 + 5 + 3);
        // floor(5 × 1.10) + 3
        assert_eq!(resolved.agility, 5 + 3);
    }

    #[test]
    fn out_of_range_guild_is_clamped() {
        let base = sample();
        assert_eq!(
            resolve_attributes(&base, Charm::None, 25, 0),
            resolve_attributes(&base, Charm::None, 10, 0)
        );
        assert_eq!(
            resolve_attributes(&base, Charm::None, -4, 0),
            resolve_attributes(&base, Charm::None, 0, 0)
        );
    }

    #[test]
    fn negative_faction_bonus_stops_at_zero() {
        let base = BaseAttributes::default();
        let resolved = resolve_attributes(&base, Charm::None, 0, -50);
        assert!(resolved.iter().all(|(_, v)| v == 0));
    }
}
