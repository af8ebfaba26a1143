//! The per-session build aggregate.
//!
//! A [`Build`] holds every user input. It is mutated in place by the session
//! and passed by reference into the pure calculation functions; nothing
//! derived from it is cached here.

use crate::config::CalcConfig;
use crate::error::BuildError;
use crate::stats::{Attribute, AttributeModifiers, BaseAttributes, Charm, ResolvedAttributes};
use crate::technique::Element;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Build {
    base: BaseAttributes,
    charm: Charm,
    guild_level: i32,
    faction_bonus: i32,
    primary: Element,
    secondary: Element,
    weapon: Option<String>,
}

impl Build {
    /// Fresh build: attributes at the floor, no charm, guild level 0,
    /// Fire/Wind specializations, no weapon.
    pub fn new() -> Self {
        Self {
            base: BaseAttributes::default(),
            charm: Charm::None,
            guild_level: 0,
            faction_bonus: 0,
            primary: Element::Fire,
            secondary: Element::Wind,
            weapon: None,
        }
    }

    // ===== accessors =====

    pub fn base(&self) -> &BaseAttributes {
        &self.base
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.base.get(attribute)
    }

    pub fn charm(&self) -> Charm {
        self.charm
    }

    pub fn guild_level(&self) -> i32 {
        self.guild_level
    }

    pub fn faction_bonus(&self) -> i32 {
        self.faction_bonus
    }

    pub fn primary(&self) -> Element {
        self.primary
    }

    pub fn secondary(&self) -> Element {
        self.secondary
    }

    pub fn weapon(&self) -> Option<&str> {
        self.weapon.as_deref()
    }

    /// Points invested above the attribute floor.
    pub fn points_spent(&self) -> u32 {
        self.base.points_spent()
    }

    pub fn modifiers(&self) -> AttributeModifiers {
        AttributeModifiers::new(self.charm, self.guild_level, self.faction_bonus)
    }

    pub fn resolve(&self) -> ResolvedAttributes {
        self.modifiers().resolve(&self.base)
    }

    // ===== mutation =====

    /// Set a base attribute; values below the floor are raised to it.
    pub fn set_attribute(&mut self, attribute: Attribute, value: i32) {
        self.base.set(attribute, value);
    }

    /// Replace all base attributes, raising each to the floor.
    pub fn set_base(&mut self, base: BaseAttributes) {
        for (attribute, value) in base.iter() {
            self.base.set(attribute, value);
        }
    }

    pub fn set_charm(&mut self, charm: Charm) {
        self.charm = charm;
    }

    /// Guild level is clamped to `0..=10`.
    pub fn set_guild_level(&mut self, level: i32) {
        self.guild_level = level.clamp(0, CalcConfig::MAX_GUILD_LEVEL);
    }

    pub fn set_faction_bonus(&mut self, bonus: i32) {
        self.faction_bonus = bonus;
    }

    pub fn set_primary(&mut self, element: Element) -> Result<(), BuildError> {
        Self::check_selectable(element)?;
        if element == self.secondary {
            return Err(BuildError::DuplicateElement(element));
        }
        self.primary = element;
        Ok(())
    }

    pub fn set_secondary(&mut self, element: Element) -> Result<(), BuildError> {
        Self::check_selectable(element)?;
        if element == self.primary {
            return Err(BuildError::DuplicateElement(element));
        }
        self.secondary = element;
        Ok(())
    }

    /// Set both elements at once, e.g. to swap them.
    pub fn set_elements(&mut self, primary: Element, secondary: Element) -> Result<(), BuildError> {
        Self::check_selectable(primary)?;
        Self::check_selectable(secondary)?;
        if primary == secondary {
            return Err(BuildError::DuplicateElement(secondary));
        }
        self.primary = primary;
        self.secondary = secondary;
        Ok(())
    }

    /// Equip a weapon by name, or unequip with `None`.
    ///
    /// Names are not checked here; an unknown weapon simply yields no melee row.
    pub fn set_weapon(&mut self, weapon: Option<impl Into<String>>) {
        self.weapon = weapon.map(Into::into);
    }

    fn check_selectable(element: Element) -> Result<(), BuildError> {
        if element.is_selectable() {
            Ok(())
        } else {
            Err(BuildError::NotSelectable(element))
        }
    }
}

impl Default for Build {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_build_defaults() {
        let build = Build::new();
        assert!(build.base().iter().all(|(_, v)| v == BaseAttributes::FLOOR));
        assert_eq!(build.charm(), Charm::None);
        assert_eq!(build.guild_level(), 0);
        assert_eq!(build.points_spent(), 0);
        assert_ne!(build.primary(), build.secondary());
        assert_eq!(build.weapon(), None);
    }

    #[test]
    fn attribute_floor_is_enforced() {
        let mut build = Build::new();
        build.set_attribute(Attribute::Strength, 0);
        assert_eq!(build.attribute(Attribute::Strength), 5);

        build.set_base(BaseAttributes::new(1, 95, 130, 5, 75));
        assert_eq!(build.attribute(Attribute::Strength), 5);
        assert_eq!(build.points_spent(), 285);
    }

    #[test]
    fn guild_level_is_clamped() {
        let mut build = Build::new();
        build.set_guild_level(15);
        assert_eq!(build.guild_level(), 10);
        build.set_guild_level(-1);
        assert_eq!(build.guild_level(), 0);
    }

    #[test]
    fn elements_must_differ() {
        let mut build = Build::new();
        assert_eq!(
            build.set_secondary(Element::Fire),
            Err(BuildError::DuplicateElement(Element::Fire))
        );
        assert_eq!(
            build.set_primary(Element::Wind),
            Err(BuildError::DuplicateElement(Element::Wind))
        );
        assert_eq!(
            build.set_primary(Element::Common),
            Err(BuildError::NotSelectable(Element::Common))
        );

        build.set_elements(Element::Wind, Element::Fire).unwrap();
        assert_eq!(build.primary(), Element::Wind);
        assert_eq!(build.secondary(), Element::Fire);

        build.set_secondary(Element::Medical).unwrap();
        assert_eq!(build.secondary(), Element::Medical);
    }

    #[test]
    fn resolve_uses_current_inputs() {
        let mut build = Build::new();
        build.set_attribute(Attribute::Intellect, 130);
        build.set_charm(Charm::Libra);
        build.set_guild_level(5);
        assert_eq!(build.resolve().intellect, 143);

        build.set_charm(Charm::None);
        assert_eq!(build.resolve().intellect, 136);
    }

    #[test]
    fn weapon_selection() {
        let mut build = Build::new();
        build.set_weapon(Some("Katana"));
        assert_eq!(build.weapon(), Some("Katana"));
        build.set_weapon(None::<String>);
        assert_eq!(build.weapon(), None);
    }
}
