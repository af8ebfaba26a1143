//! Read-only technique and weapon reference data.
//!
//! The oracle decouples the engine from where catalog data comes from: the
//! compiled-in table, a RON file, or a test fixture.

use crate::technique::{Element, Technique, Weapon};

/// Current catalog schema version.
///
/// Catalogs report the schema they were written against so loaders can reject
/// data from an incompatible revision.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

pub trait TechniqueOracle: Send + Sync {
    /// Schema revision of this catalog's data.
    fn schema_version(&self) -> u32;

    /// Every technique, all elements included.
    fn techniques(&self) -> &[Technique];

    /// Every weapon.
    fn weapons(&self) -> &[Weapon];

    /// Techniques of a single element, in catalog order.
    fn techniques_for(&self, element: Element) -> Vec<&Technique> {
        self.techniques()
            .iter()
            .filter(|t| t.element == element)
            .collect()
    }

    /// Look up a technique by element and name.
    fn technique(&self, element: Element, name: &str) -> Option<&Technique> {
        self.techniques()
            .iter()
            .find(|t| t.element == element && t.name.eq_ignore_ascii_case(name))
    }

    /// Look up a weapon by name (case-insensitive).
    fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons()
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Element selection that defines the active technique set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSelection {
    pub primary: Element,
    pub secondary: Element,
    pub include_common: bool,
    /// Character level used for minimum-level gates.
    pub level: u32,
}

impl ActiveSelection {
    /// Groups contributing candidates, in table order.
    pub fn groups(&self) -> Vec<Element> {
        let mut groups = vec![self.primary];
        if self.secondary != self.primary {
            groups.push(self.secondary);
        }
        if self.include_common {
            groups.push(Element::Common);
        }
        groups
    }

    /// Every technique in the selected groups, locked ones included.
    pub fn candidates<'a, O>(&self, oracle: &'a O) -> Vec<&'a Technique>
    where
        O: TechniqueOracle + ?Sized,
    {
        self.groups()
            .into_iter()
            .flat_map(|element| oracle.techniques_for(element))
            .collect()
    }

    /// Techniques the character can actually use at `level`.
    pub fn active<'a, O>(&self, oracle: &'a O) -> Vec<&'a Technique>
    where
        O: TechniqueOracle + ?Sized,
    {
        self.candidates(oracle)
            .into_iter()
            .filter(|t| t.is_unlocked_at(self.level))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixture::FixtureCatalog;
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = FixtureCatalog::new();
        assert!(catalog.weapon("kunai").is_some());
        assert!(catalog.weapon("Katana").is_none());
        assert!(catalog.technique(Element::Fire, "fire wall").is_some());
        assert!(catalog.technique(Element::Wind, "fire wall").is_none());
    }

    #[test]
    fn active_set_follows_selection_and_level() {
        let catalog = FixtureCatalog::new();
        let selection = ActiveSelection {
            primary: Element::Fire,
            secondary: Element::Wind,
            include_common: true,
            level: 10,
        };

        assert_eq!(selection.candidates(&catalog).len(), 6);

        let active = selection.active(&catalog);
        let names: Vec<&str> = active.iter().map(|t| &*t.name).collect();
        assert_eq!(
            names,
            [
                "Phoenix Fireball",
                "Big Flame Bullet",
                "Wind Shuriken",
                "Slashing Tornado",
                "Substitution"
            ]
        );

        let without_common = ActiveSelection {
            include_common: false,
            level: 20,
            ..selection
        };
        assert_eq!(without_common.active(&catalog).len(), 5);
    }
}
