use metanin_core::{Attribute, Element, Scaling, Technique};

use Attribute::{Agility as AGI, Fortitude as FRT, Intellect as INT, Strength as STR};

pub(super) struct TechniqueRow {
    name: &'static str,
    element: Element,
    base_damage: u32,
    scaling: Option<Attribute>,
    chakra_cost: u32,
    cooldown: u32,
    min_level: Option<u32>,
}

impl TechniqueRow {
    pub(super) fn to_technique(&self) -> Technique {
        let scaling = self.scaling.map_or(Scaling::None, Scaling::Attribute);
        let technique = Technique::new(
            self.name,
            self.element,
            self.base_damage,
            scaling,
            self.chakra_cost,
            self.cooldown,
        );
        match self.min_level {
            Some(level) => technique.with_min_level(level),
            None => technique,
        }
    }
}

const fn row(
    name: &'static str,
    element: Element,
    base_damage: u32,
    scaling: Option<Attribute>,
    chakra_cost: u32,
    cooldown: u32,
) -> TechniqueRow {
    TechniqueRow {
        name,
        element,
        base_damage,
        scaling,
        chakra_cost,
        cooldown,
        min_level: None,
    }
}

const fn gated(base: TechniqueRow, level: u32) -> TechniqueRow {
    TechniqueRow {
        min_level: Some(level),
        ..base
    }
}

#[rustfmt::skip]
pub(super) const TECHNIQUES: &[TechniqueRow] = &[
    // name                                 element            dmg  scaling     chakra cd
    row("Phoenix Fireball",                 Element::Fire,      27, Some(INT),  10, 16),
    row("Big Flame Bullet",                 Element::Fire,      35, Some(INT),  30, 18),
    gated(row("Fire Wall",                  Element::Fire,      22, Some(INT),  15, 12), 20),
    gated(row("Great Fire Annihilation",    Element::Fire,      60, Some(INT),  55, 40), 45),

    row("Wind Shuriken",                    Element::Wind,      25, Some(INT),  12, 10),
    row("Slashing Tornado",                 Element::Wind,      30, Some(STR),  25, 18),
    gated(row("Pressure Damage",            Element::Wind,      45, Some(INT),  35, 28), 30),

    row("Lightning Bolt",                   Element::Lightning, 24, Some(INT),  12, 11),
    row("Lightning Blade",                  Element::Lightning, 40, Some(AGI),  30, 22),
    gated(row("Thunder Drop",               Element::Lightning, 55, Some(INT),  45, 35), 40),

    row("Earth Spikes",                     Element::Earth,     22, Some(FRT),  10, 12),
    row("Mud Wall",                         Element::Earth,      0, None,       15, 20),
    gated(row("Mountain Crush",             Element::Earth,     50, Some(FRT),  40, 30), 35),

    row("Water Bullet",                     Element::Water,     23, Some(INT),  11, 12),
    row("Water Dragon",                     Element::Water,     38, Some(INT),  32, 24),
    gated(row("Exploding Water Shockwave",  Element::Water,     52, Some(INT),  50, 38), 45),

    row("Poison Mist",                      Element::Medical,   18, Some(INT),  14, 14),
    row("Chakra Scalpel",                   Element::Medical,   26, Some(AGI),  12, 10),
    gated(row("Healing Palm",               Element::Medical,    0, None,       20, 25), 10),

    row("Shuriken Barrage",                 Element::Weapon,    20, Some(AGI),   8,  8),
    row("Twin Rising Dragons",              Element::Weapon,    42, Some(AGI),  28, 26),
    gated(row("Chain Scythe Sweep",         Element::Weapon,    34, Some(STR),  18, 16), 25),

    row("Leaf Hurricane",                   Element::Taijutsu,  22, Some(STR),   5,  9),
    row("Primary Lotus",                    Element::Taijutsu,  48, Some(STR),  20, 30),
    gated(row("Eight Gates Release",        Element::Taijutsu,  70, Some(STR),  60, 50), 50),

    row("Substitution",                     Element::Common,     0, None,       10,  0),
    row("Body Flicker",                     Element::Common,     0, None,        8,  0),
    row("Clone",                            Element::Common,     0, None,        5,  0),
    row("Taijutsu Strike",                  Element::Common,     8, Some(STR),   0,  3),
];
