use metanin_core::{Attribute, Scaling, Weapon};

pub(super) struct WeaponRow {
    name: &'static str,
    base_damage: u32,
    scaling: Attribute,
    attack_interval: u32,
}

impl WeaponRow {
    pub(super) fn to_weapon(&self) -> Weapon {
        Weapon::new(
            self.name,
            self.base_damage,
            Scaling::Attribute(self.scaling),
            self.attack_interval,
        )
    }
}

const fn weapon(
    name: &'static str,
    base_damage: u32,
    scaling: Attribute,
    attack_interval: u32,
) -> WeaponRow {
    WeaponRow {
        name,
        base_damage,
        scaling,
        attack_interval,
    }
}

#[rustfmt::skip]
pub(super) const WEAPONS: &[WeaponRow] = &[
    weapon("Kunai",          12, Attribute::Strength, 2),
    weapon("Senbon",          6, Attribute::Agility,  1),
    weapon("Katana",         18, Attribute::Strength, 3),
    weapon("Fuuma Shuriken", 22, Attribute::Agility,  4),
    weapon("Kubikiribocho",  30, Attribute::Strength, 5),
];
