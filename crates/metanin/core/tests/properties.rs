//! Calculator properties exercised through the public API.

use approx::assert_relative_eq;
use metanin_core::{
    Attribute, BaseAttributes, Charm, Element, Scaling, Technique, ValidationState,
    compute_available_points, compute_level, compute_rotation_summary, compute_technique_row,
    resolve_attributes, validate_build,
};

fn bases() -> Vec<BaseAttributes> {
    vec![
        BaseAttributes::default(),
        BaseAttributes::new(5, 95, 130, 5, 75),
        BaseAttributes::new(17, 33, 61, 99, 8),
        BaseAttributes::new(150, 150, 150, 150, 150),
    ]
}

#[test]
fn no_charm_no_guild_is_identity() {
    for base in bases() {
        let resolved = resolve_attributes(&base, Charm::None, 0, 0);
        for (attribute, value) in base.iter() {
            assert_eq!(resolved.get(attribute), value);
        }
    }
}

#[test]
fn guild_scaling_alone_truncates() {
    for base in bases() {
        for guild in 0..=10 {
            let resolved = resolve_attributes(&base, Charm::None, guild, 0);
            for (attribute, value) in base.iter() {
                assert_eq!(resolved.get(attribute), value * (100 + guild) / 100);
            }
        }
    }
}

#[test]
fn flat_charm_affects_only_its_attribute() {
    for base in bases() {
        for guild in 0..=10 {
            let plain = resolve_attributes(&base, Charm::None, guild, 0);
            let charmed = resolve_attributes(&base, Charm::Cancer, guild, 0);

            assert_eq!(charmed.strength, plain.strength + 1);
            assert_eq!(charmed.fortitude, plain.fortitude);
            assert_eq!(charmed.intellect, plain.intellect);
            assert_eq!(charmed.agility, plain.agility);
            assert_eq!(charmed.chakra, plain.chakra);
        }
    }
}

#[test]
fn percentage_charm_applies_after_guild() {
    for base in bases() {
        for guild in 0..=10 {
            let resolved = resolve_attributes(&base, Charm::Libra, guild, 0);
            // floor(base × (1 + g/100) × 1.05), computed exactly
            let expected = base.intellect * (100 + guild) * 105 / 10_000;
            assert_eq!(resolved.intellect, expected, "guild {guild}");
            assert_eq!(resolved.agility, base.agility * (100 + guild) / 100);
        }
    }
}

#[test]
fn percentage_charm_truncates_once() {
    let base = BaseAttributes::new(5, 95, 130, 5, 75);
    // 130 × 1.05 × 1.05 = 143.325; truncating after the guild step would give 142
    assert_eq!(resolve_attributes(&base, Charm::Libra, 5, 0).intellect, 143);
}

#[test]
fn unknown_charm_name_means_no_bonus() {
    let base = BaseAttributes::new(5, 95, 130, 5, 75);
    assert_eq!(
        resolve_attributes(&base, Charm::from_name("Dragon"), 3, 0),
        resolve_attributes(&base, Charm::None, 3, 0)
    );
}

#[test]
fn level_curve() {
    assert_eq!(compute_level(0), 1);
    assert_eq!(compute_level(5), 2);
    assert_eq!(compute_level(250), 51);
    assert_eq!(compute_level(285), 60);
    assert_eq!(compute_level(10_000), 60);
}

#[test]
fn available_points() {
    assert_eq!(compute_available_points(1), 0);
    assert_eq!(compute_available_points(50), 245);
    // the high tier starts from 50 × 5, so level 51 grants 254
    assert_eq!(compute_available_points(51), 254);
    assert_eq!(compute_available_points(60), 250 + 10 * 4);
}

#[test]
fn technique_damage_and_dps() {
    let mut base = BaseAttributes::default();
    base.set(Attribute::Intellect, 130);
    let resolved = resolve_attributes(&base, Charm::None, 0, 0);

    let fireball = Technique::new(
        "Phoenix Fireball",
        Element::Fire,
        27,
        Scaling::Attribute(Attribute::Intellect),
        10,
        16,
    );
    let figures = compute_technique_row(&fireball, &resolved);
    assert_relative_eq!(figures.damage, 105.0, epsilon = 1e-9);
    assert_relative_eq!(figures.dps, 6.5625, epsilon = 1e-9);

    let instant = Technique { cooldown: 0, ..fireball };
    assert_eq!(compute_technique_row(&instant, &resolved).dps, 0.0);
}

#[test]
fn validation_states() {
    assert_eq!(validate_build(300, 1, 0), ValidationState::OverCap);
    assert_eq!(validate_build(300, 60, 290), ValidationState::OverCap);
    assert_eq!(validate_build(20, 1, 0), ValidationState::OverAvailable);
    assert_eq!(validate_build(45, 10, 45), ValidationState::Ok);
}

#[test]
fn rotation_is_time_weighted_not_mean() {
    let resolved = resolve_attributes(&BaseAttributes::default(), Charm::None, 0, 0);
    let slow = Technique::new("Slow", Element::Earth, 10, Scaling::None, 0, 10);
    let fast = Technique::new("Fast", Element::Earth, 100, Scaling::None, 0, 1);

    let summary = compute_rotation_summary([&slow, &fast], &resolved);
    assert_relative_eq!(summary.rotation_dps, 10.0, epsilon = 1e-9);
    assert!((summary.rotation_dps - 50.5).abs() > 1.0);
}
