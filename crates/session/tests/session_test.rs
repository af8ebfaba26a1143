//! End-to-end session tests: configuration, catalog sources, recompute.

use std::fs;

use approx::assert_relative_eq;
use metanin_content::StaticCatalog;
use metanin_core::{
    Attribute, BaseAttributes, Charm, Element, SortKey, SortOrder, TechniqueOracle,
    ValidationState,
};
use metanin_session::{BuildInput, SessionBuilder, SessionConfig, SessionError};
use tempfile::TempDir;

#[test]
fn default_builder_uses_static_catalog() {
    let session = SessionBuilder::default().build().unwrap();
    assert_eq!(
        session.catalog().techniques().len(),
        StaticCatalog::new().techniques().len()
    );
    assert_eq!(session.config().max_points, 285);
}

#[test]
fn reference_build_reaches_cap_exactly() {
    let mut session = SessionBuilder::default().build().unwrap();
    let report = session
        .apply(BuildInput::SetBase(BaseAttributes::new(5, 95, 130, 5, 75)))
        .unwrap();

    assert_eq!(report.progression.points_spent, 285);
    assert_eq!(report.progression.level, 60);
    assert_eq!(report.state(), ValidationState::Ok);

    let fireball = report
        .techniques
        .iter()
        .find(|row| row.name == "Phoenix Fireball")
        .unwrap();
    assert_relative_eq!(fireball.damage, 105.0, epsilon = 1e-9);
    assert_relative_eq!(fireball.dps, 6.5625, epsilon = 1e-9);
}

#[test]
fn validation_follows_edits() {
    let mut session = SessionBuilder::default().build().unwrap();
    session
        .apply(BuildInput::SetBase(BaseAttributes::new(5, 95, 130, 5, 75)))
        .unwrap();

    session
        .apply(BuildInput::SetAttribute {
            attribute: Attribute::Agility,
            value: 6,
        })
        .unwrap();
    assert_eq!(session.state(), ValidationState::OverCap);

    session
        .apply(BuildInput::SetAttribute {
            attribute: Attribute::Agility,
            value: 5,
        })
        .unwrap();
    assert_eq!(session.state(), ValidationState::Ok);
}

#[test]
fn oversized_attribute_is_reported_not_fatal() {
    let mut session = SessionBuilder::default().build().unwrap();
    let report = session
        .apply(BuildInput::SetAttribute {
            attribute: Attribute::Strength,
            value: i32::MAX,
        })
        .unwrap();

    assert_eq!(report.progression.points_spent, (i32::MAX - 5) as u32);
    assert_eq!(report.progression.level, 60);
    assert_eq!(report.state(), ValidationState::OverCap);

    for attribute in Attribute::ALL {
        session
            .apply(BuildInput::SetAttribute {
                attribute,
                value: i32::MAX,
            })
            .unwrap();
    }
    assert_eq!(session.report().progression.points_spent, u32::MAX);
    assert_eq!(session.state(), ValidationState::OverCap);
}

#[test]
fn element_swap_changes_table_groups() {
    let mut session = SessionBuilder::new(SessionConfig::default().with_common(false))
        .build()
        .unwrap();

    session
        .apply(BuildInput::SetElements {
            primary: Element::Lightning,
            secondary: Element::Medical,
        })
        .unwrap();

    let table = session.techniques(SortKey::Element, SortOrder::Ascending);
    assert!(
        table
            .iter()
            .all(|row| matches!(row.element, Element::Lightning | Element::Medical))
    );

    let err = session
        .apply(BuildInput::SetPrimary(Element::Common))
        .unwrap_err();
    assert!(err.is_build_error());
}

#[test]
fn sorted_table_by_dps() {
    let mut session = SessionBuilder::default().build().unwrap();
    session
        .apply(BuildInput::SetAttribute {
            attribute: Attribute::Intellect,
            value: 80,
        })
        .unwrap();

    let table = session.techniques(SortKey::Dps, SortOrder::Descending);
    let dps: Vec<f64> = table.iter().map(|row| row.dps).collect();
    assert!(dps.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn unknown_charm_name_is_no_charm() {
    let mut session = SessionBuilder::default().build().unwrap();
    session
        .apply(BuildInput::SetCharmByName("Ophiuchus".to_string()))
        .unwrap();
    assert_eq!(session.build().charm(), Charm::None);
}

#[test]
fn data_dir_supplies_catalog_and_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "max_points = 50\n").unwrap();
    fs::write(
        dir.path().join("catalog.ron"),
        r#"(
            schema_version: 1,
            techniques: [
                (name: "Spark", element: Fire, base_damage: 10, scaling: "INT",
                 chakra_cost: 4, cooldown: 5),
            ],
        )"#,
    )
    .unwrap();

    let config = SessionConfig::default().with_data_dir(dir.path());
    let mut session = SessionBuilder::new(config).build().unwrap();
    assert_eq!(session.config().max_points, 50);
    assert_eq!(session.catalog().techniques().len(), 1);

    session
        .apply(BuildInput::SetAttribute {
            attribute: Attribute::Strength,
            value: 60,
        })
        .unwrap();
    assert_eq!(session.state(), ValidationState::OverCap);
}

#[test]
fn environment_overrides_beat_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "max_points = 50\n").unwrap();

    let config = SessionConfig::default()
        .with_data_dir(dir.path())
        .with_max_points(120);
    let session = SessionBuilder::new(config).build().unwrap();
    assert_eq!(session.config().max_points, 120);
    // no catalog.ron, compiled-in table is used
    assert!(!session.catalog().techniques().is_empty());
}

#[test]
fn broken_catalog_is_a_content_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("catalog.ron"), "(schema_version: 9, techniques: [])").unwrap();

    let err = SessionBuilder::new(SessionConfig::default().with_data_dir(dir.path()))
        .build()
        .unwrap_err();
    match err {
        SessionError::Content { path, reason } => {
            assert!(path.ends_with("catalog.ron"));
            assert!(reason.contains("schema version 9"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn provided_catalog_takes_precedence() {
    let session = SessionBuilder::default()
        .catalog(StaticCatalog::new())
        .build()
        .unwrap();
    assert_eq!(session.report().progression.level, 1);
}
