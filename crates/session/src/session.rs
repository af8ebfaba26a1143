//! Interactive build session.
//!
//! A [`BuildSession`] owns the only mutable state: the [`Build`]. Every input
//! goes through [`BuildSession::apply`], which edits the build and reruns the
//! whole pipeline so the cached [`BuildReport`] never lags the inputs.

use metanin_core::{
    Attribute, BaseAttributes, Build, BuildEngine, BuildReport, CalcConfig, Charm, Element,
    SortKey, SortOrder, TechniqueOracle, TechniqueTable, ValidationState, parse_element,
};
use tracing::{debug, warn};

use crate::error::Result;

/// A single edit to the build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildInput {
    SetAttribute { attribute: Attribute, value: i32 },
    SetBase(BaseAttributes),
    SetCharm(Charm),
    /// Unknown names select no charm.
    SetCharmByName(String),
    SetGuildLevel(i32),
    SetFactionBonus(i32),
    SetPrimary(Element),
    SetSecondary(Element),
    SetPrimaryByName(String),
    SetSecondaryByName(String),
    SetElements { primary: Element, secondary: Element },
    SetWeapon(Option<String>),
    /// Back to a fresh build.
    Reset,
}

impl BuildInput {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetAttribute { .. } => "set_attribute",
            Self::SetBase(_) => "set_base",
            Self::SetCharm(_) => "set_charm",
            Self::SetCharmByName(_) => "set_charm_by_name",
            Self::SetGuildLevel(_) => "set_guild_level",
            Self::SetFactionBonus(_) => "set_faction_bonus",
            Self::SetPrimary(_) => "set_primary",
            Self::SetSecondary(_) => "set_secondary",
            Self::SetPrimaryByName(_) => "set_primary_by_name",
            Self::SetSecondaryByName(_) => "set_secondary_by_name",
            Self::SetElements { .. } => "set_elements",
            Self::SetWeapon(_) => "set_weapon",
            Self::Reset => "reset",
        }
    }
}

pub struct BuildSession {
    build: Build,
    catalog: Box<dyn TechniqueOracle>,
    config: CalcConfig,
    report: BuildReport,
}

impl BuildSession {
    /// Start a session with a fresh build.
    pub fn new(catalog: Box<dyn TechniqueOracle>, config: CalcConfig) -> Self {
        let build = Build::new();
        let report = BuildEngine::with_config(catalog.as_ref(), config.clone()).evaluate(&build);
        Self {
            build,
            catalog,
            config,
            report,
        }
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn state(&self) -> ValidationState {
        self.report.state()
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn catalog(&self) -> &dyn TechniqueOracle {
        self.catalog.as_ref()
    }

    /// Technique table of the current report, sorted for display.
    pub fn techniques(&self, key: SortKey, order: SortOrder) -> TechniqueTable {
        self.report.sorted_techniques(key, order)
    }

    /// Apply one input and recompute.
    ///
    /// Rejected inputs leave the build and report untouched.
    pub fn apply(&mut self, input: BuildInput) -> Result<&BuildReport> {
        let command = input.name();
        match input {
            BuildInput::SetAttribute { attribute, value } => {
                self.build.set_attribute(attribute, value)
            }
            BuildInput::SetBase(base) => self.build.set_base(base),
            BuildInput::SetCharm(charm) => self.build.set_charm(charm),
            BuildInput::SetCharmByName(name) => self.build.set_charm(Charm::from_name(&name)),
            BuildInput::SetGuildLevel(level) => self.build.set_guild_level(level),
            BuildInput::SetFactionBonus(bonus) => self.build.set_faction_bonus(bonus),
            BuildInput::SetPrimary(element) => self.build.set_primary(element)?,
            BuildInput::SetSecondary(element) => self.build.set_secondary(element)?,
            BuildInput::SetPrimaryByName(name) => self.build.set_primary(parse_element(&name)?)?,
            BuildInput::SetSecondaryByName(name) => {
                self.build.set_secondary(parse_element(&name)?)?
            }
            BuildInput::SetElements { primary, secondary } => {
                self.build.set_elements(primary, secondary)?
            }
            BuildInput::SetWeapon(weapon) => self.build.set_weapon(weapon),
            BuildInput::Reset => self.build = Build::new(),
        }

        self.recompute(command);
        Ok(&self.report)
    }

    /// Apply several inputs in order, stopping at the first rejected one.
    pub fn apply_all(&mut self, inputs: impl IntoIterator<Item = BuildInput>) -> Result<()> {
        for input in inputs {
            self.apply(input)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.build = Build::new();
        self.recompute(BuildInput::Reset.name());
    }

    fn recompute(&mut self, command: &'static str) {
        let previous = self.report.state();
        self.report =
            BuildEngine::with_config(self.catalog.as_ref(), self.config.clone()).evaluate(&self.build);

        let progression = &self.report.progression;
        let state = self.report.state();
        debug!(
            command,
            level = progression.level,
            points_spent = progression.points_spent,
            points_available = progression.points_available,
            state = ?state,
            rotation_dps = self.report.rotation.rotation_dps,
            "build recomputed"
        );

        if !state.is_ok() && state != previous {
            warn!(
                points_spent = progression.points_spent,
                points_available = progression.points_available,
                max_points = self.config.max_points,
                "{}",
                state.message()
            );
        }
    }
}

impl std::fmt::Debug for BuildSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildSession")
            .field("build", &self.build)
            .field("config", &self.config)
            .field("state", &self.report.state())
            .finish_non_exhaustive()
    }
}
