//! Build validation against level-derived availability and the point cap.
//!
//! Validation state is always derived from current inputs and never stored.

use crate::config::CalcConfig;

/// Advisory state of a build.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ValidationState {
    #[default]
    Ok,
    /// Spent more than the global cap; the build is illegal.
    OverCap,
    /// Spent more than the current level grants.
    OverAvailable,
}

impl ValidationState {
    /// Returns true for the hard-error state.
    pub const fn is_illegal(&self) -> bool {
        matches!(self, Self::OverCap)
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Message shown next to the point counter.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Ok => "build is within limits",
            Self::OverCap => "spent points exceed the maximum obtainable points",
            Self::OverAvailable => "spent points exceed the points available at this level",
        }
    }
}

/// Both validation conditions, evaluated independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub over_cap: bool,
    pub over_available: bool,
}

impl ValidationReport {
    pub fn check(total_spent: u32, points_available: u32, max_points: u32) -> Self {
        Self {
            over_cap: total_spent > max_points,
            over_available: total_spent > points_available,
        }
    }

    /// Display state; the cap takes precedence when both conditions hold.
    pub const fn state(&self) -> ValidationState {
        if self.over_cap {
            ValidationState::OverCap
        } else if self.over_available {
            ValidationState::OverAvailable
        } else {
            ValidationState::Ok
        }
    }
}

/// Validate spent points under the default cap.
///
/// `level` is accepted for the caller's convenience; availability is what is
/// compared.
pub fn validate_build(total_spent: u32, level: u32, points_available: u32) -> ValidationState {
    validate_build_with_cap(
        total_spent,
        level,
        points_available,
        CalcConfig::DEFAULT_MAX_POINTS,
    )
}

pub fn validate_build_with_cap(
    total_spent: u32,
    _level: u32,
    points_available: u32,
    max_points: u32,
) -> ValidationState {
    ValidationReport::check(total_spent, points_available, max_points).state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::compute_available_points;

    #[test]
    fn over_cap_regardless_of_level() {
        for level in [1, 30, 60] {
            let available = compute_available_points(level);
            assert_eq!(validate_build(300, level, available), ValidationState::OverCap);
        }
    }

    #[test]
    fn over_available_at_low_level() {
        assert_eq!(validate_build(20, 1, 0), ValidationState::OverAvailable);
    }

    #[test]
    fn boundary_is_ok() {
        let available = compute_available_points(10);
        assert_eq!(validate_build(available, 10, available), ValidationState::Ok);
        assert_eq!(validate_build(285, 60, 290), ValidationState::Ok);
    }

    #[test]
    fn both_conditions_are_reported() {
        let report = ValidationReport::check(300, 0, 285);
        assert!(report.over_cap);
        assert!(report.over_available);
        assert_eq!(report.state(), ValidationState::OverCap);
        assert!(report.state().is_illegal());
    }

    #[test]
    fn custom_cap() {
        assert_eq!(validate_build_with_cap(100, 30, 145, 90), ValidationState::OverCap);
        assert_eq!(validate_build_with_cap(100, 30, 145, 100), ValidationState::Ok);
    }
}
