//! Character level and attribute point bookkeeping.
//!
//! Two tiers of per-level cost:
//! - reaching levels 2–50 costs 5 points each
//! - reaching levels 51–60 costs 4 points each
//!
//! The cumulative requirement for level 60 is exactly the default point cap
//! (49 × 5 + 10 × 4 = 285).

use crate::config::CalcConfig;

/// Points needed to advance from `level - 1` to `level`.
const fn level_cost(level: u32) -> u32 {
    if level <= CalcConfig::TIER_BOUNDARY {
        CalcConfig::POINTS_PER_LEVEL_LOW
    } else {
        CalcConfig::POINTS_PER_LEVEL_HIGH
    }
}

/// Level reached by spending `total_spent` points under the default cap.
pub fn compute_level(total_spent: u32) -> u32 {
    compute_level_capped(total_spent, CalcConfig::DEFAULT_MAX_POINTS)
}

/// Level reached by spending `total_spent` points.
///
/// Walks the curve from level 1 and advances while the accumulated
/// requirement is within `cap` and covered by `total_spent`.
pub fn compute_level_capped(total_spent: u32, cap: u32) -> u32 {
    let mut level = CalcConfig::MIN_LEVEL;
    let mut accumulated = 0u32;

    while level < CalcConfig::MAX_LEVEL {
        let required = accumulated + level_cost(level + 1);
        if required > cap || total_spent < required {
            break;
        }
        accumulated = required;
        level += 1;
    }

    level
}

/// Points granted at `level`.
///
/// - levels 1–50: `(level − 1) × 5`
/// - levels 51–60: `250 + (level − 50) × 4`
///
/// Levels outside `1..=60` are clamped.
pub fn compute_available_points(level: u32) -> u32 {
    let level = level.clamp(CalcConfig::MIN_LEVEL, CalcConfig::MAX_LEVEL);
    let boundary = CalcConfig::TIER_BOUNDARY;

    if level <= boundary {
        (level - 1) * CalcConfig::POINTS_PER_LEVEL_LOW
    } else {
        boundary * CalcConfig::POINTS_PER_LEVEL_LOW
            + (level - boundary) * CalcConfig::POINTS_PER_LEVEL_HIGH
    }
}

/// Unspent points at `level`, never negative.
pub fn remaining_points(level: u32, total_spent: u32) -> u32 {
    compute_available_points(level).saturating_sub(total_spent)
}

/// Progression figures for one build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub points_spent: u32,
    pub level: u32,
    pub points_available: u32,
    pub remaining_points: u32,
}

impl Progression {
    pub fn from_spent(points_spent: u32, cap: u32) -> Self {
        let level = compute_level_capped(points_spent, cap);
        let points_available = compute_available_points(level);

        Self {
            points_spent,
            level,
            points_available,
            remaining_points: remaining_points(level, points_spent),
        }
    }
}
