//! Bonus application for the attribute resolution stack.
//!
//! Every attribute goes through the same calculation order:
//! Guild % → Charm (Flat | %Inc) → Truncate → Faction
//!
//! Intermediate values are carried in hundredths of a point so the guild
//! percentage and charm percentage multiply exactly and truncation happens
//! only where the rules say it does.

/// Hundredths per whole attribute point.
pub(crate) const SCALE: i64 = 100;

/// A single charm bonus on one attribute.
///
/// - **Flat**: added after guild scaling has been truncated (e.g., +5 FRT)
/// - **Increased**: percentage multiplier on the guild-scaled value (e.g., +5% INT)
///
/// A charm never grants both kinds to the same attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    /// Flat additive bonus
    Flat(i32),

    /// Percentage increase, stored as integer percentage (5 = +5%)
    Increased(i32),
}

impl Bonus {
    /// Create a flat bonus
    pub const fn flat(value: i32) -> Self {
        Bonus::Flat(value)
    }

    /// Create a percentage increase bonus (5 = +5%)
    pub const fn increased(percent: i32) -> Self {
        Bonus::Increased(percent)
    }

    /// Returns true for percentage bonuses.
    pub const fn is_fractional(&self) -> bool {
        matches!(self, Bonus::Increased(_))
    }
}

/// Applies guild scaling and an optional charm bonus to one base value.
///
/// # Formula
/// ```text
/// with_guild = base × (100 + guild) / 100
/// none       → floor(with_guild)
/// Flat(b)    → floor(with_guild) + b
/// Inc(p)     → floor(with_guild × (100 + p) / 100)
/// ```
pub(crate) fn apply_charm(base: i32, guild_percent: i32, bonus: Option<Bonus>) -> i64 {
    let with_guild = i64::from(base) * (SCALE + i64::from(guild_percent));

    match bonus {
        None => with_guild.div_euclid(SCALE),
        Some(Bonus::Flat(value)) => with_guild.div_euclid(SCALE) + i64::from(value),
        Some(Bonus::Increased(percent)) => {
            (with_guild * (SCALE + i64::from(percent))).div_euclid(SCALE * SCALE)
        }
    }
}
