/// Calculator constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalcConfig {
    /// Global cap on spent attribute points.
    pub max_points: u32,
    /// Whether the Common technique group joins every rotation.
    pub include_common: bool,
}

impl CalcConfig {
    // ===== game rules =====
    pub const ATTRIBUTE_FLOOR: i32 = 5;
    pub const MAX_GUILD_LEVEL: i32 = 10;
    pub const MIN_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 60;
    /// Last level of the 5-points-per-level tier.
    pub const TIER_BOUNDARY: u32 = 50;
    pub const POINTS_PER_LEVEL_LOW: u32 = 5;
    pub const POINTS_PER_LEVEL_HIGH: u32 = 4;
    /// Multiplier applied to the scaling attribute in the damage formula.
    pub const SCALING_FACTOR: f64 = 0.6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_POINTS: u32 = 285;
    pub const DEFAULT_INCLUDE_COMMON: bool = true;

    pub fn new() -> Self {
        Self {
            max_points: Self::DEFAULT_MAX_POINTS,
            include_common: Self::DEFAULT_INCLUDE_COMMON,
        }
    }

    pub fn with_max_points(mut self, max_points: u32) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_common(mut self, include_common: bool) -> Self {
        self.include_common = include_common;
        self
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::new()
    }
}
