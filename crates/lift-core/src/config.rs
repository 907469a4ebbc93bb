//! Building configuration.
//!
//! Loaded by the application (JSON file or CLI flags) and handed to the
//! simulation builder, which calls [`BuildingConfig::validate`] before any
//! elevator is created.

use crate::{AlphabeticIds, FloorRange, IdStrategy, LiftError, LiftResult, UuidIds};

/// Accepted range for every configured duration, in milliseconds.
pub const DURATION_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=10_000;

/// Accepted range for the fleet size.
pub const ELEVATOR_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=50;

/// How elevator identifiers are minted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IdScheme {
    /// `A`, `B`, … `Z`, `AA`, …
    #[default]
    Alphabetic,
    /// Random UUID v4 drawn from the run seed.
    Uuid,
}

impl IdScheme {
    /// Build the strategy for this scheme.  `seed` only matters for `Uuid`.
    pub fn strategy(self, seed: u64) -> Box<dyn IdStrategy> {
        match self {
            IdScheme::Alphabetic => Box::new(AlphabeticIds::new()),
            IdScheme::Uuid       => Box::new(UuidIds::new(seed)),
        }
    }
}

impl std::str::FromStr for IdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetic" | "alpha" => Ok(IdScheme::Alphabetic),
            "uuid"                 => Ok(IdScheme::Uuid),
            other => Err(format!("unknown id scheme {other:?}: expected \"alphabetic\" or \"uuid\"")),
        }
    }
}

/// Top-level building configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Fleet size.  Fixed for the lifetime of the building.  Default: 2.
    pub elevator_count: usize,

    /// Basement levels below the ground floor.  Default: 0.
    pub underground_floors: i32,

    /// Floors above the ground floor.  Default: 5.
    pub above_ground_floors: i32,

    /// Time to travel one floor.  Default: 2000 ms.
    pub floor_travel_time_ms: u64,

    /// Time for the doors to fully open, and again to fully close.
    /// Default: 300 ms.
    pub door_open_close_time_ms: u64,

    /// How long the doors stay open before closing.  Default: 1000 ms.
    pub door_hold_time_ms: u64,

    /// Probability that a move attempt faults.  Default: 0.1.
    pub error_rate: f64,

    /// Time a maintenance visit takes.  Default: 5000 ms.
    pub maintenance_fix_time_ms: u64,

    /// Simulated milliseconds per tick.  Default: 100.
    pub tick_ms: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    pub id_scheme: IdScheme,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            elevator_count:          2,
            underground_floors:      0,
            above_ground_floors:     5,
            floor_travel_time_ms:    2_000,
            door_open_close_time_ms: 300,
            door_hold_time_ms:       1_000,
            error_rate:              0.1,
            maintenance_fix_time_ms: 5_000,
            tick_ms:                 100,
            seed:                    42,
            id_scheme:               IdScheme::Alphabetic,
        }
    }
}

impl BuildingConfig {
    /// The floors this building serves.
    pub fn floor_range(&self) -> FloorRange {
        FloorRange::new(self.underground_floors, self.above_ground_floors)
    }

    /// Reject out-of-range values.  Returns the first violation found.
    pub fn validate(&self) -> LiftResult<()> {
        if !ELEVATOR_COUNT_RANGE.contains(&self.elevator_count) {
            return Err(config_err(format!(
                "elevator_count must be in {}..={}, got {}",
                ELEVATOR_COUNT_RANGE.start(),
                ELEVATOR_COUNT_RANGE.end(),
                self.elevator_count
            )));
        }
        if self.underground_floors < 0 {
            return Err(config_err(format!(
                "underground_floors must be >= 0, got {}",
                self.underground_floors
            )));
        }
        if self.above_ground_floors < 1 {
            return Err(config_err(format!(
                "above_ground_floors must be >= 1, got {}",
                self.above_ground_floors
            )));
        }

        for (name, value) in [
            ("floor_travel_time_ms", self.floor_travel_time_ms),
            ("door_open_close_time_ms", self.door_open_close_time_ms),
            ("door_hold_time_ms", self.door_hold_time_ms),
            ("maintenance_fix_time_ms", self.maintenance_fix_time_ms),
        ] {
            if !DURATION_RANGE_MS.contains(&value) {
                return Err(config_err(format!(
                    "{name} must be in {}..={} ms, got {value}",
                    DURATION_RANGE_MS.start(),
                    DURATION_RANGE_MS.end()
                )));
            }
        }

        if !self.error_rate.is_finite() || !(0.0..=1.0).contains(&self.error_rate) {
            return Err(config_err(format!(
                "error_rate must be in 0..=1, got {}",
                self.error_rate
            )));
        }
        if !(1..=100).contains(&self.tick_ms) {
            return Err(config_err(format!(
                "tick_ms must be in 1..=100, got {}",
                self.tick_ms
            )));
        }
        Ok(())
    }
}

fn config_err(msg: String) -> LiftError {
    LiftError::Config(msg)
}
