//! Floor numbering and the building's valid floor range.
//!
//! Floors are signed: `0` is the ground floor, negative floors are basement
//! levels.  A building with 2 underground and 5 above-ground floors serves
//! `-2..=5`.

use crate::{LiftError, LiftResult};

/// A floor number.  Negative values are basement levels.
pub type Floor = i32;

/// Inclusive range of floors served by the building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    pub min: Floor,
    pub max: Floor,
}

impl FloorRange {
    /// Range for a building with `underground` basement levels and
    /// `above_ground` floors above the lobby.
    pub fn new(underground: i32, above_ground: i32) -> Self {
        Self { min: -underground, max: above_ground }
    }

    /// `true` if `floor` is served by the building.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor >= self.min && floor <= self.max
    }

    /// `Ok(())` if `floor` is served, otherwise [`LiftError::InvalidFloor`].
    pub fn check(&self, floor: Floor) -> LiftResult<()> {
        if self.contains(floor) {
            Ok(())
        } else {
            Err(LiftError::InvalidFloor { floor, min: self.min, max: self.max })
        }
    }

    /// Number of floors served (ground floor included).
    pub fn len(&self) -> usize {
        (i64::from(self.max) - i64::from(self.min) + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Human-readable floor label: `G` for the ground floor, `B1`, `B2`, … for
/// basements, the plain number above ground.
pub fn floor_label(floor: Floor) -> String {
    match floor {
        0          => "G".to_owned(),
        f if f > 0 => f.to_string(),
        f          => format!("B{}", f.unsigned_abs()),
    }
}
