use std::fmt;

use lift_core::{CallDirection, Floor};

/// A hall-button press: someone at `floor` wants to go `direction`.
///
/// Lives only for the duration of one dispatch call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallRequest {
    pub floor:     Floor,
    pub direction: CallDirection,
}

impl HallRequest {
    pub fn new(floor: Floor, direction: CallDirection) -> Self {
        Self { floor, direction }
    }
}

impl fmt::Display for HallRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {} {}", self.floor, self.direction)
    }
}
