//! Scripted call plans.
//!
//! A `CallPlan` replays a building's traffic: each entry is an external
//! request (hall call, car-panel button, door button, maintenance) stamped
//! with the simulated time at which it arrives.

use std::fmt;

use lift_core::{CallDirection, ElevatorId, Floor};

/// One external request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Call {
    /// Hall button at `floor`.
    Hall { floor: Floor, direction: CallDirection },
    /// Car-panel button inside `elevator`.
    Car { elevator: ElevatorId, floor: Floor },
    OpenDoor { elevator: ElevatorId },
    CloseDoor { elevator: ElevatorId },
    Maintenance { elevator: ElevatorId },
}

impl Call {
    /// The `kind` column value for this call.
    pub fn kind(&self) -> &'static str {
        match self {
            Call::Hall { .. }        => "hall",
            Call::Car { .. }         => "car",
            Call::OpenDoor { .. }    => "open",
            Call::CloseDoor { .. }   => "close",
            Call::Maintenance { .. } => "maintenance",
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Hall { floor, direction } => write!(f, "hall {floor} {direction}"),
            Call::Car { elevator, floor }   => write!(f, "car {elevator} -> {floor}"),
            Call::OpenDoor { elevator }     => write!(f, "open {elevator}"),
            Call::CloseDoor { elevator }    => write!(f, "close {elevator}"),
            Call::Maintenance { elevator }  => write!(f, "maintenance {elevator}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptedCall {
    /// Simulated milliseconds since the start of the run.
    pub at_ms: u64,
    pub call:  Call,
}

/// Calls sorted by `at_ms`; calls with equal times keep their input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallPlan {
    calls: Vec<ScriptedCall>,
}

impl CallPlan {
    pub fn new(mut calls: Vec<ScriptedCall>) -> Self {
        calls.sort_by_key(|c| c.at_ms);
        Self { calls }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert a call, keeping time order.
    pub fn push(&mut self, at_ms: u64, call: Call) {
        let pos = self.calls.partition_point(|c| c.at_ms <= at_ms);
        self.calls.insert(pos, ScriptedCall { at_ms, call });
    }

    pub fn calls(&self) -> &[ScriptedCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Time of the last call, or 0 for an empty plan.
    pub fn last_ms(&self) -> u64 {
        self.calls.last().map_or(0, |c| c.at_ms)
    }
}

impl IntoIterator for CallPlan {
    type Item = ScriptedCall;
    type IntoIter = std::vec::IntoIter<ScriptedCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.into_iter()
    }
}
