//! Elevator state enums.
//!
//! Door cycle:   `Closed → Opening → Open → Closing → Closed`
//!
//! Motion cycle: `Idle → (Moving → Stopped)* → Idle`: the car alternates
//! between `Moving` and `Stopped` once per destination and returns to `Idle`
//! when its queue is empty.

use std::fmt;

/// Travel direction of a car.  `Idle` means "no pending work".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Floor delta for one step in this direction.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
            Direction::Idle => 0,
        }
    }

    /// Direction from `from` towards `to`; `Idle` when equal.
    pub fn towards(from: i32, to: i32) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }
}

/// Direction button pressed at a hall call panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CallDirection {
    Up,
    Down,
}

impl From<CallDirection> for Direction {
    fn from(d: CallDirection) -> Direction {
        match d {
            CallDirection::Up   => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }
}

impl std::str::FromStr for CallDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up"   => Ok(CallDirection::Up),
            "down" => Ok(CallDirection::Down),
            other  => Err(format!("invalid call direction {other:?}: expected \"up\" or \"down\"")),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DoorState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MotionState {
    /// No pending destinations.
    #[default]
    Idle,
    /// Travelling between floors.
    Moving,
    /// Halted at a destination while the doors cycle.
    Stopped,
}

/// Operational status.  Only `Active` cars accept new destinations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    #[default]
    Active,
    Error,
    Maintenance,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl CallDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            CallDirection::Up   => "up",
            CallDirection::Down => "down",
        }
    }
}

impl DoorState {
    /// `true` while the doors are anything other than fully closed.
    #[inline]
    pub fn is_open_or_cycling(self) -> bool {
        !matches!(self, DoorState::Closed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DoorState::Closed  => "closed",
            DoorState::Opening => "opening",
            DoorState::Open    => "open",
            DoorState::Closing => "closing",
        }
    }
}

impl MotionState {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::Idle    => "idle",
            MotionState::Moving  => "moving",
            MotionState::Stopped => "stopped",
        }
    }
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active      => "active",
            Status::Error       => "error",
            Status::Maintenance => "maintenance",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Direction, CallDirection, DoorState, MotionState, Status);
