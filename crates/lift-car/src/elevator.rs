//! The elevator entity.

use lift_core::{Direction, DoorState, ElevatorId, Floor, MotionState, Status};

/// One elevator car.
///
/// A passive record: every field is public so the registry, the state machine
/// and snapshot code can read it directly, but only [`ElevatorMachine`]
/// methods should write it.
///
/// # Invariants (maintained by the state machine)
///
/// - `destination_floors` holds no duplicates.
/// - doors not `Closed` ⇒ `motion_state != Moving`.
/// - `motion_state == Idle` ⇒ `direction == Idle` and no destinations.
///
/// [`ElevatorMachine`]: crate::ElevatorMachine
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub id:                 ElevatorId,
    pub current_floor:      Floor,
    pub direction:          Direction,
    pub door_state:         DoorState,
    pub motion_state:       MotionState,
    /// Service order, not numeric order.  Head is the next stop.
    pub destination_floors: Vec<Floor>,
    pub status:             Status,
    /// Probability in `[0, 1]` that a move attempt faults.
    pub error_rate:         f64,
}

impl Elevator {
    /// A fresh car parked at the ground floor with doors closed.
    pub fn new(id: ElevatorId, error_rate: f64) -> Self {
        Self {
            id,
            current_floor:      0,
            direction:          Direction::Idle,
            door_state:         DoorState::Closed,
            motion_state:       MotionState::Idle,
            destination_floors: Vec::new(),
            status:             Status::Active,
            error_rate,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.motion_state == MotionState::Idle
    }

    /// Next stop, if any.
    #[inline]
    pub fn next_destination(&self) -> Option<Floor> {
        self.destination_floors.first().copied()
    }

    /// The queued stop furthest along the current direction of travel.
    ///
    /// `Up` → highest queued floor, `Down` → lowest, `Idle` (or an empty
    /// queue) → the current floor.
    pub fn furthest_destination(&self) -> Floor {
        let floors = self.destination_floors.iter().copied();
        match self.direction {
            Direction::Up   => floors.max().unwrap_or(self.current_floor),
            Direction::Down => floors.min().unwrap_or(self.current_floor),
            Direction::Idle => self.current_floor,
        }
    }
}
