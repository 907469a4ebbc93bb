//! Point-in-time view of the whole building, for external renderers.

use lift_car::Elevator;
use lift_core::{Direction, DoorState, ElevatorId, Floor, FloorRange, MotionState, Status, Tick};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorSnapshot {
    pub id:                 ElevatorId,
    pub current_floor:      Floor,
    pub direction:          Direction,
    pub door_state:         DoorState,
    pub motion_state:       MotionState,
    pub destination_floors: Vec<Floor>,
    pub status:             Status,
    pub error_rate:         f64,
}

impl From<&Elevator> for ElevatorSnapshot {
    fn from(car: &Elevator) -> Self {
        Self {
            id:                 car.id.clone(),
            current_floor:      car.current_floor,
            direction:          car.direction,
            door_state:         car.door_state,
            motion_state:       car.motion_state,
            destination_floors: car.destination_floors.clone(),
            status:             car.status,
            error_rate:         car.error_rate,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingSnapshot {
    pub tick:           Tick,
    /// Simulated milliseconds at `tick`.
    pub elapsed_ms:     u64,
    pub min_floor:      Floor,
    pub max_floor:      Floor,
    pub elevator_count: usize,
    /// In creation order.
    pub elevators:      Vec<ElevatorSnapshot>,
}

impl BuildingSnapshot {
    pub fn capture(tick: Tick, elapsed_ms: u64, floors: FloorRange, cars: &[Elevator]) -> Self {
        Self {
            tick,
            elapsed_ms,
            min_floor: floors.min,
            max_floor: floors.max,
            elevator_count: cars.len(),
            elevators: cars.iter().map(ElevatorSnapshot::from).collect(),
        }
    }

    pub fn elevator(&self, id: &ElevatorId) -> Option<&ElevatorSnapshot> {
        self.elevators.iter().find(|e| &e.id == id)
    }
}
