//! Plain data rows written by output backends.

use lift_car::Envelope;
use lift_sim::ElevatorSnapshot;

/// One domain event, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub seq:        u64,
    pub tick:       u64,
    pub elapsed_ms: u64,
    pub elevator:   String,
    /// Wire name, e.g. `elevator.door.opening`.
    pub event:      &'static str,
    /// The floor the event refers to, if any.
    pub floor:      Option<i32>,
    /// Extra payload rendered as `key=value`.
    pub detail:     String,
}

impl EventRow {
    pub fn from_envelope(envelope: &Envelope, tick_ms: u64) -> Self {
        Self {
            seq:        envelope.seq,
            tick:       envelope.tick.0,
            elapsed_ms: envelope.tick.0 * tick_ms,
            elevator:   envelope.elevator.to_string(),
            event:      envelope.kind().name(),
            floor:      envelope.event.floor(),
            detail:     envelope.event.detail(),
        }
    }
}

/// One elevator's state at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub tick:         u64,
    pub elapsed_ms:   u64,
    pub elevator:     String,
    pub floor:        i32,
    pub direction:    &'static str,
    pub door_state:   &'static str,
    pub motion_state: &'static str,
    pub status:       &'static str,
    /// Destination queue, space separated, head first.
    pub destinations: String,
}

impl SnapshotRow {
    pub fn new(tick: u64, elapsed_ms: u64, car: &ElevatorSnapshot) -> Self {
        let destinations = car
            .destination_floors
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            tick,
            elapsed_ms,
            elevator:     car.id.to_string(),
            floor:        car.current_floor,
            direction:    car.direction.as_str(),
            door_state:   car.door_state.as_str(),
            motion_state: car.motion_state.as_str(),
            status:       car.status.as_str(),
            destinations,
        }
    }
}
