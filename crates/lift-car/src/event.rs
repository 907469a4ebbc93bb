//! Domain events.
//!
//! `ElevatorEvent` is a closed enum; every accepted state-machine transition
//! produces exactly one of these.  `EventKind` is its field-less tag, used as
//! the routing key and as the stable wire name for external observers.

use std::fmt;

use lift_core::{Direction, ElevatorId, Floor, Tick};

// ── ElevatorEvent ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ElevatorEvent {
    /// A floor was accepted; `queue` is the full re-sorted destination list.
    DestinationScheduled { floor: Floor, queue: Vec<Floor> },
    DestinationReached { floor: Floor },
    /// The car passed or arrived at `floor` (emitted once per floor travelled).
    FloorReached { floor: Floor },
    DoorOpening,
    DoorOpened,
    DoorClosing,
    DoorClosed,
    MotionMoving { direction: Direction },
    MotionStopped,
    MotionIdle,
    StatusActive,
    StatusError,
    StatusMaintenance,
}

impl ElevatorEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ElevatorEvent::DestinationScheduled { .. } => EventKind::DestinationScheduled,
            ElevatorEvent::DestinationReached { .. }   => EventKind::DestinationReached,
            ElevatorEvent::FloorReached { .. }         => EventKind::FloorReached,
            ElevatorEvent::DoorOpening                 => EventKind::DoorOpening,
            ElevatorEvent::DoorOpened                  => EventKind::DoorOpened,
            ElevatorEvent::DoorClosing                 => EventKind::DoorClosing,
            ElevatorEvent::DoorClosed                  => EventKind::DoorClosed,
            ElevatorEvent::MotionMoving { .. }         => EventKind::MotionMoving,
            ElevatorEvent::MotionStopped               => EventKind::MotionStopped,
            ElevatorEvent::MotionIdle                  => EventKind::MotionIdle,
            ElevatorEvent::StatusActive                => EventKind::StatusActive,
            ElevatorEvent::StatusError                 => EventKind::StatusError,
            ElevatorEvent::StatusMaintenance           => EventKind::StatusMaintenance,
        }
    }

    /// Short human-readable payload, empty for field-less events.
    pub fn detail(&self) -> String {
        match self {
            ElevatorEvent::DestinationScheduled { floor, queue } => {
                format!("floor={floor} queue={queue:?}")
            }
            ElevatorEvent::DestinationReached { floor }
            | ElevatorEvent::FloorReached { floor } => format!("floor={floor}"),
            ElevatorEvent::MotionMoving { direction } => format!("direction={direction}"),
            _ => String::new(),
        }
    }

    /// The floor carried by the event, if any.
    pub fn floor(&self) -> Option<Floor> {
        match self {
            ElevatorEvent::DestinationScheduled { floor, .. }
            | ElevatorEvent::DestinationReached { floor }
            | ElevatorEvent::FloorReached { floor } => Some(*floor),
            _ => None,
        }
    }
}

// ── EventKind ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    DestinationScheduled,
    DestinationReached,
    FloorReached,
    DoorOpening,
    DoorOpened,
    DoorClosing,
    DoorClosed,
    MotionMoving,
    MotionStopped,
    MotionIdle,
    StatusActive,
    StatusError,
    StatusMaintenance,
}

impl EventKind {
    pub const ALL: [EventKind; 13] = [
        EventKind::DestinationScheduled,
        EventKind::DestinationReached,
        EventKind::FloorReached,
        EventKind::DoorOpening,
        EventKind::DoorOpened,
        EventKind::DoorClosing,
        EventKind::DoorClosed,
        EventKind::MotionMoving,
        EventKind::MotionStopped,
        EventKind::MotionIdle,
        EventKind::StatusActive,
        EventKind::StatusError,
        EventKind::StatusMaintenance,
    ];

    /// Stable dotted name for external observers.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::DestinationScheduled => "elevator.destination.scheduled",
            EventKind::DestinationReached   => "elevator.destination.reached",
            EventKind::FloorReached         => "elevator.motion.floor-reached",
            EventKind::DoorOpening          => "elevator.door.opening",
            EventKind::DoorOpened           => "elevator.door.opened",
            EventKind::DoorClosing          => "elevator.door.closing",
            EventKind::DoorClosed           => "elevator.door.closed",
            EventKind::MotionMoving         => "elevator.motion.moving",
            EventKind::MotionStopped        => "elevator.motion.stopped",
            EventKind::MotionIdle           => "elevator.motion.idle",
            EventKind::StatusActive         => "elevator.status.active",
            EventKind::StatusError          => "elevator.status.error",
            EventKind::StatusMaintenance    => "elevator.status.maintenance",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Envelope ──────────────────────────────────────────────────────────────────

/// An event as published on the bus: tagged with its elevator, the tick it
/// was emitted at, and a bus-wide sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    /// Strictly increasing across the whole bus, starting at 0.
    pub seq:      u64,
    pub tick:     Tick,
    pub elevator: ElevatorId,
    pub event:    ElevatorEvent,
}

impl Envelope {
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Destination for events produced by [`ElevatorMachine`].
///
/// [`EventBus`] is the production sink; tests use a plain `Vec`.
///
/// [`ElevatorMachine`]: crate::ElevatorMachine
/// [`EventBus`]: crate::EventBus
pub trait EventSink {
    fn emit(&mut self, elevator: &ElevatorId, event: ElevatorEvent);
}

impl EventSink for Vec<(ElevatorId, ElevatorEvent)> {
    fn emit(&mut self, elevator: &ElevatorId, event: ElevatorEvent) {
        self.push((elevator.clone(), event));
    }
}

impl EventSink for Vec<ElevatorEvent> {
    fn emit(&mut self, _elevator: &ElevatorId, event: ElevatorEvent) {
        self.push(event);
    }
}
