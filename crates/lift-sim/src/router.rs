//! Event → sub-engine routing table.
//!
//! Handlers are registered explicitly at startup.  [`EventRouter::standard`]
//! builds the table the simulation uses; [`EventRouter::register`] lets an
//! embedding add its own reactions.

use std::collections::HashMap;

use lift_car::{Envelope, EventKind};
use lift_core::Tick;
use lift_schedule::TimerQueue;

use crate::Engines;

/// A routing target: reacts to one envelope, typically by arming or clearing
/// a timer.
pub type Handler = fn(&mut Engines, &mut TimerQueue, Tick, &Envelope);

#[derive(Default)]
pub struct EventRouter {
    table: HashMap<EventKind, Vec<Handler>>,
}

impl EventRouter {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard wiring of the motion, door and status engines.
    pub fn standard() -> Self {
        let mut router = Self::new();
        router.register(EventKind::MotionMoving, on_motion_moving);
        router.register(EventKind::DoorOpening, on_door_opening);
        router.register(EventKind::DoorOpened, on_door_opened);
        router.register(EventKind::DoorClosing, on_door_closing);
        router.register(EventKind::DoorClosed, on_door_closed);
        router.register(EventKind::StatusMaintenance, on_status_maintenance);
        router
    }

    /// Append `handler` to the handlers for `kind`.  Handlers run in
    /// registration order.
    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        self.table.entry(kind).or_default().push(handler);
    }

    /// Dispatch one envelope to every handler registered for its kind.
    /// Returns how many handlers ran.
    pub fn route(
        &self,
        engines:  &mut Engines,
        timers:   &mut TimerQueue,
        now:      Tick,
        envelope: &Envelope,
    ) -> usize {
        let Some(handlers) = self.table.get(&envelope.kind()) else {
            return 0;
        };
        for handler in handlers {
            handler(engines, timers, now, envelope);
        }
        handlers.len()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.table.get(&kind).map_or(0, Vec::len)
    }
}

// ── Standard handlers ─────────────────────────────────────────────────────────

fn on_motion_moving(engines: &mut Engines, timers: &mut TimerQueue, now: Tick, env: &Envelope) {
    engines.motion.on_moving(timers, now, &env.elevator);
}

fn on_door_opening(engines: &mut Engines, timers: &mut TimerQueue, now: Tick, env: &Envelope) {
    engines.door.on_opening(timers, now, &env.elevator);
}

fn on_door_opened(engines: &mut Engines, timers: &mut TimerQueue, now: Tick, env: &Envelope) {
    engines.door.on_opened(timers, now, &env.elevator);
}

fn on_door_closing(engines: &mut Engines, timers: &mut TimerQueue, now: Tick, env: &Envelope) {
    engines.door.on_closing(timers, now, &env.elevator);
}

fn on_door_closed(engines: &mut Engines, timers: &mut TimerQueue, _now: Tick, env: &Envelope) {
    engines.door.on_closed(timers, &env.elevator);
}

fn on_status_maintenance(engines: &mut Engines, timers: &mut TimerQueue, now: Tick, env: &Envelope) {
    engines.status.on_maintenance(timers, now, &env.elevator);
}
