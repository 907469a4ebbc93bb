//! Motion, door and status sub-engines.
//!
//! Each sub-engine owns one [`TimerSlots`]: a map from elevator to its single
//! pending timer for that concern.  Arming always cancels the previous timer
//! first, so at most one callback per (elevator, concern) is ever pending.
//!
//! Durations are converted to ticks once, when the engines are built.

use lift_core::{BuildingConfig, ElevatorId, SimClock, Tick};
use lift_schedule::{Concern, Timer, TimerAction, TimerId, TimerQueue};
use tracing::debug;

#[cfg(feature = "fx-hash")]
type SlotMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type SlotMap<K, V> = std::collections::HashMap<K, V>;

// ── TimerSlots ────────────────────────────────────────────────────────────────

/// One pending-timer handle per elevator for a single concern.
#[derive(Default)]
pub struct TimerSlots {
    active: SlotMap<ElevatorId, TimerId>,
}

impl TimerSlots {
    /// Cancel any pending timer for `elevator`, then schedule `action`
    /// `after` ticks from `now`.
    pub fn arm(
        &mut self,
        timers:   &mut TimerQueue,
        now:      Tick,
        after:    u64,
        elevator: &ElevatorId,
        action:   TimerAction,
    ) -> TimerId {
        self.clear(timers, elevator);
        let due = now + after;
        let id = timers.schedule(due, Timer::new(elevator.clone(), action));
        debug!(elevator = %elevator, %action, %due, timer = %id, "timer armed");
        self.active.insert(elevator.clone(), id);
        id
    }

    /// Cancel the pending timer for `elevator`, if any.
    pub fn clear(&mut self, timers: &mut TimerQueue, elevator: &ElevatorId) -> bool {
        match self.active.remove(elevator) {
            Some(id) => timers.cancel(id),
            None => false,
        }
    }

    /// Drop the slot for a timer that has just fired.  A newer timer armed
    /// in the meantime is left alone.
    pub fn fired(&mut self, elevator: &ElevatorId, id: TimerId) {
        if self.active.get(elevator) == Some(&id) {
            self.active.remove(elevator);
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

// ── Sub-engines ───────────────────────────────────────────────────────────────

/// Turns `MotionMoving` into a one-floor travel timer.
pub struct MotionEngine {
    pub slots:        TimerSlots,
    pub travel_ticks: u64,
}

impl MotionEngine {
    pub fn on_moving(&mut self, timers: &mut TimerQueue, now: Tick, elevator: &ElevatorId) {
        self.slots.arm(timers, now, self.travel_ticks, elevator, TimerAction::ReachFloor);
    }
}

/// Drives the door cycle: opening → hold → closing.
pub struct DoorEngine {
    pub slots:            TimerSlots,
    pub open_close_ticks: u64,
    pub hold_ticks:       u64,
}

impl DoorEngine {
    pub fn on_opening(&mut self, timers: &mut TimerQueue, now: Tick, elevator: &ElevatorId) {
        self.slots.arm(timers, now, self.open_close_ticks, elevator, TimerAction::CompleteOpening);
    }

    pub fn on_opened(&mut self, timers: &mut TimerQueue, now: Tick, elevator: &ElevatorId) {
        self.slots.arm(timers, now, self.hold_ticks, elevator, TimerAction::StartClosing);
    }

    pub fn on_closing(&mut self, timers: &mut TimerQueue, now: Tick, elevator: &ElevatorId) {
        self.slots.arm(timers, now, self.open_close_ticks, elevator, TimerAction::CompleteClosing);
    }

    pub fn on_closed(&mut self, timers: &mut TimerQueue, elevator: &ElevatorId) {
        self.slots.clear(timers, elevator);
    }
}

/// Schedules the end of a maintenance visit.  `StatusError` arms nothing:
/// a faulted car waits for an explicit maintenance request.
pub struct StatusEngine {
    pub slots:     TimerSlots,
    pub fix_ticks: u64,
}

impl StatusEngine {
    pub fn on_maintenance(&mut self, timers: &mut TimerQueue, now: Tick, elevator: &ElevatorId) {
        self.slots.arm(timers, now, self.fix_ticks, elevator, TimerAction::CompleteMaintenance);
    }
}

// ── Engines ───────────────────────────────────────────────────────────────────

pub struct Engines {
    pub motion: MotionEngine,
    pub door:   DoorEngine,
    pub status: StatusEngine,
}

impl Engines {
    /// Engines with durations from `config`, converted at `clock` resolution.
    pub fn new(config: &BuildingConfig, clock: &SimClock) -> Self {
        Self {
            motion: MotionEngine {
                slots:        TimerSlots::default(),
                travel_ticks: clock.ticks_for_ms(config.floor_travel_time_ms),
            },
            door: DoorEngine {
                slots:            TimerSlots::default(),
                open_close_ticks: clock.ticks_for_ms(config.door_open_close_time_ms),
                hold_ticks:       clock.ticks_for_ms(config.door_hold_time_ms),
            },
            status: StatusEngine {
                slots:     TimerSlots::default(),
                fix_ticks: clock.ticks_for_ms(config.maintenance_fix_time_ms),
            },
        }
    }

    pub fn slots_mut(&mut self, concern: Concern) -> &mut TimerSlots {
        match concern {
            Concern::Motion => &mut self.motion.slots,
            Concern::Door   => &mut self.door.slots,
            Concern::Status => &mut self.status.slots,
        }
    }

    pub fn slots(&self, concern: Concern) -> &TimerSlots {
        match concern {
            Concern::Motion => &self.motion.slots,
            Concern::Door   => &self.door.slots,
            Concern::Status => &self.status.slots,
        }
    }

    /// Forget the slot of a timer that just fired.
    pub fn fired(&mut self, id: TimerId, timer: &Timer) {
        self.slots_mut(timer.action.concern()).fired(&timer.elevator, id);
    }
}
