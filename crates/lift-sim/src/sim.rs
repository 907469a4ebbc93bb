//! The `Sim` struct: request handlers and the tick loop.

use std::fmt;

use crossbeam_channel::Receiver;
use lift_car::{Elevator, ElevatorMachine, ElevatorRegistry, Envelope, EventBus};
use lift_core::{
    BuildingConfig, CallDirection, ElevatorId, Floor, FloorRange, LiftError, LiftResult,
    SimClock, Tick,
};
use lift_dispatch::{DispatchPolicy, HallRequest, assign_elevator_to_hall_request};
use lift_schedule::{Call, CallPlan, Timer, TimerAction, TimerQueue};
use tracing::{debug, info, warn};

use crate::{BuildingSnapshot, Engines, EventRouter, SimObserver};

// ── CallOutcome ───────────────────────────────────────────────────────────────

/// Result of one scripted call.  A rejected call is an outcome, not an abort.
#[derive(Clone, Debug, PartialEq)]
pub struct CallOutcome {
    pub at_ms:  u64,
    pub tick:   Tick,
    pub call:   Call,
    /// The assigned car for hall calls, the addressed car otherwise.
    pub result: LiftResult<ElevatorId>,
}

impl fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(id) => write!(f, "{:>7}ms  {:<24} ok ({id})", self.at_ms, self.call.to_string()),
            Err(e) => write!(f, "{:>7}ms  {:<24} {} ({e})", self.at_ms, self.call.to_string(), e.code()),
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The building simulation.
///
/// Owns every elevator (through the registry), the timer queue, the event bus
/// and the sub-engines.  All mutation goes through `&mut self`, so requests
/// and timer callbacks for a car can never interleave.
///
/// # Event flow
///
/// ```text
/// request / timer ─► ElevatorMachine ─► EventBus ─► EventRouter ─► sub-engine
///                                          │                          │
///                                          ▼                          ▼
///                                   subscribers, journal        TimerQueue
/// ```
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy> {
    /// Validated building configuration.
    pub config: BuildingConfig,

    /// Current tick and the tick ↔ millisecond mapping.
    pub clock: SimClock,

    pub floors: FloorRange,

    pub registry: ElevatorRegistry,

    /// Pending continuations, owned slot-by-slot by the sub-engines.
    pub timers: TimerQueue,

    pub bus: EventBus,

    pub engines: Engines,

    pub router: EventRouter,

    /// Hall-call assignment policy.
    pub policy: P,

    /// Routed envelopes not yet delivered to an observer.  Requests append
    /// here; the next tick or `finish` drains it.  A `Sim` that only takes
    /// requests and never runs keeps every envelope.
    pub(crate) journal: Vec<Envelope>,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub(crate) snapshot_interval: u64,
}

impl<P: DispatchPolicy> Sim<P> {
    // ── Request handlers ──────────────────────────────────────────────────

    /// `isValidFloor`: `true` if `floor` is served by the building.
    pub fn is_valid_floor(&self, floor: Floor) -> bool {
        self.floors.contains(floor)
    }

    /// Car-panel button: queue `floor` on elevator `id`.
    pub fn schedule_car_request(&mut self, id: &ElevatorId, floor: Floor) -> LiftResult<()> {
        self.floors.check(floor)?;
        info!(elevator = %id, floor, "car request");
        self.with_machine(id, |m| m.schedule_car_request(floor))
    }

    /// Door-open button.
    pub fn open_door(&mut self, id: &ElevatorId) -> LiftResult<()> {
        info!(elevator = %id, "open door");
        self.with_machine(id, |m| m.start_opening_door())
    }

    /// Door-close button.
    pub fn close_door(&mut self, id: &ElevatorId) -> LiftResult<()> {
        info!(elevator = %id, "close door");
        self.with_machine(id, |m| m.start_closing_door())
    }

    /// Take `id` out of service for `maintenance_fix_time_ms`.
    pub fn start_maintenance(&mut self, id: &ElevatorId) -> LiftResult<()> {
        info!(elevator = %id, "maintenance requested");
        self.with_machine(id, |m| {
            m.start_maintenance();
            Ok(())
        })
    }

    /// Hall call: pick a car with the dispatch policy and send it to `floor`.
    pub fn call_elevator(&mut self, floor: Floor, direction: CallDirection) -> LiftResult<ElevatorId> {
        self.floors.check(floor)?;
        let request = HallRequest::new(floor, direction);
        self.bus.set_time(self.clock.now());
        let result = assign_elevator_to_hall_request(
            &self.policy,
            &request,
            &mut self.registry,
            &mut self.bus,
        );
        if let Err(e) = &result {
            warn!(floor, %direction, error = %e, "hall call rejected");
        }
        self.route_pending();
        result
    }

    /// Apply one scripted call.
    pub fn apply_call(&mut self, call: &Call) -> LiftResult<ElevatorId> {
        match call {
            Call::Hall { floor, direction } => self.call_elevator(*floor, *direction),
            Call::Car { elevator, floor } => {
                self.schedule_car_request(elevator, *floor).map(|()| elevator.clone())
            }
            Call::OpenDoor { elevator } => self.open_door(elevator).map(|()| elevator.clone()),
            Call::CloseDoor { elevator } => self.close_door(elevator).map(|()| elevator.clone()),
            Call::Maintenance { elevator } => {
                self.start_maintenance(elevator).map(|()| elevator.clone())
            }
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> BuildingSnapshot {
        BuildingSnapshot::capture(
            self.clock.now(),
            self.clock.elapsed_ms(),
            self.floors,
            self.registry.get_all(),
        )
    }

    pub fn elevator(&self, id: &ElevatorId) -> LiftResult<&Elevator> {
        self.registry.get(id)
    }

    pub fn elevators(&self) -> &[Elevator] {
        self.registry.get_all()
    }

    /// Receive every envelope emitted from now on.
    pub fn subscribe(&mut self) -> Receiver<Envelope> {
        self.bus.subscribe()
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    /// `true` when no timer is pending: every car is at rest.
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Process exactly `n` ticks from the current position.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Process ticks until the clock reaches `end` (exclusive).
    pub fn run_until<O: SimObserver>(&mut self, end: Tick, observer: &mut O) {
        while self.clock.now() < end {
            self.step(observer);
        }
    }

    /// Process ticks until no timer is pending, at most `max_ticks`.
    ///
    /// Returns `true` if the building went idle within the budget.
    pub fn run_until_idle<O: SimObserver>(&mut self, max_ticks: u64, observer: &mut O) -> bool {
        for _ in 0..max_ticks {
            if self.is_idle() {
                return true;
            }
            self.step(observer);
        }
        self.is_idle()
    }

    /// Replay `plan`: each call is applied at the first tick at or after its
    /// `at_ms`, then the run continues until idle (or `settle_ticks` more
    /// ticks have passed).  Ends with `on_sim_end`.
    pub fn run_plan<O: SimObserver>(
        &mut self,
        plan:         &CallPlan,
        settle_ticks: u64,
        observer:     &mut O,
    ) -> Vec<CallOutcome> {
        let mut outcomes = Vec::with_capacity(plan.len());
        for scripted in plan.calls() {
            let due = self.clock.tick_at_ms(scripted.at_ms);
            self.run_until(due, observer);
            let result = self.apply_call(&scripted.call);
            outcomes.push(CallOutcome {
                at_ms:  scripted.at_ms,
                tick:   self.clock.now(),
                call:   scripted.call.clone(),
                result,
            });
        }
        if !self.run_until_idle(settle_ticks, observer) {
            warn!(settle_ticks, pending = self.timers.len(), "building still busy after settle budget");
        }
        self.finish(observer);
        outcomes
    }

    /// Deliver any undelivered events and signal the end of the run.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        self.flush_journal(observer);
        observer.on_sim_end(self.clock.now());
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.now();
        observer.on_tick_start(now);
        self.flush_journal(observer);

        let fired = self.fire_due(now);

        self.flush_journal(observer);
        observer.on_tick_end(now, fired);
        if self.snapshot_interval > 0 && now.0 % self.snapshot_interval == 0 {
            observer.on_snapshot(now, &self.snapshot());
        }
        self.clock.advance();
    }

    /// Fire every timer due at `now`, routing the events each one produces
    /// before the next fires.  Returns how many fired.
    fn fire_due(&mut self, now: Tick) -> usize {
        let due = self.timers.pop_due(now);
        let fired = due.len();
        self.bus.set_time(now);

        for (id, timer) in due {
            self.engines.fired(id, &timer);
            debug!(elevator = %timer.elevator, action = %timer.action, tick = %now, "timer fired");
            if let Err(e) = self.fire(&timer) {
                warn!(elevator = %timer.elevator, action = %timer.action, error = %e, "timer continuation rejected");
            }
            self.route_pending();
        }
        fired
    }

    fn fire(&mut self, timer: &Timer) -> LiftResult<()> {
        let mut m = self.registry.machine(&timer.elevator, &mut self.bus)?;
        match timer.action {
            TimerAction::ReachFloor          => m.reached_floor(),
            TimerAction::CompleteOpening     => {
                m.complete_opening_door();
                Ok(())
            }
            TimerAction::StartClosing        => m.start_closing_door(),
            TimerAction::CompleteClosing     => m.complete_closing_door(),
            TimerAction::CompleteMaintenance => m.complete_maintenance(),
        }
    }

    /// Run `f` against the machine for `id`, then route whatever it emitted
    /// (also on error: a chain may fail after emitting).
    fn with_machine<T, F>(&mut self, id: &ElevatorId, f: F) -> LiftResult<T>
    where
        F: FnOnce(&mut ElevatorMachine<'_, EventBus>) -> LiftResult<T>,
    {
        self.bus.set_time(self.clock.now());
        let result = match self.registry.machine(id, &mut self.bus) {
            Ok(mut m) => f(&mut m),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            if !matches!(e, LiftError::NotFound(_)) {
                debug!(elevator = %id, error = %e, "request rejected");
            }
        }
        self.route_pending();
        result
    }

    /// Drain the bus through the router, in emission order.
    fn route_pending(&mut self) {
        let now = self.clock.now();
        while let Some(envelope) = self.bus.pop() {
            self.router.route(&mut self.engines, &mut self.timers, now, &envelope);
            self.journal.push(envelope);
        }
    }

    fn flush_journal<O: SimObserver>(&mut self, observer: &mut O) {
        for envelope in self.journal.drain(..) {
            observer.on_event(&envelope);
        }
    }
}
