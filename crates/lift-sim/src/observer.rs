//! Simulation observer trait for progress reporting and data collection.

use lift_car::Envelope;
use lift_core::Tick;

use crate::BuildingSnapshot;

/// Callbacks invoked by the run loop at key points.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: event printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, env: &Envelope) {
///         println!("{} {} {}", env.tick, env.elevator, env.kind());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any timer fires.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `fired` is the number of timers that fired this tick.
    fn on_tick_end(&mut self, _tick: Tick, _fired: usize) {}

    /// Called once per domain event, in emission order.
    ///
    /// Events produced by requests made between runs are delivered at the
    /// start of the next processed tick.
    fn on_event(&mut self, _envelope: &Envelope) {}

    /// Called every `snapshot_interval` ticks (see `SimBuilder`).
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &BuildingSnapshot) {}

    /// Called once when a run is finished.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Collects every envelope.  Handy in tests and for post-run analysis.
#[derive(Default)]
pub struct EventRecorder {
    pub events: Vec<Envelope>,
    pub ticks:  u64,
}

impl SimObserver for EventRecorder {
    fn on_tick_end(&mut self, _tick: Tick, _fired: usize) {
        self.ticks += 1;
    }

    fn on_event(&mut self, envelope: &Envelope) {
        self.events.push(envelope.clone());
    }
}
