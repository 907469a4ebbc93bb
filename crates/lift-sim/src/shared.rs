//! Thread-safe handle over a [`Sim`], with an optional wall-clock driver.
//!
//! Every request and every tick takes the same lock, so a request never
//! observes a half-applied timer continuation and vice versa.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Receiver;
use lift_car::Envelope;
use lift_core::{CallDirection, ElevatorId, Floor, LiftResult, Tick};
use lift_dispatch::DispatchPolicy;
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::{BuildingSnapshot, NoopObserver, Sim};

/// Cloneable, `Send + Sync` handle to one building.
pub struct SharedBuilding<P: DispatchPolicy> {
    inner: Arc<Mutex<Sim<P>>>,
}

impl<P: DispatchPolicy> Clone for SharedBuilding<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: DispatchPolicy> SharedBuilding<P> {
    pub fn new(sim: Sim<P>) -> Self {
        Self { inner: Arc::new(Mutex::new(sim)) }
    }

    pub fn lock(&self) -> MutexGuard<'_, Sim<P>> {
        self.inner.lock()
    }

    pub fn call_elevator(&self, floor: Floor, direction: CallDirection) -> LiftResult<ElevatorId> {
        self.lock().call_elevator(floor, direction)
    }

    pub fn schedule_car_request(&self, id: &ElevatorId, floor: Floor) -> LiftResult<()> {
        self.lock().schedule_car_request(id, floor)
    }

    pub fn open_door(&self, id: &ElevatorId) -> LiftResult<()> {
        self.lock().open_door(id)
    }

    pub fn close_door(&self, id: &ElevatorId) -> LiftResult<()> {
        self.lock().close_door(id)
    }

    pub fn start_maintenance(&self, id: &ElevatorId) -> LiftResult<()> {
        self.lock().start_maintenance(id)
    }

    pub fn snapshot(&self) -> BuildingSnapshot {
        self.lock().snapshot()
    }

    pub fn subscribe(&self) -> Receiver<Envelope> {
        self.lock().subscribe()
    }

    pub fn now(&self) -> Tick {
        self.lock().now()
    }

    /// Process `n` ticks under one lock acquisition.
    pub fn advance(&self, n: u64) {
        self.lock().run_ticks(n, &mut NoopObserver);
    }

    /// Drive the building from a background thread: one tick every `period`
    /// of wall-clock time until the returned handle is stopped.
    pub fn spawn_clock(&self, period: Duration) -> ClockHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let building = self.clone();
        let flag = Arc::clone(&stop);
        info!(period_ms = period.as_millis() as u64, "wall clock started");

        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Acquire) {
                building.advance(1);
                thread::sleep(period);
            }
            debug!(tick = %building.now(), "wall clock stopped");
        });

        ClockHandle { stop, handle }
    }
}

/// Stops and joins a clock thread started by [`SharedBuilding::spawn_clock`].
pub struct ClockHandle {
    stop:   Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl ClockHandle {
    pub fn stop(self) {
        self.stop.store(true, Ordering::Release);
        if self.handle.join().is_err() {
            warn!("wall clock thread panicked");
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}
