//! `lift-sim`: event-driven simulation engine for the lift building simulator.
//!
//! # Event loop
//!
//! ```text
//! request ─► ElevatorMachine ─► EventBus ─► EventRouter ─► MotionEngine / DoorEngine / StatusEngine
//!                                                                  │
//!            ElevatorMachine ◄── timer continuation ◄── TimerQueue ◄┘
//!
//! for each tick:
//!   ① pop every timer due at this tick (due order, then arming order)
//!   ② run its continuation on the elevator's state machine
//!   ③ route the emitted events, which may arm new timers
//! ```
//!
//! Each sub-engine keeps at most one pending timer per elevator; arming a new
//! one cancels the old.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `serde`   | `Serialize`/`Deserialize` on snapshots and embedded types.  |
//! | `fx-hash` | FxHash for the per-elevator timer slot maps.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, CallDirection};
//! use lift_dispatch::NearestCar;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(BuildingConfig::default(), NearestCar).build()?;
//! let car = sim.call_elevator(4, CallDirection::Down)?;
//! sim.run_until_idle(10_000, &mut NoopObserver);
//! assert_eq!(sim.elevator(&car)?.current_floor, 4);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod router;
pub mod shared;
pub mod sim;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use engine::{DoorEngine, Engines, MotionEngine, StatusEngine, TimerSlots};
pub use error::{SimError, SimResult};
pub use observer::{EventRecorder, NoopObserver, SimObserver};
pub use router::{EventRouter, Handler};
pub use shared::{ClockHandle, SharedBuilding};
pub use sim::{CallOutcome, Sim};
pub use snapshot::{BuildingSnapshot, ElevatorSnapshot};
