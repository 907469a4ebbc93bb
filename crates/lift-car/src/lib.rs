//! `lift-car`: the elevator entity and everything that mutates it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`elevator`]  | `Elevator` (the passive entity record)                       |
//! | [`registry`]  | `ElevatorRegistry` (entities + parallel per-car RNGs)        |
//! | [`builder`]   | `RegistryBuilder` (fluent fleet construction)                |
//! | [`queue`]     | `sort_destinations` (SCAN ordering)                          |
//! | [`event`]     | `ElevatorEvent`, `EventKind`, `Envelope`, `EventSink`        |
//! | [`bus`]       | `EventBus` (in-process queue + external subscribers)         |
//! | [`machine`]   | `ElevatorMachine` (transition guards, mutation, emission)    |
//!
//! The state machine never touches timers or the clock.  It mutates one
//! `Elevator` and pushes events into an [`EventSink`]; the simulation engine
//! turns those events into timers.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on entity and events.  |

pub mod builder;
pub mod bus;
pub mod elevator;
pub mod event;
pub mod machine;
pub mod queue;
pub mod registry;


pub use builder::RegistryBuilder;
pub use bus::EventBus;
pub use elevator::Elevator;
pub use event::{ElevatorEvent, Envelope, EventKind, EventSink};
pub use machine::ElevatorMachine;
pub use queue::sort_destinations;
pub use registry::ElevatorRegistry;
