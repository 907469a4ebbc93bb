//! `lift-core`: foundational types for the lift building simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `uuid`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `IdStrategy`, `AlphabeticIds`, `UuidIds`    |
//! | [`floor`]       | `Floor`, `FloorRange`, `floor_label`                      |
//! | [`state`]       | `Direction`, `CallDirection`, `DoorState`, `MotionState`, `Status` |
//! | [`time`]        | `Tick`, `SimClock`                                        |
//! | [`rng`]         | `ElevatorRng` (per-elevator), `SimRng` (global)           |
//! | [`config`]      | `BuildingConfig`, `IdScheme`                              |
//! | [`error`]       | `LiftError`, `LiftResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (snapshots,   |
//! |         | JSON config files).                                        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, IdScheme};
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, FloorRange, floor_label};
pub use ids::{AlphabeticIds, ElevatorId, IdStrategy, UuidIds};
pub use rng::{ElevatorRng, SimRng};
pub use state::{CallDirection, Direction, DoorState, MotionState, Status};
pub use time::{SimClock, Tick};
