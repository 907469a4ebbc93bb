//! `lift-dispatch`: assigning hall calls to elevators.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`request`]  | `HallRequest`                                                 |
//! | [`policy`]   | `DispatchPolicy` trait, `assign_elevator_to_hall_request`     |
//! | [`nearest`]  | `NearestCar` (direction-aware nearest-car scoring), `Score`   |
//!
//! # Design notes
//!
//! A policy only *reads* the fleet and returns the index of the chosen car.
//! `assign_elevator_to_hall_request` then issues exactly one mutating call,
//! `schedule_car_request`, to that car.  Policies therefore hold no mutable
//! state and never touch more than one elevator per hall call.

pub mod nearest;
pub mod policy;
pub mod request;


pub use nearest::{Approach, NearestCar, REVERSAL_PENALTY, Score};
pub use policy::{DispatchPolicy, assign_elevator_to_hall_request};
pub use request::HallRequest;
