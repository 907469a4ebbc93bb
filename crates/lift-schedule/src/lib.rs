//! `lift-schedule`: timers and scripted call plans.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`timer`]    | `TimerQueue`, `Timer`, `TimerAction`, `TimerId`, `Concern` |
//! | [`script`]   | `Call`, `ScriptedCall`, `CallPlan`                         |
//! | [`loader`]   | `load_plan_csv`, `load_plan_reader`                        |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Timer model (summary)
//!
//! Every pending continuation of an elevator (arrive at the next floor, finish
//! opening, start closing, …) is a `Timer` due at some future tick:
//!
//! ```text
//! schedule(due, timer)  -> TimerId        O(log n)
//! cancel(id)            -> bool           O(log n)
//! pop_due(now)          -> Vec<Timer>     earliest first, FIFO within a tick
//! ```
//!
//! The queue does not enforce "one timer per concern"; the simulation's
//! sub-engines do that by cancelling their previous `TimerId` before
//! scheduling a new one.

pub mod error;
pub mod loader;
pub mod script;
pub mod timer;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_plan_csv, load_plan_reader};
pub use script::{Call, CallPlan, ScriptedCall};
pub use timer::{Concern, Timer, TimerAction, TimerId, TimerQueue};
