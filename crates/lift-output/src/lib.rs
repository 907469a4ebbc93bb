//! `lift-output`: simulation output writers for the lift building simulator.
//!
//! | Backend | Files created                      |
//! |---------|------------------------------------|
//! | CSV     | `events.csv`, `snapshots.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`EventLogObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, EventLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EventLogObserver::new(writer, &config);
//! let outcomes = sim.run_plan(&plan, 10_000, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{EventRow, SnapshotRow};
pub use writer::OutputWriter;
