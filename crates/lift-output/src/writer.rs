//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, SnapshotRow};

/// A sink for the event log and periodic building snapshots.
///
/// Errors are stored by the observer and retrieved with
/// [`EventLogObserver::take_error`][crate::EventLogObserver::take_error].
pub trait OutputWriter {
    /// Append one event to the log.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write one row per elevator for a snapshot.
    fn write_snapshot(&mut self, rows: &[SnapshotRow]) -> OutputResult<()>;

    /// Flush all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
