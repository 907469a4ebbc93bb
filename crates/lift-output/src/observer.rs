//! `EventLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_car::Envelope;
use lift_core::{BuildingConfig, Tick};
use lift_sim::{BuildingSnapshot, SimObserver};

use crate::row::{EventRow, SnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every event and every periodic snapshot to
/// an [`OutputWriter`] backend.
///
/// `SimObserver` methods have no return value, so the first write error is
/// kept and later writes still go through.  Check it with
/// [`take_error`][Self::take_error] once the run returns.
pub struct EventLogObserver<W: OutputWriter> {
    writer:     W,
    tick_ms:    u64,
    events:     u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    pub fn new(writer: W, config: &BuildingConfig) -> Self {
        Self {
            writer,
            tick_ms:    config.tick_ms,
            events:     0,
            last_error: None,
        }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Events seen so far.
    pub fn event_count(&self) -> u64 {
        self.events
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for EventLogObserver<W> {
    fn on_event(&mut self, envelope: &Envelope) {
        self.events += 1;
        let row = EventRow::from_envelope(envelope, self.tick_ms);
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &BuildingSnapshot) {
        let rows: Vec<SnapshotRow> = snapshot
            .elevators
            .iter()
            .map(|car| SnapshotRow::new(tick.0, snapshot.elapsed_ms, car))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshot(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
