//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SnapshotRow};

pub const EVENT_HEADERS: [&str; 7] =
    ["seq", "tick", "elapsed_ms", "elevator", "event", "floor", "detail"];

pub const SNAPSHOT_HEADERS: [&str; 9] = [
    "tick",
    "elapsed_ms",
    "elevator",
    "floor",
    "direction",
    "door_state",
    "motion_state",
    "status",
    "destinations",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (and `dir` itself if missing) and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        Ok(Self {
            events,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.seq.to_string(),
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.elevator.clone(),
            row.event.to_owned(),
            row.floor.map(|f| f.to_string()).unwrap_or_default(),
            row.detail.clone(),
        ])?;
        Ok(())
    }

    fn write_snapshot(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elapsed_ms.to_string(),
                row.elevator.clone(),
                row.floor.to_string(),
                row.direction.to_owned(),
                row.door_state.to_owned(),
                row.motion_state.to_owned(),
                row.status.to_owned(),
                row.destinations.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
