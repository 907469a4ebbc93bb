//! CSV call-plan loader.
//!
//! # CSV format
//!
//! One row per external request.  Columns that do not apply to a kind are
//! left empty.
//!
//! ```csv
//! at_ms,kind,elevator,floor,direction
//! 0,hall,,3,up
//! 500,car,A,5,
//! 9000,open,B,,
//! 9200,close,B,,
//! 12000,maintenance,A,,
//! ```
//!
//! | `kind`        | Required columns       |
//! |---------------|------------------------|
//! | `hall`        | `floor`, `direction`   |
//! | `car`         | `elevator`, `floor`    |
//! | `open`        | `elevator`             |
//! | `close`       | `elevator`             |
//! | `maintenance` | `elevator`             |
//!
//! Rows need not be time-sorted; the resulting [`CallPlan`] is.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{CallDirection, ElevatorId, Floor};

use crate::{Call, CallPlan, ScheduleError, ScriptedCall};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    at_ms:     u64,
    kind:      String,
    elevator:  Option<String>,
    floor:     Option<Floor>,
    direction: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a call plan from a CSV file.
pub fn load_plan_csv(path: &Path) -> Result<CallPlan, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_plan_reader(file)
}

/// Like [`load_plan_csv`] but accepts any `Read` source.
pub fn load_plan_reader<R: Read>(reader: R) -> Result<CallPlan, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut calls = Vec::new();
    for (line, result) in csv_reader.deserialize::<CallRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        // +2: one for the header, one for 1-based numbering.
        let call = parse_call(row.kind.as_str(), &row)
            .map_err(|msg| ScheduleError::Parse(format!("row {}: {msg}", line + 2)))?;
        calls.push(ScriptedCall { at_ms: row.at_ms, call });
    }

    Ok(CallPlan::new(calls))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_call(kind: &str, row: &CallRecord) -> Result<Call, String> {
    match kind.to_ascii_lowercase().as_str() {
        "hall" => Ok(Call::Hall {
            floor:     require_floor(row)?,
            direction: require_direction(row)?,
        }),
        "car" => Ok(Call::Car {
            elevator: require_elevator(row)?,
            floor:    require_floor(row)?,
        }),
        "open"        => Ok(Call::OpenDoor { elevator: require_elevator(row)? }),
        "close"       => Ok(Call::CloseDoor { elevator: require_elevator(row)? }),
        "maintenance" => Ok(Call::Maintenance { elevator: require_elevator(row)? }),
        other => Err(format!(
            "invalid kind {other:?}: expected hall, car, open, close or maintenance"
        )),
    }
}

fn require_floor(row: &CallRecord) -> Result<Floor, String> {
    row.floor.ok_or_else(|| format!("{} call needs a floor", row.kind))
}

fn require_elevator(row: &CallRecord) -> Result<ElevatorId, String> {
    match row.elevator.as_deref() {
        Some(id) if !id.is_empty() => Ok(ElevatorId::from(id)),
        _ => Err(format!("{} call needs an elevator", row.kind)),
    }
}

fn require_direction(row: &CallRecord) -> Result<CallDirection, String> {
    match row.direction.as_deref() {
        Some(d) if !d.is_empty() => d.parse(),
        _ => Err(format!("{} call needs a direction", row.kind)),
    }
}
