//! `TimerQueue`: cancellable, tick-ordered continuation queue.
//!
//! Keys are `(due_tick, TimerId)`.  Ids are handed out in strictly increasing
//! order, so two timers due on the same tick fire in the order they were
//! scheduled.  A side index `TimerId → due_tick` makes `cancel` a direct
//! removal instead of a scan.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use lift_core::{ElevatorId, Tick};

// ── Timer ─────────────────────────────────────────────────────────────────────

/// Handle returned by [`TimerQueue::schedule`], used to cancel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Which sub-engine owns a timer.  At most one timer per (elevator, concern)
/// is pending at any time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Concern {
    Motion,
    Door,
    Status,
}

/// The state-machine call a timer makes when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerAction {
    /// One floor travelled → `reached_floor`.
    ReachFloor,
    /// Doors fully open → `complete_opening_door`.
    CompleteOpening,
    /// Hold time over → `start_closing_door`.
    StartClosing,
    /// Doors fully closed → `complete_closing_door`.
    CompleteClosing,
    /// Repair done → `complete_maintenance`.
    CompleteMaintenance,
}

impl TimerAction {
    pub fn concern(self) -> Concern {
        match self {
            TimerAction::ReachFloor => Concern::Motion,
            TimerAction::CompleteOpening
            | TimerAction::StartClosing
            | TimerAction::CompleteClosing => Concern::Door,
            TimerAction::CompleteMaintenance => Concern::Status,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimerAction::ReachFloor          => "reach_floor",
            TimerAction::CompleteOpening     => "complete_opening",
            TimerAction::StartClosing        => "start_closing",
            TimerAction::CompleteClosing     => "complete_closing",
            TimerAction::CompleteMaintenance => "complete_maintenance",
        }
    }
}

impl fmt::Display for TimerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    pub elevator: ElevatorId,
    pub action:   TimerAction,
}

impl Timer {
    pub fn new(elevator: ElevatorId, action: TimerAction) -> Self {
        Self { elevator, action }
    }
}

// ── TimerQueue ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct TimerQueue {
    inner:   BTreeMap<(Tick, TimerId), Timer>,
    due_of:  HashMap<TimerId, Tick>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `timer` to fire at `due`.
    pub fn schedule(&mut self, due: Tick, timer: Timer) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.inner.insert((due, id), timer);
        self.due_of.insert(id, due);
        id
    }

    /// Disarm a pending timer.  Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_of.remove(&id) {
            Some(due) => self.inner.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    /// `true` if `id` is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_of.contains_key(&id)
    }

    /// Remove and return every timer due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Tick) -> Vec<(TimerId, Timer)> {
        let mut fired = Vec::new();
        while let Some(entry) = self.inner.first_entry() {
            let (due, id) = *entry.key();
            if due > now {
                break;
            }
            let timer = entry.remove();
            self.due_of.remove(&id);
            fired.push((id, timer));
        }
        fired
    }

    /// The earliest tick with a pending timer, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().map(|(tick, _)| *tick)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pending timers in firing order, for inspection.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, TimerId, &Timer)> + '_ {
        self.inner.iter().map(|((tick, id), t)| (*tick, *id, t))
    }
}
