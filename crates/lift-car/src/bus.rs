//! In-process event bus.
//!
//! The bus does two things with every emitted event:
//!
//! 1. Wraps it in an [`Envelope`] (sequence number + current tick) and queues
//!    it for the simulation's router, which drains the queue with
//!    [`EventBus::pop`] in emission order.
//! 2. Sends a copy to every external subscriber (unbounded `crossbeam_channel`).
//!    Subscribers whose receiver has been dropped are pruned on the next emit.

use std::collections::VecDeque;

use crossbeam_channel::{Receiver, Sender, unbounded};
use lift_core::{ElevatorId, Tick};

use crate::{ElevatorEvent, Envelope, EventSink};

#[derive(Default)]
pub struct EventBus {
    pending:     VecDeque<Envelope>,
    next_seq:    u64,
    now:         Tick,
    subscribers: Vec<Sender<Envelope>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp subsequent envelopes with `tick`.
    #[inline]
    pub fn set_time(&mut self, tick: Tick) {
        self.now = tick;
    }

    /// Register an external observer.  Every envelope emitted after this call
    /// is delivered to the returned receiver.
    pub fn subscribe(&mut self) -> Receiver<Envelope> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Next envelope awaiting routing, in emission order.
    #[inline]
    pub fn pop(&mut self) -> Option<Envelope> {
        self.pending.pop_front()
    }

    /// Total number of events emitted so far.
    pub fn emitted(&self) -> u64 {
        self.next_seq
    }
}

impl EventSink for EventBus {
    fn emit(&mut self, elevator: &ElevatorId, event: ElevatorEvent) {
        let envelope = Envelope {
            seq: self.next_seq,
            tick: self.now,
            elevator: elevator.clone(),
            event,
        };
        self.next_seq += 1;

        self.subscribers.retain(|tx| tx.send(envelope.clone()).is_ok());
        self.pending.push_back(envelope);
    }
}
