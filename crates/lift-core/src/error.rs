//! Request-boundary error taxonomy.
//!
//! Every failure a caller can observe synchronously is one of these variants.
//! Sub-crates with their own failure modes (script parsing, output I/O) keep
//! separate enums and wrap `LiftError` as one variant where needed.
//!
//! A stochastic fault is *not* an error: it is a state transition to
//! `Status::Error` and is reported through the event stream.

use thiserror::Error;

use crate::{ElevatorId, Floor};

/// The error type returned by state-machine operations and request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiftError {
    /// A transition guard failed (e.g. opening the doors while moving).
    #[error("invalid state transition for elevator {elevator}: {reason}")]
    InvalidStateTransition {
        elevator: ElevatorId,
        reason:   &'static str,
    },

    /// The elevator is in `Error` or `Maintenance` and refuses new work.
    #[error("elevator {0} is not operational")]
    NotOperational(ElevatorId),

    #[error("elevator {0} not found")]
    NotFound(ElevatorId),

    #[error("floor {floor} is outside the building range {min}..={max}")]
    InvalidFloor {
        floor: Floor,
        min:   Floor,
        max:   Floor,
    },

    /// The dispatcher found no `Active` elevator for a hall call.
    #[error("no active elevators available")]
    NoElevatorsAvailable,

    #[error("configuration error: {0}")]
    Config(String),
}

impl LiftError {
    /// Stable machine-readable code, for transport layers that map errors
    /// onto status codes.
    pub fn code(&self) -> &'static str {
        match self {
            LiftError::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            LiftError::NotOperational(_)            => "NOT_OPERATIONAL",
            LiftError::NotFound(_)                  => "NOT_FOUND",
            LiftError::InvalidFloor { .. }          => "INVALID_FLOOR",
            LiftError::NoElevatorsAvailable         => "NO_ELEVATORS_AVAILABLE",
            LiftError::Config(_)                    => "CONFIG",
        }
    }
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
