//! Direction-aware nearest-car scoring.
//!
//! Lower score is better.  For a car at `cur` and a call at `req`:
//!
//! | Situation                                               | Score                          |
//! |---------------------------------------------------------|--------------------------------|
//! | car idle, or travelling the call's way with `req` ahead  | `abs(req - cur)`               |
//! | `req` behind the car's direction of travel              | `abs(far - cur) + abs(req - far)` |
//! | otherwise (`req` ahead but the call points the other way)| same two legs + `REVERSAL_PENALTY` |
//!
//! `far` is the queued stop furthest along the car's direction (see
//! [`Elevator::furthest_destination`]).  O(n) per call; the first car with the
//! lowest score wins.

use std::fmt;

use lift_car::Elevator;
use lift_core::{CallDirection, Direction, Floor};
use tracing::debug;

use crate::{DispatchPolicy, HallRequest};

/// Added to the two-leg distance when serving the call means a reversal.
pub const REVERSAL_PENALTY: u32 = 100;

/// How a car would reach the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Approach {
    /// Straight there: idle, or already heading that way.
    Direct,
    /// Finish the current sweep, then come back.
    SweepFirst,
    /// Finish the sweep and reverse against the call's direction.
    Reversal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub value:    u32,
    pub approach: Approach,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.value, self.approach)
    }
}

/// The default [`DispatchPolicy`].
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestCar;

impl NearestCar {
    pub fn score(car: &Elevator, request: &HallRequest) -> Score {
        let cur = car.current_floor;
        let req = request.floor;

        if car.direction == Direction::Idle || heading_towards(car.direction, request, cur) {
            return Score { value: distance(req, cur), approach: Approach::Direct };
        }

        let far = car.furthest_destination();
        let legs = distance(far, cur) + distance(req, far);

        let behind = match car.direction {
            Direction::Up   => req < cur,
            Direction::Down => req > cur,
            Direction::Idle => false,
        };
        if behind {
            Score { value: legs, approach: Approach::SweepFirst }
        } else {
            Score { value: legs + REVERSAL_PENALTY, approach: Approach::Reversal }
        }
    }
}

impl DispatchPolicy for NearestCar {
    fn select(&self, request: &HallRequest, cars: &[Elevator]) -> Option<usize> {
        let mut best: Option<(usize, Score)> = None;
        for (slot, car) in cars.iter().enumerate().filter(|(_, c)| c.is_active()) {
            let score = Self::score(car, request);
            debug!(elevator = %car.id, score = score.value, approach = ?score.approach, "candidate");
            // Strict `<`: the first car with the lowest score keeps the call.
            if best.is_none_or(|(_, b)| score.value < b.value) {
                best = Some((slot, score));
            }
        }
        best.map(|(slot, _)| slot)
    }

    fn name(&self) -> &'static str {
        "nearest-car"
    }
}

/// Car travelling the same way as the call, with the call floor at or ahead.
fn heading_towards(direction: Direction, request: &HallRequest, cur: Floor) -> bool {
    match (direction, request.direction) {
        (Direction::Up, CallDirection::Up)     => request.floor >= cur,
        (Direction::Down, CallDirection::Down) => request.floor <= cur,
        _ => false,
    }
}

#[inline]
fn distance(a: Floor, b: Floor) -> u32 {
    a.abs_diff(b)
}
