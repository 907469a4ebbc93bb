//! Destination ordering.
//!
//! SCAN: the current sweep is exhausted before the car reverses.
//!
//! | Direction | Order                                                        |
//! |-----------|--------------------------------------------------------------|
//! | `Idle`    | nearest first; equal distances keep their insertion order    |
//! | `Up`      | floors `>= current` ascending, then floors `< current` descending |
//! | `Down`    | floors `< current` descending, then floors `>= current` ascending |
//!
//! Note the asymmetry: the current floor itself belongs to the "up side" in
//! both sweeps.

use lift_core::{Direction, Floor};

/// Reorder `floors` in place for a car at `current` travelling `direction`.
pub fn sort_destinations(floors: &mut [Floor], current: Floor, direction: Direction) {
    match direction {
        Direction::Idle => {
            // slice::sort_by_key is stable.
            floors.sort_by_key(|f| f.abs_diff(current));
        }
        Direction::Up => {
            floors.sort_by_key(|&f| {
                if f >= current { (0, f) } else { (1, -f) }
            });
        }
        Direction::Down => {
            floors.sort_by_key(|&f| {
                if f < current { (0, -f) } else { (1, f) }
            });
        }
    }
}
