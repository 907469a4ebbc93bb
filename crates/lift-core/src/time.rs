//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  `SimClock` holds the
//! mapping to simulated milliseconds:
//!
//!   elapsed_ms = tick * tick_ms
//!
//! Integer ticks keep timer arithmetic exact and make same-tick ordering a
//! plain comparison.  Configured durations (floor travel, door motion, …) are
//! converted to ticks once, rounding up, so a continuation never fires early.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated milliseconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated milliseconds one tick represents.
    pub tick_ms: u64,
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.  A zero
    /// resolution is treated as 1 ms.
    pub fn new(tick_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            current_tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.ms_at(self.current_tick)
    }

    /// Simulated milliseconds at `tick`.
    #[inline]
    pub fn ms_at(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_ms
    }

    /// How many ticks span `ms` milliseconds?  Rounds up, minimum one tick,
    /// so a timer armed now never fires in the current tick.
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.tick_ms).max(1)
    }

    /// The first tick at or after simulated time `ms`.
    #[inline]
    pub fn tick_at_ms(&self, ms: u64) -> Tick {
        Tick(ms.div_ceil(self.tick_ms))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        write!(f, "{} ({}.{:03}s)", self.current_tick, ms / 1_000, ms % 1_000)
    }
}
