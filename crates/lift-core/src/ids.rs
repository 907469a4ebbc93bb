//! Elevator identity and pluggable ID strategies.
//!
//! An `ElevatorId` is a short string that stays stable for the process
//! lifetime.  How it is minted is a configuration choice:
//!
//! | Strategy          | Output                       | Deterministic |
//! |-------------------|------------------------------|---------------|
//! | [`AlphabeticIds`] | `A`, `B`, … `Z`, `AA`, `AB`… | yes           |
//! | [`UuidIds`]       | random UUID v4               | per seed      |
//!
//! `UuidIds` draws its random bytes from a seeded [`SimRng`], so two runs
//! with the same seed produce the same UUIDs.

use std::fmt;

use crate::SimRng;

// ── ElevatorId ────────────────────────────────────────────────────────────────

/// Identifier of one elevator car.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ElevatorId(pub String);

impl ElevatorId {
    pub fn new(id: impl Into<String>) -> Self {
        ElevatorId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElevatorId {
    fn from(s: &str) -> Self {
        ElevatorId(s.to_owned())
    }
}

// ── IdStrategy ────────────────────────────────────────────────────────────────

/// Mints identifiers for newly created elevators.
///
/// Called once per elevator at building initialization, in creation order.
pub trait IdStrategy: Send {
    fn next_id(&mut self) -> ElevatorId;
}

/// Bijective base-26 letter IDs: `A`…`Z`, then `AA`, `AB`, …, `AZ`, `BA`, …
#[derive(Debug, Default, Clone)]
pub struct AlphabeticIds {
    counter: u64,
}

impl AlphabeticIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// The letter ID for the `n`-th elevator (0-based).
    pub fn encode(n: u64) -> String {
        let mut letters = Vec::new();
        let mut num = n + 1;
        while num > 0 {
            num -= 1;
            letters.push(b'A' + (num % 26) as u8);
            num /= 26;
        }
        letters.reverse();
        String::from_utf8(letters).unwrap_or_default()
    }
}

impl IdStrategy for AlphabeticIds {
    fn next_id(&mut self) -> ElevatorId {
        let id = Self::encode(self.counter);
        self.counter += 1;
        ElevatorId(id)
    }
}

/// Random UUID v4 IDs drawn from a seeded RNG.
pub struct UuidIds {
    rng: SimRng,
}

impl UuidIds {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }
}

impl IdStrategy for UuidIds {
    fn next_id(&mut self) -> ElevatorId {
        let bytes: [u8; 16] = self.rng.random();
        let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
        ElevatorId(uuid.hyphenated().to_string())
    }
}
