//! Fluent builder for a fully populated [`ElevatorRegistry`].
//!
//! ```rust
//! use lift_car::RegistryBuilder;
//!
//! let registry = RegistryBuilder::new(3, /*seed=*/ 42)
//!     .error_rate(0.0)
//!     .build()
//!     .unwrap();
//!
//! let ids: Vec<&str> = registry.ids().map(|id| id.as_str()).collect();
//! assert_eq!(ids, ["A", "B", "C"]);
//! ```

use lift_core::{AlphabeticIds, IdStrategy, LiftResult};

use crate::{Elevator, ElevatorRegistry};

/// Creates `count` cars at the ground floor, doors closed, `Active`.
pub struct RegistryBuilder {
    count:      usize,
    seed:       u64,
    error_rate: f64,
    ids:        Box<dyn IdStrategy>,
}

impl RegistryBuilder {
    /// Builder for `count` cars whose fault RNGs derive from `seed`.
    ///
    /// Defaults: alphabetic ids, error rate 0.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            error_rate: 0.0,
            ids: Box::new(AlphabeticIds::new()),
        }
    }

    /// Fault probability applied to every car.
    pub fn error_rate(mut self, rate: f64) -> Self {
        self.error_rate = rate;
        self
    }

    /// Replace the id strategy.
    pub fn id_strategy(mut self, ids: Box<dyn IdStrategy>) -> Self {
        self.ids = ids;
        self
    }

    /// Mint ids in order and register every car.
    ///
    /// Fails only if the strategy mints a duplicate id.
    pub fn build(mut self) -> LiftResult<ElevatorRegistry> {
        let mut registry = ElevatorRegistry::new(self.seed);
        for _ in 0..self.count {
            let id = self.ids.next_id();
            registry.register(Elevator::new(id, self.error_rate))?;
        }
        Ok(registry)
    }
}
