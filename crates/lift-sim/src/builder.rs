//! Fluent builder for constructing a [`Sim`].

use lift_car::{EventBus, RegistryBuilder};
use lift_core::{BuildingConfig, IdStrategy, SimClock};
use lift_dispatch::DispatchPolicy;
use lift_schedule::TimerQueue;
use tracing::info;

use crate::{Engines, EventRouter, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`BuildingConfig`]: fleet size, floors, durations, error rate, seed
/// - `P: DispatchPolicy`: the hall-call policy (e.g. [`lift_dispatch::NearestCar`])
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                              |
/// |---------------------------|--------------------------------------|
/// | `.id_strategy(s)`         | from `config.id_scheme`              |
/// | `.router(r)`              | `EventRouter::standard()`            |
/// | `.snapshot_interval(n)`   | `0` (no periodic snapshots)          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(BuildingConfig::default(), NearestCar)
///     .snapshot_interval(10)
///     .build()?;
/// let car = sim.call_elevator(3, CallDirection::Up)?;
/// sim.run_until_idle(1_000, &mut NoopObserver);
/// ```
pub struct SimBuilder<P: DispatchPolicy> {
    config:            BuildingConfig,
    policy:            P,
    ids:               Option<Box<dyn IdStrategy>>,
    router:            Option<EventRouter>,
    snapshot_interval: u64,
}

impl<P: DispatchPolicy> SimBuilder<P> {
    pub fn new(config: BuildingConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            ids:               None,
            router:            None,
            snapshot_interval: 0,
        }
    }

    /// Override the id scheme selected in the config.
    pub fn id_strategy(mut self, ids: Box<dyn IdStrategy>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Replace the standard event routing table.
    pub fn router(mut self, router: EventRouter) -> Self {
        self.router = Some(router);
        self
    }

    /// Call `SimObserver::on_snapshot` every `n` ticks.  `0` disables it.
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the config, create the fleet and wire the engines.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let config = self.config;
        let ids = self
            .ids
            .unwrap_or_else(|| config.id_scheme.strategy(config.seed));

        let registry = RegistryBuilder::new(config.elevator_count, config.seed)
            .error_rate(config.error_rate)
            .id_strategy(ids)
            .build()?;

        let clock = SimClock::new(config.tick_ms);
        let engines = Engines::new(&config, &clock);
        let floors = config.floor_range();

        info!(
            elevators = registry.size(),
            floors = floors.len(),
            min_floor = floors.min,
            max_floor = floors.max,
            tick_ms = config.tick_ms,
            "building ready"
        );

        Ok(Sim {
            clock,
            floors,
            registry,
            timers:            TimerQueue::new(),
            bus:               EventBus::new(),
            engines,
            router:            self.router.unwrap_or_else(EventRouter::standard),
            policy:            self.policy,
            journal:           Vec::new(),
            snapshot_interval: self.snapshot_interval,
            config,
        })
    }
}
