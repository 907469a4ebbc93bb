//! `ElevatorRegistry`: the single owner of every elevator entity.
//!
//! Cars live in a `Vec` in creation order, with a parallel `Vec<ElevatorRng>`
//! for the fault draws and an id → slot index.  Keeping the RNGs beside the
//! entities (rather than inside them) lets [`ElevatorRegistry::machine`]
//! hand out `&mut Elevator` and `&mut ElevatorRng` for the same slot at once.

use std::collections::HashMap;

use lift_core::{ElevatorId, ElevatorRng, LiftError, LiftResult};

use crate::{Elevator, ElevatorMachine, EventSink};

pub struct ElevatorRegistry {
    cars:  Vec<Elevator>,
    rngs:  Vec<ElevatorRng>,
    index: HashMap<ElevatorId, usize>,
    seed:  u64,
}

impl ElevatorRegistry {
    /// An empty registry whose per-car RNGs derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            cars:  Vec::new(),
            rngs:  Vec::new(),
            index: HashMap::new(),
            seed,
        }
    }

    /// Add a car.  Its RNG is seeded from the registry seed and its slot.
    ///
    /// Fails with `LiftError::Config` if the id is already registered.
    pub fn register(&mut self, car: Elevator) -> LiftResult<()> {
        if self.index.contains_key(&car.id) {
            return Err(LiftError::Config(format!("duplicate elevator id {}", car.id)));
        }
        let slot = self.cars.len();
        self.index.insert(car.id.clone(), slot);
        self.rngs.push(ElevatorRng::new(self.seed, slot));
        self.cars.push(car);
        Ok(())
    }

    pub fn get(&self, id: &ElevatorId) -> LiftResult<&Elevator> {
        self.slot(id).map(|i| &self.cars[i])
    }

    pub fn get_mut(&mut self, id: &ElevatorId) -> LiftResult<&mut Elevator> {
        let i = self.slot(id)?;
        Ok(&mut self.cars[i])
    }

    /// All cars in creation order.
    #[inline]
    pub fn get_all(&self) -> &[Elevator] {
        &self.cars
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = &ElevatorId> + '_ {
        self.cars.iter().map(|c| &c.id)
    }

    /// Car at creation-order position `slot`.
    pub fn by_slot(&self, slot: usize) -> Option<&Elevator> {
        self.cars.get(slot)
    }

    /// A state machine bound to car `id`, emitting into `sink`.
    pub fn machine<'a, S: EventSink>(
        &'a mut self,
        id:   &ElevatorId,
        sink: &'a mut S,
    ) -> LiftResult<ElevatorMachine<'a, S>> {
        let i = self.slot(id)?;
        // Split borrow: cars and rngs are separate fields.
        let car = &mut self.cars[i];
        let rng = &mut self.rngs[i];
        Ok(ElevatorMachine::new(car, rng, sink))
    }

    fn slot(&self, id: &ElevatorId) -> LiftResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| LiftError::NotFound(id.clone()))
    }
}
