//! The per-car state machine.
//!
//! `ElevatorMachine` borrows one car, its RNG and an event sink for the
//! duration of a single request or timer callback.  Each method validates its
//! guard, mutates the car and emits one event per accepted transition.
//! Chained transitions (door closed → start moving, floor reached → reached
//! destination → start opening) run synchronously inside the same call.
//!
//! Guard failures come back as `LiftError::InvalidStateTransition` or
//! `LiftError::NotOperational`.  Idempotent calls (closing a closed door,
//! scheduling a floor that is already queued) return `Ok(())` and emit
//! nothing.

use lift_core::{
    Direction, DoorState, ElevatorId, ElevatorRng, Floor, LiftError, LiftResult, MotionState,
    Status,
};
use tracing::{debug, info};

use crate::{Elevator, ElevatorEvent, EventSink, sort_destinations};

/// Ground floor, where a car returns after maintenance.
const HOME_FLOOR: Floor = 0;

pub struct ElevatorMachine<'a, S: EventSink> {
    car:  &'a mut Elevator,
    rng:  &'a mut ElevatorRng,
    sink: &'a mut S,
}

impl<'a, S: EventSink> ElevatorMachine<'a, S> {
    pub fn new(car: &'a mut Elevator, rng: &'a mut ElevatorRng, sink: &'a mut S) -> Self {
        Self { car, rng, sink }
    }

    /// Read-only view of the bound car.
    #[inline]
    pub fn car(&self) -> &Elevator {
        self.car
    }

    #[inline]
    pub fn id(&self) -> &ElevatorId {
        &self.car.id
    }

    fn emit(&mut self, event: ElevatorEvent) {
        self.sink.emit(&self.car.id, event);
    }

    fn rejected(&self, reason: &'static str) -> LiftError {
        LiftError::InvalidStateTransition { elevator: self.car.id.clone(), reason }
    }

    // ── Request intake ────────────────────────────────────────────────────

    /// Accept a destination floor.
    ///
    /// The floor is inserted and the queue re-sorted for the car's current
    /// position and direction.  An idle car starts moving immediately; if its
    /// doors are not closed the floor stays queued and the move is rejected.
    pub fn schedule_car_request(&mut self, floor: Floor) -> LiftResult<()> {
        if self.car.status != Status::Active {
            return Err(LiftError::NotOperational(self.car.id.clone()));
        }
        if self.car.destination_floors.contains(&floor) {
            return Ok(());
        }

        self.car.destination_floors.push(floor);
        sort_destinations(
            &mut self.car.destination_floors,
            self.car.current_floor,
            self.car.direction,
        );
        debug!(elevator = %self.car.id, floor, queue = ?self.car.destination_floors, "destination scheduled");
        let queue = self.car.destination_floors.clone();
        self.emit(ElevatorEvent::DestinationScheduled { floor, queue });

        if self.car.motion_state == MotionState::Idle {
            self.start_moving()?;
        }
        Ok(())
    }

    // ── Door cycle ────────────────────────────────────────────────────────

    pub fn start_opening_door(&mut self) -> LiftResult<()> {
        if self.car.motion_state == MotionState::Moving {
            return Err(self.rejected("cannot open doors while moving"));
        }
        if !matches!(self.car.door_state, DoorState::Closed | DoorState::Closing) {
            return Err(self.rejected("doors are already open or opening"));
        }
        self.car.door_state = DoorState::Opening;
        self.emit(ElevatorEvent::DoorOpening);
        Ok(())
    }

    /// No-op unless the doors are `Opening`.
    pub fn complete_opening_door(&mut self) {
        if self.car.door_state != DoorState::Opening {
            return;
        }
        self.car.door_state = DoorState::Open;
        self.emit(ElevatorEvent::DoorOpened);
    }

    /// `Open → Closing`.  Already `Closing`/`Closed` is a silent no-op;
    /// `Opening` is rejected.
    pub fn start_closing_door(&mut self) -> LiftResult<()> {
        match self.car.door_state {
            DoorState::Open => {
                self.car.door_state = DoorState::Closing;
                self.emit(ElevatorEvent::DoorClosing);
                Ok(())
            }
            DoorState::Closing | DoorState::Closed => Ok(()),
            DoorState::Opening => Err(self.rejected("cannot close doors while they are opening")),
        }
    }

    /// No-op unless the doors are `Closing`.  Once closed, an `Active` car
    /// resumes its queue.
    pub fn complete_closing_door(&mut self) -> LiftResult<()> {
        if self.car.door_state != DoorState::Closing {
            return Ok(());
        }
        self.car.door_state = DoorState::Closed;
        self.emit(ElevatorEvent::DoorClosed);

        if self.car.status == Status::Active {
            self.start_moving()?;
        }
        Ok(())
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Begin (or continue) travel towards the head of the queue.
    ///
    /// Runs the fault check once per call.  A fault is not an `Err`: the car
    /// drops its queue, goes to `Status::Error` and emits `StatusError`.
    pub fn start_moving(&mut self) -> LiftResult<()> {
        if self.car.door_state != DoorState::Closed {
            return Err(self.rejected("cannot move while doors are not closed"));
        }
        if self.car.status != Status::Active {
            return Err(LiftError::NotOperational(self.car.id.clone()));
        }

        let Some(target) = self.car.next_destination() else {
            self.become_idle();
            return Ok(());
        };

        if self.rng.gen_bool(self.car.error_rate) {
            self.fault();
            return Ok(());
        }

        let direction = Direction::towards(self.car.current_floor, target);
        if direction == Direction::Idle {
            return self.reached_destination();
        }

        self.car.direction = direction;
        self.car.motion_state = MotionState::Moving;
        self.emit(ElevatorEvent::MotionMoving { direction });
        Ok(())
    }

    /// The car has travelled one floor.  No-op unless `Moving`.
    ///
    /// A car that left `Active` while in flight still completes the floor it
    /// was travelling, then parks there.
    pub fn reached_floor(&mut self) -> LiftResult<()> {
        if self.car.motion_state != MotionState::Moving {
            return Ok(());
        }
        self.car.current_floor += self.car.direction.step();
        let floor = self.car.current_floor;
        self.emit(ElevatorEvent::FloorReached { floor });

        if self.car.status != Status::Active {
            info!(elevator = %self.car.id, floor, status = %self.car.status, "parking out-of-service car");
            self.car.destination_floors.clear();
            self.become_idle();
            return Ok(());
        }

        if self.car.next_destination() == Some(floor) {
            self.reached_destination()
        } else {
            self.start_moving()
        }
    }

    fn reached_destination(&mut self) -> LiftResult<()> {
        self.car.motion_state = MotionState::Stopped;
        self.emit(ElevatorEvent::MotionStopped);

        if !self.car.destination_floors.is_empty() {
            let floor = self.car.destination_floors.remove(0);
            self.emit(ElevatorEvent::DestinationReached { floor });
        }
        self.start_opening_door()
    }

    fn become_idle(&mut self) {
        self.car.motion_state = MotionState::Idle;
        self.car.direction = Direction::Idle;
        self.emit(ElevatorEvent::MotionIdle);
    }

    fn fault(&mut self) {
        info!(elevator = %self.car.id, floor = self.car.current_floor, "fault on move attempt");
        self.car.destination_floors.clear();
        self.car.motion_state = MotionState::Idle;
        self.car.direction = Direction::Idle;
        self.car.door_state = DoorState::Closed;
        self.car.status = Status::Error;
        self.emit(ElevatorEvent::StatusError);
    }

    // ── Maintenance ───────────────────────────────────────────────────────

    /// Take the car out of service.  Accepted in any state; in-flight door or
    /// motion continuations still run to completion.
    pub fn start_maintenance(&mut self) {
        self.car.status = Status::Maintenance;
        self.emit(ElevatorEvent::StatusMaintenance);
    }

    /// Return the car to service with a single trip to the ground floor.
    ///
    /// Motion starts here only if the doors are closed and the car is not
    /// already moving; otherwise the pending continuation picks up the queue.
    pub fn complete_maintenance(&mut self) -> LiftResult<()> {
        self.car.destination_floors = vec![HOME_FLOOR];
        self.car.status = Status::Active;
        self.emit(ElevatorEvent::StatusActive);

        if self.car.door_state == DoorState::Closed
            && self.car.motion_state != MotionState::Moving
        {
            self.start_moving()?;
        }
        Ok(())
    }
}
