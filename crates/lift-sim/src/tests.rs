//! Integration tests for lift-sim.
//!
//! Timing config used throughout (100 ms ticks): travel 2 ticks per floor,
//! doors 1 tick each way, hold 3 ticks, maintenance 5 ticks.

use lift_car::EventKind;
use lift_core::{
    BuildingConfig, DoorState, ElevatorId, IdScheme, LiftError, MotionState, Status, Tick,
};
use lift_dispatch::NearestCar;

use crate::{EventRecorder, NoopObserver, Sim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(elevators: usize, error_rate: f64) -> BuildingConfig {
    BuildingConfig {
        elevator_count:          elevators,
        underground_floors:      2,
        above_ground_floors:     5,
        floor_travel_time_ms:    200,
        door_open_close_time_ms: 100,
        door_hold_time_ms:       300,
        error_rate,
        maintenance_fix_time_ms: 500,
        tick_ms:                 100,
        seed:                    42,
        id_scheme:               IdScheme::Alphabetic,
    }
}

fn building(elevators: usize) -> Sim<NearestCar> {
    SimBuilder::new(test_config(elevators, 0.0), NearestCar)
        .build()
        .unwrap()
}

fn a() -> ElevatorId {
    ElevatorId::from("A")
}

fn b() -> ElevatorId {
    ElevatorId::from("B")
}

fn kinds_for(rec: &EventRecorder, id: &ElevatorId) -> Vec<EventKind> {
    rec.events
        .iter()
        .filter(|e| &e.elevator == id)
        .map(|e| e.kind())
        .collect()
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_fleet_at_ground_floor() {
        let sim = building(3);
        let ids: Vec<_> = sim.elevators().iter().map(|e| e.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
        for car in sim.elevators() {
            assert_eq!(car.current_floor, 0);
            assert_eq!(car.status, Status::Active);
            assert_eq!(car.door_state, DoorState::Closed);
            assert_eq!(car.motion_state, MotionState::Idle);
        }
        assert_eq!(sim.now(), Tick(0));
        assert!(sim.is_idle());
    }

    #[test]
    fn durations_convert_to_ticks() {
        let sim = building(1);
        assert_eq!(sim.engines.motion.travel_ticks, 2);
        assert_eq!(sim.engines.door.open_close_ticks, 1);
        assert_eq!(sim.engines.door.hold_ticks, 3);
        assert_eq!(sim.engines.status.fix_ticks, 5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = test_config(0, 0.0);
        assert!(SimBuilder::new(cfg.clone(), NearestCar).build().is_err());
        cfg.elevator_count = 2;
        cfg.error_rate = 1.5;
        assert!(SimBuilder::new(cfg.clone(), NearestCar).build().is_err());
        cfg.error_rate = 0.0;
        cfg.floor_travel_time_ms = 50;
        assert!(SimBuilder::new(cfg, NearestCar).build().is_err());
    }

    #[test]
    fn uuid_scheme_gives_unique_ids() {
        let mut cfg = test_config(4, 0.0);
        cfg.id_scheme = IdScheme::Uuid;
        let sim = SimBuilder::new(cfg, NearestCar).build().unwrap();
        let mut ids: Vec<_> = sim.elevators().iter().map(|e| e.id.clone()).collect();
        ids.sort_by(|x, y| x.as_str().cmp(y.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0].as_str().len(), 36);
    }

    #[test]
    fn standard_router_wiring() {
        let sim = building(1);
        assert_eq!(sim.router.handler_count(EventKind::MotionMoving), 1);
        assert_eq!(sim.router.handler_count(EventKind::DoorClosed), 1);
        assert_eq!(sim.router.handler_count(EventKind::StatusMaintenance), 1);
        assert_eq!(sim.router.handler_count(EventKind::FloorReached), 0);
        assert_eq!(sim.router.handler_count(EventKind::StatusError), 0);
    }
}

// ── Rides ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ride_tests {
    use super::*;

    #[test]
    fn full_ride_event_sequence() {
        let mut sim = building(1);
        let mut rec = EventRecorder::default();
        sim.schedule_car_request(&a(), 3).unwrap();
        assert!(sim.run_until_idle(100, &mut rec));

        use EventKind::*;
        assert_eq!(
            kinds_for(&rec, &a()),
            [
                DestinationScheduled,
                MotionMoving,
                FloorReached,
                MotionMoving,
                FloorReached,
                MotionMoving,
                FloorReached,
                MotionStopped,
                DestinationReached,
                DoorOpening,
                DoorOpened,
                DoorClosing,
                DoorClosed,
                MotionIdle,
            ]
        );

        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.current_floor, 3);
        assert_eq!(car.door_state, DoorState::Closed);
        assert_eq!(car.motion_state, MotionState::Idle);
        assert!(car.destination_floors.is_empty());
    }

    #[test]
    fn arrival_timing_follows_durations() {
        let mut sim = building(1);
        let mut rec = EventRecorder::default();
        sim.schedule_car_request(&a(), 3).unwrap();
        sim.run_until_idle(100, &mut rec);

        let at = |kind: EventKind| {
            rec.events.iter().find(|e| e.kind() == kind).map(|e| e.tick).unwrap()
        };
        let floors: Vec<_> = rec
            .events
            .iter()
            .filter(|e| e.kind() == EventKind::FloorReached)
            .map(|e| (e.tick, e.event.floor()))
            .collect();
        assert_eq!(floors, [(Tick(2), Some(1)), (Tick(4), Some(2)), (Tick(6), Some(3))]);
        assert_eq!(at(EventKind::DoorOpening), Tick(6));
        assert_eq!(at(EventKind::DoorOpened), Tick(7));
        assert_eq!(at(EventKind::DoorClosing), Tick(10));
        assert_eq!(at(EventKind::DoorClosed), Tick(11));
        assert_eq!(sim.now(), Tick(12));
    }

    #[test]
    fn mid_travel_snapshot() {
        let mut sim = building(1);
        sim.schedule_car_request(&a(), -2).unwrap();
        sim.run_ticks(3, &mut NoopObserver);
        let snap = sim.snapshot();
        let car = snap.elevator(&a()).unwrap();
        assert_eq!(car.current_floor, -1);
        assert_eq!(car.motion_state, MotionState::Moving);
        assert_eq!(car.destination_floors, [-2]);
        assert_eq!(snap.elapsed_ms, 300);
    }

    #[test]
    fn request_while_doors_cycle_is_picked_up() {
        let mut sim = building(1);
        sim.schedule_car_request(&a(), 1).unwrap();
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.elevator(&a()).unwrap().door_state, DoorState::Opening);

        sim.schedule_car_request(&a(), 4).unwrap();
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.motion_state, MotionState::Stopped);
        assert_eq!(car.destination_floors, [4]);

        assert!(sim.run_until_idle(200, &mut NoopObserver));
        assert_eq!(sim.elevator(&a()).unwrap().current_floor, 4);
    }

    #[test]
    fn duplicate_request_is_silent() {
        let mut sim = building(1);
        let mut rec = EventRecorder::default();
        sim.schedule_car_request(&a(), 2).unwrap();
        sim.schedule_car_request(&a(), 2).unwrap();
        sim.run_until_idle(100, &mut rec);
        let scheduled = kinds_for(&rec, &a())
            .into_iter()
            .filter(|k| *k == EventKind::DestinationScheduled)
            .count();
        assert_eq!(scheduled, 1);
    }

    #[test]
    fn request_for_current_floor_opens_doors() {
        let mut sim = building(1);
        let mut rec = EventRecorder::default();
        sim.schedule_car_request(&a(), 0).unwrap();
        sim.run_until_idle(100, &mut rec);
        let kinds = kinds_for(&rec, &a());
        assert!(!kinds.contains(&EventKind::MotionMoving));
        assert!(kinds.contains(&EventKind::DestinationReached));
        assert!(kinds.contains(&EventKind::DoorOpened));
        assert_eq!(sim.elevator(&a()).unwrap().current_floor, 0);
    }
}

// ── Request validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod request_tests {
    use lift_core::CallDirection;

    use super::*;

    #[test]
    fn invalid_floor() {
        let mut sim = building(1);
        assert!(sim.is_valid_floor(-2));
        assert!(sim.is_valid_floor(5));
        assert!(!sim.is_valid_floor(6));
        assert_eq!(
            sim.schedule_car_request(&a(), 9),
            Err(LiftError::InvalidFloor { floor: 9, min: -2, max: 5 })
        );
        assert!(matches!(
            sim.call_elevator(-3, CallDirection::Up),
            Err(LiftError::InvalidFloor { floor: -3, .. })
        ));
    }

    #[test]
    fn unknown_elevator() {
        let mut sim = building(1);
        let z = ElevatorId::from("Z");
        assert_eq!(sim.schedule_car_request(&z, 1), Err(LiftError::NotFound(z.clone())));
        assert_eq!(sim.open_door(&z), Err(LiftError::NotFound(z.clone())));
        assert_eq!(sim.start_maintenance(&z), Err(LiftError::NotFound(z.clone())));
        // The floor is checked before the id.
        assert!(matches!(sim.schedule_car_request(&z, 99), Err(LiftError::InvalidFloor { .. })));
    }

    #[test]
    fn cannot_open_doors_while_moving() {
        let mut sim = building(1);
        sim.schedule_car_request(&a(), 3).unwrap();
        assert!(matches!(
            sim.open_door(&a()),
            Err(LiftError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn request_while_idle_with_open_doors_is_rejected_but_served() {
        let mut sim = building(1);
        sim.open_door(&a()).unwrap();
        assert!(matches!(
            sim.schedule_car_request(&a(), 3),
            Err(LiftError::InvalidStateTransition { .. })
        ));
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.motion_state, MotionState::Idle);
        assert_eq!(car.destination_floors, [3]);

        // The door cycle closes and the queued floor is served.
        assert!(sim.run_until_idle(100, &mut NoopObserver));
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.current_floor, 3);
        assert!(car.destination_floors.is_empty());
    }

    #[test]
    fn close_on_closed_doors_is_a_no_op() {
        let mut sim = building(1);
        let mut rec = EventRecorder::default();
        sim.close_door(&a()).unwrap();
        sim.run_ticks(2, &mut rec);
        assert!(rec.events.is_empty());
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use lift_core::CallDirection;

    use super::*;

    #[test]
    fn hall_call_goes_to_nearest_car() {
        let mut sim = building(2);
        sim.schedule_car_request(&b(), 4).unwrap();
        assert!(sim.run_until_idle(200, &mut NoopObserver));

        let chosen = sim.call_elevator(5, CallDirection::Down).unwrap();
        assert_eq!(chosen, b());
        assert_eq!(sim.elevator(&b()).unwrap().destination_floors, [5]);

        let chosen = sim.call_elevator(-1, CallDirection::Up).unwrap();
        assert_eq!(chosen, a());

        sim.run_until_idle(200, &mut NoopObserver);
        assert_eq!(sim.elevator(&a()).unwrap().current_floor, -1);
        assert_eq!(sim.elevator(&b()).unwrap().current_floor, 5);
    }

    #[test]
    fn ties_go_to_the_first_car() {
        let mut sim = building(3);
        assert_eq!(sim.call_elevator(2, CallDirection::Up).unwrap(), a());
    }

    #[test]
    fn no_active_cars() {
        let mut sim = building(2);
        sim.start_maintenance(&a()).unwrap();
        sim.start_maintenance(&b()).unwrap();
        assert_eq!(
            sim.call_elevator(3, CallDirection::Down),
            Err(LiftError::NoElevatorsAvailable)
        );
    }

    #[test]
    fn out_of_service_cars_are_skipped() {
        let mut sim = building(2);
        sim.start_maintenance(&a()).unwrap();
        assert_eq!(sim.call_elevator(1, CallDirection::Up).unwrap(), b());
    }
}

// ── Timers ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timer_tests {
    use lift_schedule::Concern;

    use super::*;

    #[test]
    fn one_door_timer_per_car() {
        let mut sim = building(1);
        sim.open_door(&a()).unwrap();
        assert_eq!(sim.timers.len(), 1);

        // Opened: the hold timer replaces the opening timer.
        sim.run_ticks(2, &mut NoopObserver);
        assert_eq!(sim.elevator(&a()).unwrap().door_state, DoorState::Open);
        assert_eq!(sim.timers.len(), 1);

        // Manual close cancels the hold.
        sim.close_door(&a()).unwrap();
        assert_eq!(sim.elevator(&a()).unwrap().door_state, DoorState::Closing);
        assert_eq!(sim.timers.len(), 1);
        assert_eq!(sim.engines.slots(Concern::Door).len(), 1);

        // Re-open while closing.
        sim.open_door(&a()).unwrap();
        assert_eq!(sim.elevator(&a()).unwrap().door_state, DoorState::Opening);
        assert_eq!(sim.timers.len(), 1);

        assert!(sim.run_until_idle(50, &mut NoopObserver));
        assert_eq!(sim.elevator(&a()).unwrap().door_state, DoorState::Closed);
        assert!(sim.engines.slots(Concern::Door).is_empty());
    }

    #[test]
    fn never_more_than_one_timer_per_concern() {
        let mut sim = building(2);
        sim.schedule_car_request(&a(), 5).unwrap();
        sim.schedule_car_request(&b(), -2).unwrap();
        for _ in 0..60 {
            for id in [a(), b()] {
                for concern in [Concern::Motion, Concern::Door, Concern::Status] {
                    let pending = sim
                        .timers
                        .iter()
                        .filter(|(_, _, t)| t.elevator == id && t.action.concern() == concern)
                        .count();
                    assert!(pending <= 1, "{id}: {pending} {concern:?} timers");
                }
            }
            sim.run_ticks(1, &mut NoopObserver);
        }
    }

    #[test]
    fn manual_close_shortens_hold() {
        let mut sim = building(1);
        let mut rec = EventRecorder::default();
        sim.open_door(&a()).unwrap();
        sim.run_ticks(2, &mut rec);
        sim.close_door(&a()).unwrap();
        sim.run_until_idle(20, &mut rec);
        let closed = rec.events.iter().find(|e| e.kind() == EventKind::DoorClosed).unwrap();
        // Closed one tick after the close request, not after the hold.
        assert_eq!(closed.tick, Tick(3));
    }
}

// ── Faults and maintenance ────────────────────────────────────────────────────

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn certain_fault_on_first_move() {
        let mut sim = SimBuilder::new(test_config(1, 1.0), NearestCar).build().unwrap();
        let mut rec = EventRecorder::default();
        sim.schedule_car_request(&a(), 3).unwrap();
        sim.run_ticks(1, &mut rec);

        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.status, Status::Error);
        assert_eq!(car.current_floor, 0);
        assert_eq!(car.motion_state, MotionState::Idle);
        assert!(car.destination_floors.is_empty());
        assert_eq!(
            kinds_for(&rec, &a()),
            [EventKind::DestinationScheduled, EventKind::StatusError]
        );
        assert!(sim.is_idle());

        assert_eq!(sim.schedule_car_request(&a(), 2), Err(LiftError::NotOperational(a())));
    }

    #[test]
    fn maintenance_returns_car_to_ground() {
        let mut sim = building(1);
        sim.schedule_car_request(&a(), 3).unwrap();
        sim.run_until_idle(100, &mut NoopObserver);

        sim.start_maintenance(&a()).unwrap();
        assert_eq!(sim.elevator(&a()).unwrap().status, Status::Maintenance);
        assert_eq!(sim.schedule_car_request(&a(), 1), Err(LiftError::NotOperational(a())));

        let mut rec = EventRecorder::default();
        assert!(sim.run_until_idle(200, &mut rec));
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.status, Status::Active);
        assert_eq!(car.current_floor, 0);
        assert_eq!(rec.events[0].kind(), EventKind::StatusMaintenance);
        assert_eq!(rec.events[1].kind(), EventKind::StatusActive);
    }

    #[test]
    fn maintenance_in_flight_parks_at_next_floor() {
        let mut sim = building(1);
        sim.schedule_car_request(&a(), 5).unwrap();
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.elevator(&a()).unwrap().current_floor, 1);

        sim.start_maintenance(&a()).unwrap();
        sim.run_ticks(2, &mut NoopObserver);
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.current_floor, 2);
        assert_eq!(car.motion_state, MotionState::Idle);
        assert_eq!(car.status, Status::Maintenance);
        assert!(car.destination_floors.is_empty());

        assert!(sim.run_until_idle(200, &mut NoopObserver));
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.current_floor, 0);
        assert_eq!(car.status, Status::Active);
    }

    #[test]
    fn maintenance_ends_mid_flight_and_car_heads_home() {
        let mut cfg = test_config(1, 0.0);
        cfg.floor_travel_time_ms = 5_000;
        cfg.maintenance_fix_time_ms = 100;
        let mut sim = SimBuilder::new(cfg, NearestCar).build().unwrap();
        sim.schedule_car_request(&a(), 3).unwrap();
        sim.start_maintenance(&a()).unwrap();

        // Fix completes long before the first floor is reached.
        sim.run_ticks(2, &mut NoopObserver);
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.status, Status::Active);
        assert_eq!(car.motion_state, MotionState::Moving);
        assert_eq!(car.current_floor, 0);
        assert_eq!(car.destination_floors, [0]);

        let mut rec = EventRecorder::default();
        assert!(sim.run_until_idle(1_000, &mut rec));
        let car = sim.elevator(&a()).unwrap();
        assert_eq!(car.current_floor, 0);
        assert_eq!(car.status, Status::Active);
        assert_eq!(car.motion_state, MotionState::Idle);
        assert!(car.destination_floors.is_empty());

        let floors: Vec<_> = rec
            .events
            .iter()
            .filter(|e| e.kind() == EventKind::FloorReached)
            .map(|e| e.event.floor())
            .collect();
        assert_eq!(floors, [Some(1), Some(0)]);
    }

    #[test]
    fn faulted_car_recovers_through_maintenance() {
        let mut sim = SimBuilder::new(test_config(1, 1.0), NearestCar).build().unwrap();
        sim.schedule_car_request(&a(), 2).unwrap();
        assert_eq!(sim.elevator(&a()).unwrap().status, Status::Error);

        sim.start_maintenance(&a()).unwrap();
        assert_eq!(sim.elevator(&a()).unwrap().status, Status::Maintenance);
        sim.run_ticks(6, &mut NoopObserver);
        // Back in service, and with a certain fault rate the homing move
        // faults again.
        assert_eq!(sim.elevator(&a()).unwrap().status, Status::Error);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = SimBuilder::new(test_config(3, 0.3), NearestCar).build().unwrap();
            let mut rec = EventRecorder::default();
            for (id, floor) in [(a(), 5), (b(), -2), (ElevatorId::from("C"), 3)] {
                let _ = sim.schedule_car_request(&id, floor);
            }
            sim.run_until_idle(500, &mut rec);
            rec.events
                .iter()
                .map(|e| (e.tick, e.elevator.clone(), e.kind()))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}

// ── Observer, bus and snapshots ───────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{BuildingSnapshot, SimObserver};

    #[derive(Default)]
    struct Counter {
        starts:    u64,
        ends:      u64,
        snapshots: Vec<Tick>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, _fired: usize) {
            self.ends += 1;
        }
        fn on_snapshot(&mut self, tick: Tick, snapshot: &BuildingSnapshot) {
            assert_eq!(snapshot.tick, tick);
            self.snapshots.push(tick);
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    #[test]
    fn request_events_wait_for_the_next_tick() {
        let mut sim = building(1);
        sim.schedule_car_request(&a(), 2).unwrap();
        sim.open_door(&b()).unwrap_err();
        assert_eq!(sim.journal.len(), 2);

        let mut rec = EventRecorder::default();
        sim.run_ticks(1, &mut rec);
        assert!(sim.journal.is_empty());
        assert_eq!(rec.events[0].kind(), EventKind::DestinationScheduled);
        assert_eq!(rec.events[1].kind(), EventKind::MotionMoving);
    }

    #[test]
    fn callbacks_per_tick() {
        let mut sim = SimBuilder::new(test_config(2, 0.0), NearestCar)
            .snapshot_interval(5)
            .build()
            .unwrap();
        let mut obs = Counter::default();
        sim.run_ticks(12, &mut obs);
        sim.finish(&mut obs);
        assert_eq!(obs.starts, 12);
        assert_eq!(obs.ends, 12);
        assert_eq!(obs.snapshots, [Tick(0), Tick(5), Tick(10)]);
        assert_eq!(obs.finished, Some(Tick(12)));
    }

    #[test]
    fn events_are_ordered() {
        let mut sim = building(2);
        let mut rec = EventRecorder::default();
        sim.schedule_car_request(&a(), 4).unwrap();
        sim.schedule_car_request(&b(), -1).unwrap();
        sim.run_until_idle(200, &mut rec);

        assert!(rec.events.windows(2).all(|w| w[0].seq < w[1].seq));
        assert!(rec.events.windows(2).all(|w| w[0].tick <= w[1].tick));
    }

    #[test]
    fn subscribers_see_every_event() {
        let mut sim = building(1);
        let rx = sim.subscribe();
        let mut rec = EventRecorder::default();
        sim.schedule_car_request(&a(), 1).unwrap();
        sim.run_until_idle(100, &mut rec);

        let received: Vec<_> = rx.try_iter().map(|e| e.seq).collect();
        let recorded: Vec<_> = rec.events.iter().map(|e| e.seq).collect();
        assert_eq!(received, recorded);
        assert!(!received.is_empty());
    }

    #[test]
    fn snapshot_contents() {
        let mut sim = building(2);
        sim.schedule_car_request(&b(), 2).unwrap();
        let snap = sim.snapshot();
        assert_eq!(snap.elevator_count, 2);
        assert_eq!((snap.min_floor, snap.max_floor), (-2, 5));
        assert_eq!(snap.elevators[0].id, a());
        assert_eq!(snap.elevator(&b()).unwrap().destination_floors, [2]);
        assert!(snap.elevator(&ElevatorId::from("Q")).is_none());
    }
}

// ── Call plans ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_tests {
    use lift_core::CallDirection;
    use lift_schedule::{Call, CallPlan};

    use super::*;

    #[test]
    fn run_plan_reports_each_outcome() {
        let mut sim = building(2);
        let mut plan = CallPlan::empty();
        plan.push(0, Call::Car { elevator: a(), floor: 3 });
        plan.push(150, Call::Car { elevator: ElevatorId::from("Z"), floor: 1 });
        plan.push(200, Call::Hall { floor: 9, direction: CallDirection::Up });
        plan.push(250, Call::Hall { floor: -2, direction: CallDirection::Up });

        let mut rec = EventRecorder::default();
        let outcomes = sim.run_plan(&plan, 500, &mut rec);

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].result, Ok(a()));
        assert_eq!(outcomes[0].tick, Tick(0));
        assert!(matches!(outcomes[1].result, Err(LiftError::NotFound(_))));
        assert_eq!(outcomes[1].tick, Tick(2));
        assert!(matches!(outcomes[2].result, Err(LiftError::InvalidFloor { .. })));
        assert_eq!(outcomes[3].result, Ok(b()));

        assert!(sim.is_idle());
        assert_eq!(sim.elevator(&a()).unwrap().current_floor, 3);
        assert_eq!(sim.elevator(&b()).unwrap().current_floor, -2);
    }

    #[test]
    fn outcome_display() {
        let mut sim = building(1);
        let mut plan = CallPlan::empty();
        plan.push(0, Call::OpenDoor { elevator: ElevatorId::from("X") });
        let outcomes = sim.run_plan(&plan, 10, &mut NoopObserver);
        assert!(outcomes[0].to_string().contains("NOT_FOUND"));
    }
}

// ── SharedBuilding ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shared_tests {
    use std::thread;
    use std::time::{Duration, Instant};

    use lift_core::CallDirection;

    use super::*;
    use crate::SharedBuilding;

    #[test]
    fn requests_from_many_threads() {
        let shared = SharedBuilding::new(building(2));
        let handles: Vec<_> = [(a(), 4), (b(), -2)]
            .into_iter()
            .map(|(id, floor)| {
                let s = shared.clone();
                thread::spawn(move || s.schedule_car_request(&id, floor))
            })
            .collect();
        for h in handles {
            h.join().unwrap().unwrap();
        }
        shared.advance(100);

        let snap = shared.snapshot();
        assert_eq!(snap.elevator(&a()).unwrap().current_floor, 4);
        assert_eq!(snap.elevator(&b()).unwrap().current_floor, -2);
        assert_eq!(shared.now(), Tick(100));
    }

    #[test]
    fn wall_clock_drives_the_building() {
        let shared = SharedBuilding::new(building(1));
        let rx = shared.subscribe();
        let clock = shared.spawn_clock(Duration::from_millis(1));
        assert!(clock.is_running());

        shared.call_elevator(2, CallDirection::Up).unwrap();
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let done = {
                let sim = shared.lock();
                sim.is_idle() && sim.elevator(&a()).unwrap().current_floor == 2
            };
            if done || Instant::now() > deadline {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        clock.stop();

        assert_eq!(shared.snapshot().elevators[0].current_floor, 2);
        assert!(rx.try_iter().any(|e| e.kind() == EventKind::DoorClosed));
    }
}
