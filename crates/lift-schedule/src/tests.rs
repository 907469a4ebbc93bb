//! Unit tests for lift-schedule.

#[cfg(test)]
mod timer_queue {
    use lift_core::{ElevatorId, Tick};

    use crate::{Concern, Timer, TimerAction, TimerQueue};

    fn t(id: &str, action: TimerAction) -> Timer {
        Timer::new(ElevatorId::from(id), action)
    }

    #[test]
    fn pop_due_is_ordered_and_fifo_within_tick() {
        let mut q = TimerQueue::new();
        q.schedule(Tick(5), t("A", TimerAction::ReachFloor));
        q.schedule(Tick(3), t("B", TimerAction::CompleteOpening));
        q.schedule(Tick(5), t("C", TimerAction::StartClosing));
        q.schedule(Tick(9), t("D", TimerAction::CompleteClosing));

        assert_eq!(q.next_tick(), Some(Tick(3)));
        let fired: Vec<String> = q
            .pop_due(Tick(5))
            .into_iter()
            .map(|(_, timer)| timer.elevator.0)
            .collect();
        assert_eq!(fired, ["B", "A", "C"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_tick(), Some(Tick(9)));
    }

    #[test]
    fn nothing_due_yet() {
        let mut q = TimerQueue::new();
        q.schedule(Tick(2), t("A", TimerAction::ReachFloor));
        assert!(q.pop_due(Tick(1)).is_empty());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn cancel_removes_exactly_once() {
        let mut q = TimerQueue::new();
        let keep = q.schedule(Tick(4), t("A", TimerAction::ReachFloor));
        let gone = q.schedule(Tick(4), t("A", TimerAction::CompleteMaintenance));
        assert!(q.cancel(gone));
        assert!(!q.cancel(gone));
        assert!(q.is_pending(keep));
        assert!(!q.is_pending(gone));

        let fired = q.pop_due(Tick(10));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].0, keep);
        assert!(!q.cancel(keep));
        assert!(q.is_empty());
    }

    #[test]
    fn actions_map_to_concerns() {
        assert_eq!(TimerAction::ReachFloor.concern(), Concern::Motion);
        assert_eq!(TimerAction::StartClosing.concern(), Concern::Door);
        assert_eq!(TimerAction::CompleteOpening.concern(), Concern::Door);
        assert_eq!(TimerAction::CompleteMaintenance.concern(), Concern::Status);
        assert_eq!(TimerAction::CompleteClosing.to_string(), "complete_closing");
    }
}

#[cfg(test)]
mod plan {
    use lift_core::CallDirection;

    use crate::{Call, CallPlan, ScriptedCall};

    #[test]
    fn new_sorts_stably() {
        let plan = CallPlan::new(vec![
            ScriptedCall { at_ms: 500, call: Call::OpenDoor { elevator: "A".into() } },
            ScriptedCall { at_ms: 0, call: Call::Hall { floor: 2, direction: CallDirection::Up } },
            ScriptedCall { at_ms: 500, call: Call::CloseDoor { elevator: "A".into() } },
        ]);
        let kinds: Vec<&str> = plan.calls().iter().map(|c| c.call.kind()).collect();
        assert_eq!(kinds, ["hall", "open", "close"]);
        assert_eq!(plan.last_ms(), 500);
    }

    #[test]
    fn push_keeps_order() {
        let mut plan = CallPlan::empty();
        plan.push(300, Call::Maintenance { elevator: "B".into() });
        plan.push(100, Call::Car { elevator: "A".into(), floor: 4 });
        plan.push(300, Call::OpenDoor { elevator: "B".into() });
        let times: Vec<u64> = plan.calls().iter().map(|c| c.at_ms).collect();
        assert_eq!(times, [100, 300, 300]);
        assert_eq!(plan.calls()[2].call.kind(), "open");
    }

    #[test]
    fn display() {
        let call = Call::Car { elevator: "C".into(), floor: -1 };
        assert_eq!(call.to_string(), "car C -> -1");
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use lift_core::CallDirection;

    use crate::{Call, ScheduleError, load_plan_reader};

    #[test]
    fn loads_every_kind() {
        let csv = "\
at_ms,kind,elevator,floor,direction
9000,open,B,,
0,hall,,3,up
500,car,A,-1,
9200,close,B,,
12000,maintenance,A,,
";
        let plan = load_plan_reader(Cursor::new(csv)).unwrap();
        assert_eq!(plan.len(), 5);
        assert_eq!(
            plan.calls()[0].call,
            Call::Hall { floor: 3, direction: CallDirection::Up }
        );
        assert_eq!(plan.calls()[1].call, Call::Car { elevator: "A".into(), floor: -1 });
        assert_eq!(plan.calls()[2].call, Call::OpenDoor { elevator: "B".into() });
        assert_eq!(plan.calls()[4].at_ms, 12_000);
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let csv = "at_ms,kind,elevator,floor,direction\n0,car,,3,\n";
        let err = load_plan_reader(Cursor::new(csv)).unwrap_err();
        match err {
            ScheduleError::Parse(msg) => assert!(msg.contains("row 2"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn bad_direction_and_kind_rejected() {
        let bad_dir = "at_ms,kind,elevator,floor,direction\n0,hall,,3,left\n";
        assert!(load_plan_reader(Cursor::new(bad_dir)).is_err());
        let bad_kind = "at_ms,kind,elevator,floor,direction\n0,teleport,A,3,\n";
        assert!(load_plan_reader(Cursor::new(bad_kind)).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_plan_csv(std::path::Path::new("/nonexistent/plan.csv")).unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}
