//! Integration tests for the full check-in → security → boarding pipeline.
//!
//! These validate:
//! 1. The worked scheduling scenario (late > boosted > base priority)
//! 2. Conservation: everyone admitted boards exactly once
//! 3. Termination for finite inputs
//! 4. The lifecycle event stream a display layer would render
//! 5. Tie-break emulation modes and priority policies end to end

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use airside::builders::{build_scheduler, build_terminal};
use airside::config::{Manifest, PassengerSpec, PriorityPolicy, TerminalConfig};
use airside::core::{
    EventSink, FlowEvent, InstantAction, Passenger, PassengerId, StageName, TerminalScheduler,
    TieBreak,
};

/// Sink that shares its record buffer with the test body.
struct RecordingSink(Arc<Mutex<Vec<FlowEvent>>>);

impl EventSink for RecordingSink {
    fn record(&mut self, event: FlowEvent) {
        self.0.lock().push(event);
    }
}

fn passenger(name: &str, priority: i32, late: bool, frequent: bool) -> Passenger {
    Passenger::new(name, priority, late, frequent).unwrap()
}

fn spec(name: &str, priority: i32, late: bool, frequent_flyer: bool) -> PassengerSpec {
    PassengerSpec {
        name: name.into(),
        priority,
        late,
        frequent_flyer,
    }
}

#[test]
fn worked_scenario_boards_in_rank_order() {
    // Capacities (1,1,1); A base 3, B late base 5, C base 3 + boost.
    let mut scheduler = TerminalScheduler::new(1, 1, 1).unwrap();
    scheduler.admit(passenger("A", 3, false, false));
    scheduler.admit(passenger("B", 5, true, false));
    scheduler.admit(passenger("C", 3, false, true));

    let report = scheduler.run(&InstantAction);

    let boarded: Vec<&str> = report.boarded.iter().map(Passenger::name).collect();
    assert_eq!(boarded, ["B", "C", "A"]);
}

#[test]
fn worked_scenario_admission_order_observed_at_check_in() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut scheduler = TerminalScheduler::new(1, 1, 1)
        .unwrap()
        .with_events(Box::new(RecordingSink(Arc::clone(&events))));

    let a = passenger("A", 3, false, false);
    let b = passenger("B", 5, true, false);
    let c = passenger("C", 3, false, true);
    let ids: HashMap<PassengerId, &str> =
        [(a.id(), "A"), (b.id(), "B"), (c.id(), "C")].into_iter().collect();

    scheduler.admit(a);
    scheduler.admit(b);
    scheduler.admit(c);
    scheduler.run(&InstantAction);

    let check_in_order: Vec<&str> = events
        .lock()
        .iter()
        .filter_map(|event| match event {
            FlowEvent::EnteredStage {
                passenger,
                stage: StageName::CheckIn,
            } => Some(ids[passenger]),
            _ => None,
        })
        .collect();
    assert_eq!(check_in_order, ["B", "C", "A"]);
}

#[test]
fn every_admitted_passenger_boards_exactly_once() {
    let mut scheduler = TerminalScheduler::new(2, 3, 1).unwrap();

    let mut admitted = Vec::new();
    // Mix of duplicates, ties, late runs, and boosts.
    for i in 0..40 {
        let p = passenger(&format!("p{}", i % 7), (i % 5) + 1, i % 3 == 0, i % 4 == 0);
        admitted.push(p.id());
        scheduler.admit(p);
    }

    let report = scheduler.run(&InstantAction);
    assert_eq!(report.boarded.len(), admitted.len());

    let mut boarded: Vec<PassengerId> = report.boarded.iter().map(Passenger::id).collect();
    let mut expected = admitted;
    boarded.sort_by_key(ToString::to_string);
    expected.sort_by_key(ToString::to_string);
    assert_eq!(boarded, expected);
}

#[test]
fn finite_input_terminates_with_bounded_cycles() {
    let mut scheduler = TerminalScheduler::new(1, 1, 1).unwrap();
    for i in 0..25 {
        scheduler.admit(passenger(&format!("p{i}"), 3, false, false));
    }
    let report = scheduler.run(&InstantAction);
    assert!(report.cycles >= 1);
    assert!(report.cycles <= 25);
    assert!(scheduler.is_drained());
}

#[test]
fn event_stream_is_well_formed_per_passenger() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut scheduler = TerminalScheduler::new(2, 2, 2)
        .unwrap()
        .with_events(Box::new(RecordingSink(Arc::clone(&events))));

    let travelers: Vec<Passenger> = (0..5)
        .map(|i| passenger(&format!("p{i}"), i + 1, i % 2 == 0, false))
        .collect();
    let ids: Vec<PassengerId> = travelers.iter().map(Passenger::id).collect();
    for p in travelers {
        scheduler.admit(p);
    }
    scheduler.run(&InstantAction);

    let log = events.lock();
    for id in &ids {
        let lifecycle: Vec<String> = log
            .iter()
            .filter_map(|event| match event {
                FlowEvent::AdmittedToAdmission { passenger, .. } if passenger == id => {
                    Some("admitted".to_string())
                }
                FlowEvent::EnteredStage { passenger, stage } if passenger == id => {
                    Some(format!("enter {stage}"))
                }
                FlowEvent::FinishedStage { passenger, stage } if passenger == id => {
                    Some(format!("finish {stage}"))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            lifecycle,
            [
                "admitted",
                "enter Check-in",
                "finish Check-in",
                "enter Security",
                "finish Security",
                "enter Boarding",
                "finish Boarding"
            ],
            "lifecycle for {id}"
        );
    }

    let cycles = log
        .iter()
        .filter(|event| matches!(event, FlowEvent::CycleCompleted { .. }))
        .count();
    assert_eq!(cycles, 1);
}

#[test]
fn rotation_modes_still_board_everyone_in_arrival_order() {
    for tie_break in [TieBreak::Rotation, TieBreak::StrictRotation] {
        let mut scheduler = TerminalScheduler::new(1, 1, 1)
            .unwrap()
            .with_tie_break(tie_break);
        for name in ["x", "y", "z"] {
            scheduler.admit(passenger(name, 3, false, false));
        }
        let report = scheduler.run(&InstantAction);
        let boarded: Vec<&str> = report.boarded.iter().map(Passenger::name).collect();
        assert_eq!(boarded, ["x", "y", "z"], "mode {tie_break:?}");
    }
}

#[test]
fn clamp_policy_flows_out_of_range_passengers_through() {
    let mut cfg = TerminalConfig::new(1, 1, 1);
    cfg.priority_policy = PriorityPolicy::Clamp;
    let manifest = Manifest {
        passengers: vec![
            spec("over", 11, false, false),
            spec("under", -2, false, false),
            spec("normal", 3, false, false),
        ],
    };

    let (mut scheduler, action) = build_terminal(&cfg, &manifest).unwrap();
    let report = scheduler.run(action.as_ref());

    let boarded: Vec<&str> = report.boarded.iter().map(Passenger::name).collect();
    // Clamped 11 -> 5 outranks 3, which outranks clamped -2 -> 1.
    assert_eq!(boarded, ["over", "normal", "under"]);
}

#[test]
fn reject_policy_surfaces_invalid_priority() {
    let cfg = TerminalConfig::new(1, 1, 1);
    let manifest = Manifest {
        passengers: vec![spec("ok", 3, false, false), spec("bad", 7, false, false)],
    };
    assert!(build_terminal(&cfg, &manifest).is_err());
}

#[test]
fn scheduler_accepts_incremental_admissions_between_runs() {
    let cfg = TerminalConfig::new(1, 2, 1);
    let mut scheduler = build_scheduler(&cfg).unwrap();

    scheduler.admit(passenger("first-wave", 3, false, false));
    let first = scheduler.run(&InstantAction);
    assert_eq!(first.boarded.len(), 1);

    scheduler.admit(passenger("second-wave", 4, true, false));
    let second = scheduler.run(&InstantAction);
    let boarded: Vec<&str> = second.boarded.iter().map(Passenger::name).collect();
    assert_eq!(boarded, ["second-wave"]);
    assert!(second.cycles > first.cycles);
}
