//! Stop-sequence timing on the virtual clock.
use rand::SeedableRng;
use rand::rngs::StdRng;
use runtime::{Event, MachineEvent, OutcomeEvent, Phase, SlotMachine};
use slot_core::{Millis, SlotConfig, Symbol};

fn machine_with(config: SlotConfig) -> SlotMachine {
    SlotMachine::new(config, StdRng::seed_from_u64(42)).expect("valid config")
}

fn machine() -> SlotMachine {
    machine_with(SlotConfig::default())
}

fn settled_at(events: &[Event]) -> Vec<(usize, u64)> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Machine(MachineEvent::ReelSettled { reel, at, .. }) => Some((*reel, at.0)),
            _ => None,
        })
        .collect()
}

fn evaluations(events: &[Event]) -> Vec<&OutcomeEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Outcome(outcome) => Some(outcome),
            _ => None,
        })
        .collect()
}

#[test]
fn spin_ticks_shift_each_reel() {
    let mut machine = machine();
    machine.start_spin().unwrap();

    machine.advance_to(Millis(49));
    assert!(machine.reels().iter().all(|reel| reel.window() == &[Symbol::ZERO; 3]));

    machine.advance_to(Millis(50));
    for reel in machine.reels().iter() {
        assert_eq!(reel.window()[0], Symbol::ZERO);
        assert_eq!(reel.window()[1], Symbol::ZERO);
    }
}

#[test]
fn manual_stop_follows_staggered_schedule() {
    let mut machine = machine();
    machine.start_spin().unwrap();
    machine.advance_to(Millis(500));
    machine.drain_events();

    machine.stop_spin().unwrap();
    assert!(machine.phase().session().stopping);

    machine.advance_to(Millis(1199));
    assert_eq!(machine.state().settled, [false; 3]);

    machine.advance_to(Millis(1200));
    assert_eq!(machine.state().settled, [true, false, false]);
    // Reel 1's second step shares the instant and was scheduled after the settle.
    assert_eq!(machine.phase(), Phase::Decelerating { reel: 1, step: 1 });

    machine.advance_to(Millis(2399));
    assert_eq!(machine.phase(), Phase::Decelerating { reel: 2, step: 3 });

    machine.advance_to(Millis(2400));
    assert_eq!(machine.phase(), Phase::Evaluating);
    assert_eq!(machine.state().settled, [true; 3]);
    let settled_snapshot = machine.reels().snapshot();

    machine.advance_to(Millis(2499));
    assert_eq!(machine.tally().total(), 0);

    machine.advance_to(Millis(2500));
    assert_eq!(machine.tally().total(), 1);
    assert!(matches!(machine.phase(), Phase::Displaying(_)));
    assert!(!machine.phase().is_busy());
    assert_eq!(machine.pending_timers(), 0);

    let events = machine.drain_events();
    assert_eq!(settled_at(&events), vec![(0, 1200), (1, 1800), (2, 2400)]);

    let evaluated = evaluations(&events);
    assert_eq!(evaluated.len(), 1);
    let OutcomeEvent::Evaluated {
        outcome,
        snapshot,
        tally,
        at,
    } = evaluated[0];
    assert_eq!(*at, Millis(2500));
    assert_eq!(*snapshot, settled_snapshot);
    assert_eq!(*outcome, slot_core::evaluate(&settled_snapshot));
    assert_eq!(tally.total(), 1);
}

#[test]
fn auto_stop_fires_after_delay() {
    let mut machine = machine();
    machine.start_spin().unwrap();

    machine.advance_to(Millis(1499));
    assert_eq!(machine.phase(), Phase::Spinning);

    machine.advance_to(Millis(1500));
    assert_eq!(machine.phase(), Phase::Decelerating { reel: 0, step: 0 });
    assert!(machine.drain_events().iter().any(|event| matches!(
        event,
        Event::Machine(MachineEvent::StopRequested {
            auto: true,
            at: Millis(1500)
        })
    )));

    machine.advance_to(Millis(3499));
    assert_eq!(machine.tally().total(), 0);
    machine.advance_to(Millis(3500));
    assert_eq!(machine.tally().total(), 1);
}

#[test]
fn manual_stop_cancels_auto_stop() {
    let mut machine = machine();
    machine.start_spin().unwrap();
    machine.advance_to(Millis(300));
    machine.stop_spin().unwrap();

    // Three reels, four deceleration steps and a settle each.
    assert_eq!(machine.pending_timers(), 15);

    machine.advance_to(Millis(10_000));
    let events = machine.drain_events();
    assert!(!events.iter().any(|event| matches!(
        event,
        Event::Machine(MachineEvent::StopRequested { auto: true, .. })
    )));
    assert_eq!(evaluations(&events).len(), 1);
    assert_eq!(machine.tally().total(), 1);
}

#[test]
fn stop_refused_while_stopping() {
    let mut machine = machine();
    machine.start_spin().unwrap();
    machine.stop_spin().unwrap();
    machine.advance_to(Millis(100));

    let pending = machine.pending_timers();
    assert!(machine.stop_spin().is_err());
    assert!(machine.start_spin().is_err());
    assert_eq!(machine.pending_timers(), pending);
}

#[test]
fn empty_deceleration_still_settles_in_order() {
    let mut config = SlotConfig::default();
    config.deceleration_steps.clear();
    let mut machine = machine_with(config);

    machine.start_spin().unwrap();
    machine.stop_spin().unwrap();
    machine.advance_to(Millis(1300));

    let events = machine.drain_events();
    assert_eq!(settled_at(&events), vec![(0, 0), (1, 600), (2, 1200)]);
    assert_eq!(evaluations(&events).len(), 1);
}

#[test]
fn confetti_only_on_wins_and_cleared_on_next_spin() {
    let mut machine = machine();
    for _ in 0..200 {
        machine.start_spin().unwrap();
        let deadline = machine.now() + Millis(4000);
        machine.advance_to(deadline);

        let state = machine.state();
        let outcome = state.outcome().expect("evaluated");
        if outcome.found() {
            assert_eq!(state.confetti.len(), SlotConfig::CONFETTI_COUNT);
            assert_eq!(state.highlight(), outcome.win_line());

            machine.start_spin().unwrap();
            assert!(machine.state().confetti.is_empty());
            assert_eq!(machine.state().highlight(), None);
            return;
        }
        assert!(state.confetti.is_empty());
    }
    panic!("no win in 200 spins");
}

#[test]
fn teardown_releases_every_timer() {
    let mut machine = machine();
    machine.simulate_spins(3).unwrap();
    machine.advance_to(Millis(100));
    assert!(machine.pending_timers() > 0);

    machine.teardown();
    assert_eq!(machine.pending_timers(), 0);
    assert_eq!(machine.next_deadline(), None);
    assert_eq!(machine.phase(), Phase::Idle);
    assert!(!machine.is_simulating());
}

#[test]
fn same_seed_same_spin() {
    let run = || {
        let mut machine = machine();
        machine.start_spin().unwrap();
        machine.advance_to(Millis(4000));
        machine.state()
    };
    assert_eq!(run(), run());
}
