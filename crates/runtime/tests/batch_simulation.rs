//! Animated batch runs on the virtual clock.
use rand::SeedableRng;
use rand::rngs::StdRng;
use runtime::{BatchProgress, Event, MachineEvent, SimulationEvent, SlotMachine};
use slot_core::{Millis, SlotConfig};

fn machine() -> SlotMachine {
    SlotMachine::new(SlotConfig::default(), StdRng::seed_from_u64(9)).expect("valid config")
}

fn spin_starts(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, Event::Machine(MachineEvent::SpinStarted { .. })))
        .count()
}

#[test]
fn runs_requested_number_of_cycles() {
    let mut machine = machine();
    assert_eq!(machine.simulate_spins(3), Ok(true));

    // Each cycle waits the estimated spin duration plus the pause.
    let cycle = SlotConfig::default().estimated_spin_duration() + SlotConfig::DEFAULT_BATCH_PAUSE;
    assert_eq!(cycle, Millis(4000));

    machine.advance_to(Millis(11_999));
    assert!(machine.is_simulating());
    assert_eq!(machine.tally().total(), 3);
    assert_eq!(
        machine.state().batch,
        Some(BatchProgress {
            started: 3,
            total: 3
        })
    );

    machine.advance_to(Millis(12_000));
    assert!(!machine.is_simulating());

    let events = machine.drain_events();
    assert_eq!(spin_starts(&events), 3);
    assert!(events.iter().any(|event| matches!(
        event,
        Event::Simulation(SimulationEvent::BatchFinished {
            cancelled: false,
            ..
        })
    )));
}

#[test]
fn reentrant_call_is_ignored() {
    let mut machine = machine();
    assert_eq!(machine.simulate_spins(2), Ok(true));
    machine.advance_to(Millis(10));
    assert_eq!(machine.simulate_spins(5), Ok(false));

    machine.advance_to(Millis(20_000));
    assert_eq!(machine.tally().total(), 2);
}

#[test]
fn cancellation_lets_in_flight_spin_finish() {
    let mut machine = machine();
    machine.simulate_spins(5).unwrap();
    machine.advance_to(Millis(100));

    assert!(machine.cancel_simulation());
    assert!(!machine.cancel_simulation());
    assert!(!machine.is_simulating());

    machine.advance_to(Millis(100_000));
    let events = machine.drain_events();
    assert_eq!(spin_starts(&events), 1);
    assert_eq!(machine.tally().total(), 1);
    assert!(events.iter().any(|event| matches!(
        event,
        Event::Simulation(SimulationEvent::BatchFinished {
            cancelled: true,
            progress: BatchProgress { started: 1, total: 5 },
        })
    )));
}

#[test]
fn batch_blocks_math_simulation() {
    let mut machine = machine();
    machine.simulate_spins(1).unwrap();
    assert!(machine.simulate_math(10).is_err());
}
