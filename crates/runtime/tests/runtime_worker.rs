//! Worker round-trips on tokio's paused clock.
use std::time::Duration;

use runtime::{
    Control, Event, MachineError, MachineEvent, OutcomeEvent, Runtime, RuntimeError,
    SimulationEvent, Topic,
};
use tokio::time::timeout;

async fn start_runtime() -> Runtime {
    Runtime::builder()
        .seed(3)
        .build()
        .await
        .expect("runtime should start")
}

#[tokio::test(start_paused = true)]
async fn spin_round_trip_publishes_outcome() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();
    let mut outcomes = handle.subscribe(Topic::Outcome);

    handle.start_spin().await.unwrap();
    assert!(handle.query_state().await.unwrap().session().spinning);

    let event = timeout(Duration::from_secs(5), outcomes.recv())
        .await
        .expect("outcome within auto-stop plus stop sequence")
        .unwrap();
    let Event::Outcome(OutcomeEvent::Evaluated { tally, .. }) = event else {
        panic!("expected an evaluated outcome");
    };
    assert_eq!(tally.total(), 1);

    let state = handle.query_state().await.unwrap();
    assert!(!state.session().spinning);
    assert_eq!(state.tally.total(), 1);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn refused_controls_surface_machine_errors() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();

    assert!(matches!(
        handle.stop_spin().await,
        Err(RuntimeError::Machine(MachineError::ControlDisabled {
            control: Control::Stop,
            ..
        }))
    ));

    assert_eq!(handle.primary_action().await.unwrap(), Control::Spin);
    let error = handle.start_spin().await.unwrap_err();
    assert!(error.is_refused());
    assert_eq!(handle.primary_action().await.unwrap(), Control::Stop);
    assert!(handle.primary_action().await.is_err());

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn state_copies_follow_commands() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();
    let mut machine_rx = handle.subscribe(Topic::Machine);

    handle.start_spin().await.unwrap();

    let mut saw_spinning = false;
    while let Ok(Ok(event)) = timeout(Duration::from_millis(10), machine_rx.recv()).await {
        if let Event::Machine(MachineEvent::StateChanged { state }) = event
            && state.session().spinning
        {
            saw_spinning = true;
            break;
        }
    }
    assert!(saw_spinning);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn math_simulation_updates_tally() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();
    let mut simulation_rx = handle.subscribe(Topic::Simulation);

    let report = handle.simulate_math(20).await.unwrap();
    assert_eq!(report.count, 20);
    assert_eq!(handle.query_state().await.unwrap().tally.total(), 20);
    assert!(matches!(
        simulation_rx.recv().await,
        Ok(Event::Simulation(SimulationEvent::MathCompleted { .. }))
    ));

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn batch_runs_to_completion_and_shutdown_is_clean() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();
    let mut simulation_rx = handle.subscribe(Topic::Simulation);

    assert!(handle.simulate_spins(2).await.unwrap());
    assert!(!handle.simulate_spins(2).await.unwrap());

    let finished = timeout(Duration::from_secs(30), async {
        loop {
            if let Ok(Event::Simulation(SimulationEvent::BatchFinished { cancelled, .. })) =
                simulation_rx.recv().await
            {
                return cancelled;
            }
        }
    })
    .await
    .expect("batch finishes");
    assert!(!finished);
    assert_eq!(handle.query_state().await.unwrap().tally.total(), 2);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn invalid_config_is_rejected() {
    let mut slot = slot_core::SlotConfig::default();
    slot.spin_interval = slot_core::Millis::ZERO;
    let result = Runtime::builder().slot_config(slot).build().await;
    assert!(matches!(result, Err(RuntimeError::InvalidConfig(_))));
}
