//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{MachineEvent, OutcomeEvent, SimulationEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Reel updates, phase changes, full state copies
    Machine,
    /// Evaluated outcomes
    Outcome,
    /// Batch and math simulation progress
    Simulation,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Machine(MachineEvent),
    Outcome(OutcomeEvent),
    Simulation(SimulationEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Machine(_) => Topic::Machine,
            Event::Outcome(_) => Topic::Outcome,
            Event::Simulation(_) => Topic::Simulation,
        }
    }
}

struct Channels {
    machine: broadcast::Sender<Event>,
    outcome: broadcast::Sender<Event>,
    simulation: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Machine => &self.machine,
            Topic::Outcome => &self.outcome,
            Topic::Simulation => &self.simulation,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                machine: broadcast::channel(capacity).0,
                outcome: broadcast::channel(capacity).0,
                simulation: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slot_core::Millis;

    #[tokio::test]
    async fn routes_events_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut machine_rx = bus.subscribe(Topic::Machine);
        let mut outcome_rx = bus.subscribe(Topic::Outcome);

        bus.publish(Event::Machine(MachineEvent::SpinStarted { at: Millis(5) }));

        assert!(matches!(
            machine_rx.recv().await,
            Ok(Event::Machine(MachineEvent::SpinStarted { at: Millis(5) }))
        ));
        assert!(outcome_rx.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(Event::Simulation(SimulationEvent::BatchStarted { total: 3 }));
        let receivers = bus.subscribe_multiple(&[Topic::Machine, Topic::Simulation]);
        assert_eq!(receivers.len(), 2);
    }
}
