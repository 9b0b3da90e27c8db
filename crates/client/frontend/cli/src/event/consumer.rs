//! Maintains the CLI message log in response to runtime events.
use runtime::{Event, MachineEvent};

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    format::describe_event,
    message::MessageLog,
};

pub struct CliEventConsumer {
    log: MessageLog,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }

    pub fn message_count(&self) -> usize {
        self.log.len()
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        if let Some(entry) = describe_event(event) {
            self.log.push(entry);
            return EventImpact::redraw();
        }

        match event {
            // Reel windows and phase come from the full state copy.
            Event::Machine(MachineEvent::StateChanged { .. }) => EventImpact::redraw(),
            _ => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::message::MessageLevel;
    use runtime::{BatchProgress, SimulationEvent};
    use slot_core::Millis;

    #[test]
    fn logs_stop_requests_and_batch_results() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        let impact = consumer.on_event(&Event::Machine(MachineEvent::StopRequested {
            at: Millis(1500),
            auto: true,
        }));
        assert!(impact.requires_redraw);

        consumer.on_event(&Event::Simulation(SimulationEvent::BatchFinished {
            progress: BatchProgress {
                started: 20,
                total: 20,
            },
            cancelled: false,
        }));

        let texts: Vec<_> = consumer.message_log().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["Auto-stop", "Simulation of 20 spins finished"]);
        assert_eq!(
            consumer.message_log().iter().next().map(|e| e.level),
            Some(MessageLevel::Info)
        );
    }

    #[test]
    fn settled_reels_are_not_logged() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));
        let impact = consumer.on_event(&Event::Machine(MachineEvent::ReelSettled {
            reel: 0,
            window: Default::default(),
            at: Millis(700),
        }));
        assert!(!impact.requires_redraw);
        assert_eq!(consumer.message_count(), 0);
    }
}
