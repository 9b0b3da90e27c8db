//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, message::MessageLog};

pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before querying so no update between the two is lost.
        let subscriptions =
            handle.subscribe_multiple(&[Topic::Machine, Topic::Outcome, Topic::Simulation]);
        let initial_state = handle.query_state().await?;

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Welcome! Press SPACE to spin.");

        let event_loop = EventLoop::new(
            subscriptions,
            handle,
            CliEventConsumer::new(messages),
            initial_state,
            self.frontend_config.simulation.clone(),
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            "CLI frontend exiting ({} messages logged)",
            consumer.message_count()
        );

        Ok(())
    }
}
