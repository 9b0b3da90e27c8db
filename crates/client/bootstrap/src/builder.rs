//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};
use runtime::Runtime;
use tracing::info;

use crate::config::ClientConfig;

/// Builder that assembles the runtime and configuration for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        self.config
            .slot
            .validate()
            .context("invalid slot timing configuration")?;

        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .build()
            .await?;

        info!(
            seed = ?self.config.seed,
            session = ?self.config.session_id,
            "slot runtime assembled"
        );

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub runtime: Runtime,
}
