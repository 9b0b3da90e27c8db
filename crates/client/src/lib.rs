//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (slot machine worker and event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! - **Client**: Composition root, lifecycle management
//! - **Runtime**: Timed state machine, event emission
//! - **Frontend**: User interaction, event consumption, rendering (via RuntimeHandle only)

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an already running runtime and a frontend
/// 2. `Client::run()` transfers control to the frontend (blocking until quit)
/// 3. When the frontend returns, its handle is dropped and the runtime worker
///    is shut down, releasing every pending timer
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend to completion, then shut the runtime down.
    ///
    /// A frontend error takes precedence over a shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;
        if let Err(error) = &frontend_result {
            tracing::error!("Frontend error: {:#}", error);
        }

        let shutdown_result = runtime.shutdown().await;
        frontend_result?;
        shutdown_result?;

        tracing::info!("Runtime worker stopped");
        Ok(())
    }
}
