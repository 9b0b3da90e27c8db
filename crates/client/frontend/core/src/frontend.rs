//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the slot machine via RuntimeHandle:
/// - Subscribe to events (Machine, Outcome, Simulation)
/// - Send control commands (spin, stop, simulate)
/// - Query current state
///
/// Frontends do NOT own the Runtime - they receive a handle for communication only.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct MyFrontend;
///
/// #[async_trait]
/// impl Frontend for MyFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(runtime::Topic::Outcome);
///         handle.start_spin().await?;
///
///         if let Ok(event) = events.recv().await {
///             println!("{event:?}");
///         }
///
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should block until the user quits the application.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
