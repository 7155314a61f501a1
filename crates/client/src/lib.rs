//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Game rules, flash timers, event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever sees a `RuntimeHandle`; the client owns the runtime
//! and shuts it down once the frontend returns.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use simon_runtime::Runtime;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the independently built layers
/// 2. `Client::run()` transfers control to the frontend (blocking)
/// 3. On frontend exit the runtime is shut down, cancelling pending flashes
pub struct Client {
    runtime: Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error if it failed, otherwise any error from
    /// shutting down the runtime.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;

        let shutdown_result = runtime.shutdown().await;
        if let Err(e) = &shutdown_result {
            tracing::error!("Runtime shutdown error: {}", e);
        }

        frontend_result?;
        shutdown_result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use simon_core::{GamePhase, Move};
    use simon_runtime::RuntimeHandle;
    use std::sync::{Arc, Mutex};

    /// Plays two perfect rounds and then a wrong press.
    struct ScriptedFrontend {
        phases: Arc<Mutex<Vec<GamePhase>>>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            handle.start_game().await?;
            for _ in 0..2 {
                for mv in handle.query_state().await?.sequence {
                    handle.press(mv).await?;
                }
            }
            let state = handle.query_state().await?;
            let wrong = match state.sequence[0] {
                Move::Red => Move::Blue,
                Move::Blue => Move::Red,
            };
            handle.press(wrong).await?;
            let after = handle.query_state().await?;

            let mut phases = self.phases.lock().unwrap();
            phases.push(state.phase);
            phases.push(after.phase);
            Ok(())
        }
    }

    #[tokio::test]
    async fn runs_frontend_and_shuts_runtime_down() {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let runtime = Runtime::builder().build().await.unwrap();
        let frontend = ScriptedFrontend {
            phases: Arc::clone(&phases),
        };

        Client::builder()
            .runtime(runtime)
            .frontend(frontend)
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        assert_eq!(
            *phases.lock().unwrap(),
            vec![GamePhase::AwaitingInput, GamePhase::Lost]
        );
    }

    #[test]
    fn build_requires_runtime_and_frontend() {
        let err = Client::builder().build().err().unwrap();
        assert!(err.to_string().contains("Runtime is required"));
    }
}
