//! Unified error types surfaced by the runtime API.
//!
//! Game outcomes are never errors; these only describe failures of the
//! plumbing between a handle and the simulation worker.
use simon_core::StateError;
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("initial game state is invalid: {0}")]
    InvalidInitialState(#[source] StateError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
