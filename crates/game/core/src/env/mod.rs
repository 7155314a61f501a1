//! Read-only services consulted by the engine.
//!
//! Simon only needs a source of randomness; it is abstracted behind
//! [`RngOracle`] so tests and replays can pin the sequence.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
