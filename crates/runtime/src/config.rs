//! Runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

use simon_core::FlashTiming;

/// How the worker seeds each new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Draw a fresh seed from the thread RNG on every start.
    #[default]
    Random,
    /// Reuse the same seed, so every game replays the same sequence.
    Fixed(u64),
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub flash_timing: FlashTiming,
    pub seed: SeedPolicy,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            flash_timing: FlashTiming::default(),
            seed: SeedPolicy::Random,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIMON_FLASH_BASE_MS` - Flash interval at round zero (default: 1000)
    /// - `SIMON_FLASH_DECAY` - Per-round interval multiplier (default: 0.9)
    /// - `SIMON_FLASH_MIN_MS` - Lower bound for the interval (default: 150)
    /// - `SIMON_SEED` - Fixed seed for replayable games (default: random per game)
    /// - `SIMON_EVENT_BUFFER` - Per-topic event buffer (default: 100)
    /// - `SIMON_COMMAND_BUFFER` - Command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let mut timing = config.flash_timing;

        if let Some(ms) = read_env::<u64>("SIMON_FLASH_BASE_MS") {
            timing.base_interval = Duration::from_millis(ms);
        }
        if let Some(decay) = read_env::<f64>("SIMON_FLASH_DECAY") {
            timing.decay = decay;
        }
        if let Some(ms) = read_env::<u64>("SIMON_FLASH_MIN_MS") {
            timing.min_interval = Duration::from_millis(ms);
        }
        config.flash_timing = timing.sanitized();

        if let Some(seed) = read_env::<u64>("SIMON_SEED") {
            config.seed = SeedPolicy::Fixed(seed);
        }

        if let Some(capacity) = read_env::<usize>("SIMON_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SIMON_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_flash_timing(mut self, timing: FlashTiming) -> Self {
        self.flash_timing = timing.sanitized();
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
