use core::time::Duration;

/// Timing of the flash replay that opens every round.
///
/// The interval between flashes shrinks geometrically as the round grows,
/// clamped to `min_interval` so late rounds never reach a zero delay.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashTiming {
    /// Interval at round zero.
    pub base_interval: Duration,
    /// Per-round multiplier applied to `base_interval`, in `(0, 1]`.
    pub decay: f64,
    /// Lower bound for the interval.
    pub min_interval: Duration,
}

impl FlashTiming {
    pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(1000);
    pub const DEFAULT_DECAY: f64 = 0.9;
    pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(150);

    pub fn new(base_interval: Duration, decay: f64, min_interval: Duration) -> Self {
        Self {
            base_interval,
            decay,
            min_interval,
        }
        .sanitized()
    }

    /// Forces the parameters into a usable range.
    ///
    /// Non-finite or out-of-range decay falls back to the default, and the
    /// floor never exceeds the base interval.
    pub fn sanitized(mut self) -> Self {
        if !self.decay.is_finite() || self.decay <= 0.0 || self.decay > 1.0 {
            self.decay = Self::DEFAULT_DECAY;
        }
        if self.min_interval > self.base_interval {
            self.min_interval = self.base_interval;
        }
        self
    }

    /// Spacing between consecutive flashes in `round`.
    pub fn interval(&self, round: u32) -> Duration {
        let exponent = i32::try_from(round).unwrap_or(i32::MAX);
        let scaled = self.base_interval.as_secs_f64() * self.decay.powi(exponent);
        let scaled = Duration::try_from_secs_f64(scaled).unwrap_or(Duration::ZERO);
        scaled.max(self.min_interval)
    }

    /// Delay from the start of the replay until flash `index` lights up.
    pub fn onset(&self, index: u32, round: u32) -> Duration {
        self.interval(round).saturating_mul(index)
    }

    /// How long a flash stays lit before the pad reverts.
    pub fn hold(&self, round: u32) -> Duration {
        self.interval(round) / 2
    }
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            base_interval: Self::DEFAULT_BASE_INTERVAL,
            decay: Self::DEFAULT_DECAY,
            min_interval: Self::DEFAULT_MIN_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_round_interval_matches_geometric_decay() {
        let timing = FlashTiming::default();
        assert_eq!(timing.interval(1), Duration::from_millis(900));
        assert_eq!(timing.hold(1), Duration::from_millis(450));
        assert_eq!(timing.onset(0, 1), Duration::ZERO);
        assert_eq!(timing.onset(1, 2).as_millis(), 810);
    }

    #[test]
    fn interval_is_clamped_and_non_increasing() {
        let timing = FlashTiming::default();
        let mut previous = timing.interval(0);
        for round in 1..200 {
            let current = timing.interval(round);
            assert!(current <= previous);
            assert!(current >= timing.min_interval);
            previous = current;
        }
        assert_eq!(timing.interval(u32::MAX), timing.min_interval);
    }

    #[test]
    fn sanitized_repairs_bad_parameters() {
        let timing = FlashTiming::new(
            Duration::from_millis(100),
            f64::NAN,
            Duration::from_millis(500),
        );
        assert_eq!(timing.decay, FlashTiming::DEFAULT_DECAY);
        assert_eq!(timing.min_interval, Duration::from_millis(100));

        let timing = FlashTiming::new(Duration::from_millis(100), 1.5, Duration::ZERO);
        assert_eq!(timing.decay, FlashTiming::DEFAULT_DECAY);
    }
}
