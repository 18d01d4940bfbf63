//! Severity policy for a [`Reading`].

use serde::{Deserialize, Serialize};

use crate::reading::Reading;

/// Outcome category of a threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never started.
    Skipped,
    /// Started but never stopped.
    Running,
    /// At or above the `veryslow` threshold.
    VerySlow,
    /// At or above the `slow` threshold.
    Slow,
    /// Below both thresholds.
    Normal,
}

/// Slow/very-slow boundaries in seconds.
///
/// Both default to infinity, so nothing is considered slow unless a
/// boundary is configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub slow: f64,
    pub veryslow: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            slow: f64::INFINITY,
            veryslow: f64::INFINITY,
        }
    }
}

impl Thresholds {
    pub fn new(slow: f64, veryslow: f64) -> Self {
        Self { slow, veryslow }
    }

    pub fn with_slow(mut self, slow: f64) -> Self {
        self.slow = slow;
        self
    }

    pub fn with_veryslow(mut self, veryslow: f64) -> Self {
        self.veryslow = veryslow;
        self
    }

    /// Classify a reading. `veryslow` is checked before `slow`.
    pub fn classify(&self, reading: Reading) -> Category {
        match reading {
            Reading::NotStarted => Category::Skipped,
            Reading::Running => Category::Running,
            Reading::Elapsed(secs) if secs >= self.veryslow => Category::VerySlow,
            Reading::Elapsed(secs) if secs >= self.slow => Category::Slow,
            Reading::Elapsed(_) => Category::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_seconds_against_thresholds() {
        let two = Reading::Elapsed(2.0);
        assert_eq!(Thresholds::new(1.0, 5.0).classify(two), Category::Slow);
        assert_eq!(Thresholds::new(1.0, 1.5).classify(two), Category::VerySlow);
        assert_eq!(Thresholds::default().classify(two), Category::Normal);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let thresholds = Thresholds::new(1.0, 2.0);
        assert_eq!(thresholds.classify(Reading::Elapsed(1.0)), Category::Slow);
        assert_eq!(thresholds.classify(Reading::Elapsed(2.0)), Category::VerySlow);
        assert_eq!(thresholds.classify(Reading::Elapsed(0.999)), Category::Normal);
    }

    #[test]
    fn test_sentinels_ignore_thresholds() {
        let thresholds = Thresholds::new(0.0, 0.0);
        assert_eq!(thresholds.classify(Reading::NotStarted), Category::Skipped);
        assert_eq!(thresholds.classify(Reading::Running), Category::Running);
    }

    #[test]
    fn test_veryslow_wins_when_below_slow() {
        let thresholds = Thresholds::new(5.0, 1.0);
        assert_eq!(thresholds.classify(Reading::Elapsed(2.0)), Category::VerySlow);
    }

    #[test]
    fn test_builders() {
        let thresholds = Thresholds::default().with_slow(0.5).with_veryslow(3.0);
        assert_eq!(thresholds, Thresholds::new(0.5, 3.0));
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_infinity() {
        let thresholds: Thresholds = serde_json::from_str(r#"{"slow": 0.25}"#).unwrap();
        assert_eq!(thresholds.slow, 0.25);
        assert!(thresholds.veryslow.is_infinite());
    }
}
