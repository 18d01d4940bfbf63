use std::fmt;

/// Snapshot of a stopwatch's duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// `start` was never called.
    NotStarted,
    /// Started but not stopped yet.
    Running,
    /// Seconds between start and stop. Negative when the stop timestamp
    /// predates the latest start.
    Elapsed(f64),
}

impl Reading {
    /// Numeric form: `-inf` when not started, `inf` while running.
    pub fn as_secs_f64(self) -> f64 {
        match self {
            Self::NotStarted => f64::NEG_INFINITY,
            Self::Running => f64::INFINITY,
            Self::Elapsed(secs) => secs,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Self::Elapsed(_))
    }
}

impl From<Reading> for f64 {
    fn from(reading: Reading) -> Self {
        reading.as_secs_f64()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("-inf"),
            Self::Running => f.write_str("inf"),
            Self::Elapsed(secs) => write!(f, "{secs:.5}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_render_as_infinity() {
        assert_eq!(Reading::NotStarted.to_string(), "-inf");
        assert_eq!(Reading::Running.to_string(), "inf");
        assert_eq!(Reading::NotStarted.as_secs_f64(), f64::NEG_INFINITY);
        assert_eq!(f64::from(Reading::Running), f64::INFINITY);
    }

    #[test]
    fn test_elapsed_has_five_decimals() {
        assert_eq!(Reading::Elapsed(1.5).to_string(), "1.50000");
        assert_eq!(Reading::Elapsed(0.0).to_string(), "0.00000");
        assert_eq!(Reading::Elapsed(12.345_678_9).to_string(), "12.34568");
        assert_eq!(Reading::Elapsed(-0.25).to_string(), "-0.25000");
    }

    #[test]
    fn test_is_finite() {
        assert!(!Reading::NotStarted.is_finite());
        assert!(!Reading::Running.is_finite());
        assert!(Reading::Elapsed(3.0).is_finite());
    }
}
