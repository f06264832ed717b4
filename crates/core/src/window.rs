use std::fmt;
use std::time::Duration;

/// Lookback duration over which a rate or average is computed.
///
/// Always rendered in whole minutes, e.g. `5m`. Sub-minute precision is
/// rounded to the nearest minute when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeWindow(Duration);

impl TimeWindow {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn from_minutes(minutes: u64) -> Self {
        Self(Duration::from_secs(minutes.saturating_mul(60)))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn minutes(&self) -> f64 {
        self.0.as_secs_f64() / 60.0
    }
}

impl From<Duration> for TimeWindow {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}m", self.minutes())
    }
}
