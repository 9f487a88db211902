//! Frozen time for event timestamps in tests.

use chrono::{DateTime, TimeZone, Utc};
use sanctum_core::clock::Clock;

/// A `Clock` stuck at one instant, so recorded events compare equal across
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2026-01-15 10:00:00 UTC, the instant every workspace test runs at.
///
/// # Panics
///
/// Never in practice; the literal date is valid.
#[must_use]
pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_never_moves() {
        let clock = fixed_clock();

        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2026-01-15T10:00:00+00:00");
    }
}
