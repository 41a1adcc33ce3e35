//! Wall-clock helpers for snapshots and notifications.

use chrono::{DateTime, Utc};

/// UTC instant at which a snapshot was taken or a notification was emitted.
pub type Timestamp = DateTime<Utc>;

#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Milliseconds elapsed since `since`, clamped at zero when the clock went
/// backwards.
#[must_use]
pub fn elapsed_ms(since: Timestamp) -> u64 {
    u64::try_from((now() - since).num_milliseconds()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn should_stay_between_surrounding_readings() {
        let before = Utc::now();
        let ts = now();
        assert!(before <= ts && ts <= Utc::now());
    }

    #[test]
    fn should_measure_elapsed_milliseconds() {
        let since = now() - TimeDelta::seconds(2);
        assert!(elapsed_ms(since) >= 2_000);
    }

    #[test]
    fn should_clamp_elapsed_to_zero_when_since_is_in_the_future() {
        assert_eq!(elapsed_ms(now() + TimeDelta::hours(1)), 0);
    }
}
