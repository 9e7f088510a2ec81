// SPDX-License-Identifier: MIT

//! Shared helpers for millisecond-epoch date arithmetic.

use chrono::Utc;

/// Milliseconds in one whole day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Current wall-clock time as milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Whole days elapsed between two millisecond timestamps.
///
/// Floor division of the raw delta, not calendar-day boundaries; two
/// timestamps 23 hours apart on different calendar days count as 0 days.
/// Negative when `later` precedes `earlier`.
pub fn whole_days_between(earlier: i64, later: i64) -> i64 {
    (later - earlier).div_euclid(MS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instant_is_zero_days() {
        assert_eq!(whole_days_between(1_700_000_000_000, 1_700_000_000_000), 0);
    }

    #[test]
    fn test_just_under_a_day_is_zero() {
        let t = 1_700_000_000_000;
        assert_eq!(whole_days_between(t, t + MS_PER_DAY - 1), 0);
    }

    #[test]
    fn test_exactly_one_day() {
        let t = 1_700_000_000_000;
        assert_eq!(whole_days_between(t, t + MS_PER_DAY), 1);
        assert_eq!(whole_days_between(t, t + MS_PER_DAY + 1), 1);
    }

    #[test]
    fn test_multi_day_gap() {
        let t = 1_700_000_000_000;
        assert_eq!(whole_days_between(t, t + 200_000_000), 2);
    }

    #[test]
    fn test_negative_delta_floors_down() {
        let t = 1_700_000_000_000;
        assert_eq!(whole_days_between(t, t - 1), -1);
        assert_eq!(whole_days_between(t, t - MS_PER_DAY), -1);
        assert_eq!(whole_days_between(t, t - MS_PER_DAY - 1), -2);
    }
}
