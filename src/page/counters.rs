use indicatif::HumanCount;
use std::time::Duration;

/// Fixed length of the KPI counter animation.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1200);

/// Ease-out cubic: fast start, settling into the target.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Displayed counter value `elapsed` into the animation: the eased fraction
/// of the target, floor-rounded, clamped at the target once the duration has
/// passed.
pub fn counter_value(target: u64, elapsed: Duration) -> u64 {
    let progress = (elapsed.as_secs_f64() / COUNTER_DURATION.as_secs_f64()).min(1.0);
    (target as f64 * ease_out_cubic(progress)).floor() as u64
}

/// Thousands-separated display form ("12,345").
pub fn format_count(n: u64) -> String {
    HumanCount(n).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        assert_eq!(counter_value(5000, Duration::ZERO), 0);
    }

    #[test]
    fn test_counter_ends_at_target() {
        assert_eq!(counter_value(5000, COUNTER_DURATION), 5000);
        assert_eq!(counter_value(5000, Duration::from_secs(10)), 5000);
    }

    #[test]
    fn test_counter_monotone_non_decreasing() {
        let mut last = 0;
        for ms in (0..=1200).step_by(40) {
            let v = counter_value(9876, Duration::from_millis(ms));
            assert!(v >= last, "value regressed at {} ms", ms);
            last = v;
        }
        assert_eq!(last, 9876);
    }

    #[test]
    fn test_ease_out_front_loaded() {
        // ease-out covers more than half the distance in the first half
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_format_count_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
