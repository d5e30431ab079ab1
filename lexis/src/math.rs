use crate::Float;

/// Round `value` to one fractional digit.
fn round_to_tenth(value: Float) -> Float {
    (value * 10.0).round() / 10.0
}

/// Average of `total` over `count`, rounded to one fractional digit.
///
/// Returns `0.0` when `count` is zero instead of dividing by zero.
pub(crate) fn mean_rounded(total: usize, count: usize) -> Float {
    if count == 0 {
        return 0.0;
    }

    round_to_tenth(total as Float / count as Float)
}

/// Estimated reading time in whole minutes.
///
/// Ceiling of `word_count / words_per_minute`; zero words always read in
/// zero minutes. A rate of `0` is clamped to `1` to keep the division total.
pub(crate) fn reading_time_minutes(word_count: usize, words_per_minute: u32) -> usize {
    word_count.div_ceil(words_per_minute.max(1) as usize)
}

/// Scale `value` against its display `cap`, as a percentage capped at 100.
///
/// This is a presentation helper for progress indicators; it carries no
/// statistical meaning. A cap of `0` reports a full gauge.
///
/// ```rust
/// use lexis::normalize_for_display;
///
/// assert_eq!(normalize_for_display(250, 1000), 25.0);
/// assert_eq!(normalize_for_display(2000, 1000), 100.0);
/// ```
pub fn normalize_for_display(value: usize, cap: usize) -> Float {
    ((value as Float / cap as Float) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rounded() {
        assert_eq!(mean_rounded(10, 2), 5.0);
        assert_eq!(mean_rounded(10, 3), 3.3);
        assert_eq!(mean_rounded(13, 2), 6.5);
        // Zero denominator resolves to zero, not an error
        assert_eq!(mean_rounded(0, 0), 0.0);
        assert_eq!(mean_rounded(42, 0), 0.0);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time_minutes(0, 200), 0);
        assert_eq!(reading_time_minutes(1, 200), 1);
        assert_eq!(reading_time_minutes(199, 200), 1);
        assert_eq!(reading_time_minutes(200, 200), 1);
        assert_eq!(reading_time_minutes(201, 200), 2);
        assert_eq!(reading_time_minutes(400, 200), 2);
        // A zero rate is clamped rather than dividing by zero
        assert_eq!(reading_time_minutes(100, 0), 100);
    }

    #[test]
    fn test_normalize_for_display() {
        assert_eq!(normalize_for_display(0, 1000), 0.0);
        assert_eq!(normalize_for_display(500, 1000), 50.0);
        assert_eq!(normalize_for_display(1000, 1000), 100.0);
        // Values past the cap saturate at 100
        assert_eq!(normalize_for_display(9999, 1000), 100.0);
        // Degenerate caps saturate too
        assert_eq!(normalize_for_display(0, 0), 100.0);
        assert_eq!(normalize_for_display(5, 0), 100.0);
    }
}
