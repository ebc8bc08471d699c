//! Compact human formatting for in-game minute counts.

/// In-game minutes per hour.
pub const MINUTES_PER_HOUR: i32 = 60;

/// In-game minutes per day.
pub const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

/// Format a raw minute count as a compact duration string.
///
/// Zero or negative counts render as `"Ready!"`. Otherwise the count is
/// decomposed into days/hours/minutes with two dropping rules: a zero hour
/// component is omitted from the days form (minutes are always kept there,
/// even when zero), and a zero minute component is omitted from the
/// hours-only form.
///
/// ```
/// use almanac_core::duration::format_minutes;
///
/// assert_eq!(format_minutes(0), "Ready!");
/// assert_eq!(format_minutes(65), "1h 5m");
/// assert_eq!(format_minutes(1441), "1d 1m");
/// ```
pub fn format_minutes(total: i32) -> String {
    if total <= 0 {
        return "Ready!".to_string();
    }

    let days = total / MINUTES_PER_DAY;
    let hours = (total % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let minutes = total % MINUTES_PER_HOUR;

    if days > 0 {
        if hours > 0 {
            format!("{days}d {hours}h {minutes}m")
        } else {
            format!("{days}d {minutes}m")
        }
    } else if hours > 0 {
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_are_ready() {
        assert_eq!(format_minutes(0), "Ready!");
        assert_eq!(format_minutes(-5), "Ready!");
    }

    #[test]
    fn minutes_only() {
        assert_eq!(format_minutes(1), "1m");
        assert_eq!(format_minutes(59), "59m");
    }

    #[test]
    fn hours_drop_zero_minutes() {
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(65), "1h 5m");
        assert_eq!(format_minutes(120), "2h");
    }

    #[test]
    fn days_keep_zero_minutes_but_drop_zero_hours() {
        assert_eq!(format_minutes(1440), "1d 0m");
        assert_eq!(format_minutes(1441), "1d 1m");
        assert_eq!(format_minutes(1500), "1d 1h 0m");
        assert_eq!(format_minutes(2950), "2d 1h 10m");
    }

    #[test]
    fn exactly_one_day_plus_hours() {
        assert_eq!(format_minutes(1440 + 60), "1d 1h 0m");
        assert_eq!(format_minutes(1440 + 61), "1d 1h 1m");
    }
}
