//! Display formatting for day counts.
//!
//! Hosts render the raw day count as the entity state; these helpers are
//! for friendly secondary text (frontends, notifications).

/// Format a "days until" count for display.
///
/// - `0` returns the provided `zero_label`
/// - `1` is rendered as `"tomorrow"`
/// - anything else as `"in N days"`
///
/// # Examples
/// ```
/// use flagdays_types::formatting::format_days_until;
/// assert_eq!(format_days_until(0, "today"), "today");
/// assert_eq!(format_days_until(0, "Flag day!"), "Flag day!");
/// assert_eq!(format_days_until(1, "today"), "tomorrow");
/// assert_eq!(format_days_until(42, "today"), "in 42 days");
/// ```
pub fn format_days_until(days: u32, zero_label: &str) -> String {
    match days {
        0 => zero_label.to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {n} days"),
    }
}

/// Format a day count with its unit, as shown next to the entity state.
///
/// # Examples
/// ```
/// use flagdays_types::formatting::format_day_count;
/// assert_eq!(format_day_count(0), "0 days");
/// assert_eq!(format_day_count(1), "1 day");
/// assert_eq!(format_day_count(120), "120 days");
/// ```
pub fn format_day_count(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_days_until() {
        assert_eq!(format_days_until(0, "today"), "today");
        assert_eq!(format_days_until(1, "today"), "tomorrow");
        assert_eq!(format_days_until(2, "today"), "in 2 days");
        assert_eq!(format_days_until(365, "today"), "in 365 days");
    }

    #[test]
    fn test_format_day_count() {
        assert_eq!(format_day_count(0), "0 days");
        assert_eq!(format_day_count(1), "1 day");
        assert_eq!(format_day_count(366), "366 days");
    }
}
