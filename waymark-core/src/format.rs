//! Human-readable renderings of route metrics.

use std::time::Duration;

/// Render a distance in meters for display.
///
/// Distances under a kilometre are shown in whole meters, longer ones in
/// kilometres with one decimal place.
///
/// # Examples
/// ```
/// use waymark_core::format_distance;
///
/// assert_eq!(format_distance(850.4), "850 m");
/// assert_eq!(format_distance(1_234.0), "1.2 km");
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion from meters to kilometres"
)]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters.round())
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Render a duration as hours and minutes.
///
/// Seconds are truncated; durations under an hour omit the hour part.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use waymark_core::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(3_900)), "1 h 5 min");
/// assert_eq!(format_duration(Duration::from_secs(59)), "0 min");
/// ```
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "truncating to whole minutes and hours is intended"
)]
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours} h {minutes} min")
    } else {
        format!("{minutes} min")
    }
}
