//! Great-circle distance and bearing math on a spherical Earth.
//!
//! All functions are pure and never fail: any finite coordinate pair yields a
//! finite result.

use std::time::Duration;

use geo::{Bearing, Haversine, Point};

use crate::{Coordinate, RoutePoint, TravelMode};

/// Mean Earth radius used by [`distance`], in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const SECONDS_PER_HOUR: f64 = 3600.0;
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Haversine distance between two coordinates in meters.
///
/// # Examples
/// ```
/// use waymark_core::{Coordinate, distance};
///
/// let meters = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((meters - 111_195.0).abs() < 50.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is inherently floating-point"
)]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi_a = a.latitude.to_radians();
    let phi_b = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let raw = (delta_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push the term just past 1.0 for antipodal points.
    let h = raw.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Total length of a polyline through `points`, in meters.
///
/// Sequences with fewer than two points have zero length.
pub fn route_length(points: &[RoutePoint]) -> f64 {
    points
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(distance(from.coordinate, to.coordinate)),
            _ => None,
        })
        .sum()
}

/// Estimate travel time over `distance_m` meters at the mode's average speed.
///
/// The result is rounded to the nearest whole second. Negative or non-finite
/// distances estimate to zero.
///
/// # Examples
/// ```
/// use waymark_core::{TravelMode, estimate_duration};
///
/// let walk = estimate_duration(5_000.0, TravelMode::Walking);
/// assert_eq!(walk.as_secs(), 3600);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "speed conversion is floating-point"
)]
pub fn estimate_duration(distance_m: f64, mode: TravelMode) -> Duration {
    let hours = distance_m / METERS_PER_KILOMETER / mode.speed_kmh();
    let seconds = (hours * SECONDS_PER_HOUR).round();
    if seconds.is_finite() && seconds > 0.0 {
        Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

/// Initial great-circle bearing from `from` towards `to`.
///
/// Degrees clockwise from north in `[0, 360)`.
pub fn initial_bearing(from: Coordinate, to: Coordinate) -> f64 {
    Haversine.bearing(Point::from(from), Point::from(to))
}
