//! Fixtures shared by unit tests and downstream crates' tests.
//!
//! Enabled for this crate's own tests and, elsewhere, through the
//! `test-support` feature.

use crate::{
    Route, RouteId, RouteOptions, RoutePoint, RouteStore, TravelMode, estimate_duration,
    route_length,
};

/// Three waypoints around central Moscow, listed latitude first.
pub fn sample_points() -> Vec<RoutePoint> {
    vec![
        RoutePoint::new(55.75, 37.61),
        RoutePoint::new(55.76, 37.62),
        RoutePoint::new(55.74, 37.60),
    ]
}

/// A seeded store holding one route named `Test` over [`sample_points`].
pub fn store_with_sample_route(mode: TravelMode) -> (RouteStore, RouteId) {
    let mut store = RouteStore::with_seed(42);
    let id = store
        .create_route("Test", sample_points(), RouteOptions::for_mode(mode))
        .id()
        .clone();
    (store, id)
}

/// `order` values of a route's points in sequence.
pub fn orders(route: &Route) -> Vec<usize> {
    route.points().iter().map(RoutePoint::order).collect()
}

/// Assert that a route's cached metrics and point order agree with its
/// current point sequence.
///
/// # Panics
///
/// Panics when an invariant does not hold.
#[expect(
    clippy::float_arithmetic,
    reason = "distance comparison uses an absolute tolerance"
)]
pub fn assert_route_consistent(route: &Route) {
    let expected_orders: Vec<usize> = (0..route.points().len()).collect();
    assert_eq!(orders(route), expected_orders, "orders must be contiguous");

    let expected_distance = route_length(route.points());
    assert!(
        (route.distance() - expected_distance).abs() <= 1e-6,
        "cached distance {} differs from recomputed {expected_distance}",
        route.distance()
    );
    assert_eq!(
        route.duration(),
        estimate_duration(route.distance(), route.mode()),
        "cached duration must match the route's mode"
    );
}
