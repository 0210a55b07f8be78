//! Proptest strategies for waypoint and route property tests.

use proptest::prelude::*;
use waymark_core::{Coordinate, RoutePoint};

/// Strategy for a coordinate anywhere on the globe.
pub fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0_f64, -180.0_f64..=180.0_f64)
        .prop_map(|(latitude, longitude)| Coordinate::new(latitude, longitude))
}

/// Strategy for a waypoint within a city-sized box, optionally named.
pub fn local_point_strategy() -> impl Strategy<Value = RoutePoint> {
    (
        55.6_f64..55.9_f64,
        37.4_f64..37.8_f64,
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(latitude, longitude, name)| {
            let point = RoutePoint::new(latitude, longitude);
            match name {
                Some(name) => point.with_name(name),
                None => point,
            }
        })
}

/// Strategy for a list of local waypoints whose length lies in the given range.
pub fn point_list_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<RoutePoint>> {
    proptest::collection::vec(local_point_strategy(), min_count..=max_count)
}

/// Whether `orders` counts up from zero without gaps.
pub fn is_contiguous(orders: &[usize]) -> bool {
    orders.iter().copied().eq(0..orders.len())
}
