#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "distance properties compare floating-point sums"
)]

//! Property-based tests for geometry, the route store, and the optimizer.
//!
//! # Invariants tested
//!
//! - **Symmetry:** distance from `a` to `b` equals distance from `b` to `a`.
//! - **Identity:** a point is zero metres from itself.
//! - **Triangle inequality:** no detour is shorter than the direct hop.
//! - **Contiguous order:** edits and optimization keep `order` at `0..n`.
//! - **Anchors:** optimization keeps the first and last waypoints in place.
//! - **Permutation:** optimization neither drops nor duplicates waypoints.

mod proptest_support;

use proptest::prelude::*;
use waymark_core::{
    NearestNeighbour, RouteOptions, RoutePoint, RouteStore, TravelMode, WaypointOptimizer,
    distance, estimate_duration, route_length,
};

use proptest_support::{coordinate_strategy, is_contiguous, point_list_strategy};

const TOLERANCE_M: f64 = 1e-6;

fn orders(points: &[RoutePoint]) -> Vec<usize> {
    points.iter().map(RoutePoint::order).collect()
}

fn sorted_coordinates(points: &[RoutePoint]) -> Vec<(f64, f64)> {
    let mut coordinates: Vec<(f64, f64)> = points
        .iter()
        .map(|point| (point.latitude(), point.longitude()))
        .collect();
    coordinates.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    coordinates
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn distance_is_symmetric(a in coordinate_strategy(), b in coordinate_strategy()) {
        prop_assert!((distance(a, b) - distance(b, a)).abs() <= TOLERANCE_M);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate_strategy()) {
        prop_assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn distance_obeys_triangle_inequality(
        a in coordinate_strategy(),
        b in coordinate_strategy(),
        c in coordinate_strategy(),
    ) {
        // Allow a millimetre of slack for rounding near antipodes.
        prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-3);
    }

    #[test]
    fn duration_never_decreases_with_distance(
        shorter in 0.0_f64..1.0e6,
        extra in 0.0_f64..1.0e6,
    ) {
        for mode in [
            TravelMode::Driving,
            TravelMode::Walking,
            TravelMode::Transit,
            TravelMode::Cycling,
        ] {
            prop_assert!(
                estimate_duration(shorter, mode) <= estimate_duration(shorter + extra, mode)
            );
        }
    }

    #[test]
    fn edits_keep_orders_contiguous(
        points in point_list_strategy(0, 12),
        extra in point_list_strategy(1, 4),
        removals in proptest::collection::vec(0_usize..16, 0..6),
        seed in any::<u64>(),
    ) {
        let mut store = RouteStore::with_seed(seed);
        let id = store
            .create_route("Property", points, RouteOptions::default())
            .id()
            .clone();

        for point in extra {
            store.add_point(&id, point).expect("route exists");
        }
        for index in removals {
            store.remove_point(&id, index).expect("route exists");
        }

        let route = store.get(&id).expect("route stored");
        prop_assert!(is_contiguous(&orders(route.points())));
        prop_assert!((route.distance() - route_length(route.points())).abs() <= TOLERANCE_M);
        prop_assert_eq!(route.duration(), estimate_duration(route.distance(), route.mode()));
        prop_assert!(store.last_error().is_none());
    }

    #[test]
    fn optimization_keeps_anchors_and_membership(
        points in point_list_strategy(3, 10),
    ) {
        let reordered = NearestNeighbour
            .reorder(&points)
            .expect("three or more points can be reordered");

        prop_assert_eq!(reordered.len(), points.len());
        prop_assert_eq!(
            reordered.first().map(|p| p.coordinate),
            points.first().map(|p| p.coordinate)
        );
        prop_assert_eq!(
            reordered.last().map(|p| p.coordinate),
            points.last().map(|p| p.coordinate)
        );
        prop_assert_eq!(sorted_coordinates(&reordered), sorted_coordinates(&points));
    }

    #[test]
    fn optimized_route_stays_consistent(
        points in point_list_strategy(3, 10),
        seed in any::<u64>(),
    ) {
        let mut store = RouteStore::with_seed(seed);
        let id = store
            .create_route("Property", points, RouteOptions::for_mode(TravelMode::Cycling))
            .id()
            .clone();

        store.optimize(&id).expect("optimization should succeed");

        let route = store.get(&id).expect("route stored");
        prop_assert!(is_contiguous(&orders(route.points())));
        prop_assert!((route.distance() - route_length(route.points())).abs() <= TOLERANCE_M);
        prop_assert_eq!(route.mode(), TravelMode::Cycling);
    }
}
