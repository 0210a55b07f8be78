//! Facade crate for the Waymark route planner.
//!
//! This crate re-exports the core route model, the in-memory route store, the
//! waypoint optimizer, and the `GeoJSON` exporter from `waymark-core`.

#![forbid(unsafe_code)]

pub use waymark_core::{
    Coordinate, EARTH_RADIUS_M, NearestNeighbour, OptimizeError, Route, RouteBounds, RouteColor,
    RouteId, RouteOptions, RoutePoint, RouteStore, RouteStoreError, TravelMode, WaypointOptimizer,
    distance, estimate_duration, format_distance, format_duration, initial_bearing,
    route_length, route_to_geojson,
};

#[cfg(feature = "test-support")]
pub use waymark_core::test_support;
