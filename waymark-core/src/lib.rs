//! Core route-planning types for the Waymark engine.
//!
//! Routes are built from ordered waypoints and owned by a [`RouteStore`].
//! Every mutation re-derives the route's length and estimated travel time, so
//! the cached metrics always agree with the point sequence once an operation
//! returns. Stored routes can be reordered with a [`WaypointOptimizer`] and
//! exported as a `GeoJSON` feature collection.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bounds;
pub mod export;
pub mod format;
pub mod geometry;
pub mod optimize;
pub mod point;
pub mod route;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bounds::RouteBounds;
pub use export::route_to_geojson;
pub use format::{format_distance, format_duration};
pub use geometry::{EARTH_RADIUS_M, distance, estimate_duration, initial_bearing, route_length};
pub use optimize::{NearestNeighbour, OptimizeError, WaypointOptimizer};
pub use point::{Coordinate, RoutePoint};
pub use route::{Route, RouteColor, RouteId, RouteOptions, TravelMode};
pub use store::{RouteStore, RouteStoreError};
