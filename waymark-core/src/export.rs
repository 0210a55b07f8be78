//! `GeoJSON` export of routes.
//!
//! Positions are written longitude first, as `GeoJSON` requires, even though
//! [`Coordinate`](crate::Coordinate) lists latitude first.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::{Route, RoutePoint};

/// Convert a route into a feature collection.
///
/// The collection holds one `LineString` feature for the whole route,
/// followed by one `Point` feature per waypoint in route order.
///
/// # Examples
/// ```
/// use waymark_core::{RouteOptions, RoutePoint, RouteStore, route_to_geojson};
///
/// let mut store = RouteStore::new();
/// let route = store.create_route(
///     "Walk",
///     vec![RoutePoint::new(55.75, 37.61), RoutePoint::new(55.76, 37.62)],
///     RouteOptions::default(),
/// );
/// let collection = route_to_geojson(route);
/// assert_eq!(collection.features.len(), 3);
/// ```
pub fn route_to_geojson(route: &Route) -> FeatureCollection {
    let mut features = Vec::with_capacity(route.points().len() + 1);
    features.push(line_feature(route));
    features.extend(
        route
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| point_feature(index, point)),
    );
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn line_feature(route: &Route) -> Feature {
    let coordinates = route.points().iter().map(position).collect();
    let mut properties = JsonObject::new();
    properties.insert("name".into(), JsonValue::from(route.name()));
    properties.insert("distance".into(), JsonValue::from(route.distance()));
    properties.insert(
        "duration".into(),
        JsonValue::from(route.duration().as_secs()),
    );
    feature(Value::LineString(coordinates), properties)
}

fn point_feature(index: usize, point: &RoutePoint) -> Feature {
    // An empty label counts as unset.
    let name = point
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map_or_else(|| format!("Point {}", index.saturating_add(1)), str::to_owned);
    let mut properties = JsonObject::new();
    properties.insert("name".into(), JsonValue::from(name));
    if let Some(description) = &point.description {
        properties.insert("description".into(), JsonValue::from(description.as_str()));
    }
    properties.insert("order".into(), JsonValue::from(point.order()));
    feature(Value::Point(position(point)), properties)
}

fn position(point: &RoutePoint) -> Vec<f64> {
    vec![point.longitude(), point.latitude()]
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
