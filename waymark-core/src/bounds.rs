//! Bounding boxes for centring a map on a route.

use geo::{Coord, Rect};

use crate::{Coordinate, RoutePoint};

/// Latitude/longitude extent of a route's points.
///
/// The box is axis-aligned in degree space and does not model routes that
/// cross the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteBounds {
    /// Largest latitude.
    pub north: f64,
    /// Smallest latitude.
    pub south: f64,
    /// Largest longitude.
    pub east: f64,
    /// Smallest longitude.
    pub west: f64,
    /// Midpoint of the box.
    pub center: Coordinate,
}

impl RouteBounds {
    /// Compute the bounds of `points`, or `None` when there are none.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::{Coordinate, RouteBounds, RoutePoint};
    ///
    /// let bounds = RouteBounds::of(&[
    ///     RoutePoint::new(10.0, 20.0),
    ///     RoutePoint::new(12.0, 24.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(bounds.center, Coordinate::new(11.0, 22.0));
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "the centre is the arithmetic midpoint of the extent"
    )]
    pub fn of(points: &[RoutePoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = (
            first.latitude(),
            first.latitude(),
            first.longitude(),
            first.longitude(),
        );
        let (south, north, west, east) = rest
            .iter()
            .fold(seed, |(south, north, west, east), point| {
                (
                    south.min(point.latitude()),
                    north.max(point.latitude()),
                    west.min(point.longitude()),
                    east.max(point.longitude()),
                )
            });
        Some(Self {
            north,
            south,
            east,
            west,
            center: Coordinate::new((north + south) / 2.0, (east + west) / 2.0),
        })
    }

    /// The extent as a `geo` rectangle with `x = longitude`, `y = latitude`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.west,
                y: self.south,
            },
            Coord {
                x: self.east,
                y: self.north,
            },
        )
    }
}
