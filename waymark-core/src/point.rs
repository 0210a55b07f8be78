//! Coordinates and the waypoints that make up a route.

use geo::{Coord, Point};

/// A position on the Earth's surface in degrees.
///
/// Field order is latitude first. Conversions into `geo` types map
/// `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::Coordinate;
///
/// let moscow = Coordinate::new(55.75, 37.61);
/// let coord: Coord<f64> = moscow.into();
/// assert_eq!(coord, Coord { x: 37.61, y: 55.75 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, within `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, within `[-180, 180]`.
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self(value.into())
    }
}

/// A waypoint within a route.
///
/// `order` mirrors the point's index in its route. Callers may supply a value
/// but the store overwrites it whenever the sequence changes.
///
/// # Examples
/// ```
/// use waymark_core::RoutePoint;
///
/// let point = RoutePoint::new(55.75, 37.61).with_name("Red Square");
/// assert_eq!(point.name.as_deref(), Some("Red Square"));
/// assert_eq!(point.order(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    /// Geographic position of the waypoint.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coordinate: Coordinate,
    /// Optional display label.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Optional free-form description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    order: usize,
}

impl RoutePoint {
    /// Construct an unlabelled waypoint.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self::at(Coordinate::new(latitude, longitude))
    }

    /// Construct an unlabelled waypoint at `coordinate`.
    pub const fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            name: None,
            description: None,
            order: 0,
        }
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a caller-side order hint.
    ///
    /// The hint is replaced by the point's index once it joins a route.
    #[must_use]
    pub const fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Position of the point within its route.
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }

    pub(crate) const fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

/// Overwrite each point's `order` with its index.
pub(crate) fn renumber(points: &mut [RoutePoint]) {
    for (index, point) in points.iter_mut().enumerate() {
        point.set_order(index);
    }
}
