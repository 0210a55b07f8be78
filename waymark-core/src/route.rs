//! Named routes through ordered waypoints.
//!
//! A [`Route`] caches its length and estimated duration. Both are derived from
//! the point sequence and the route's [`TravelMode`], and are refreshed by
//! every operation that changes the sequence.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::geometry::{estimate_duration, route_length};
use crate::point::{RoutePoint, renumber};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Unique identifier for a stored route.
///
/// Generated ids take the form `route-<unix millis>-<random base-36 suffix>`.
///
/// # Examples
/// ```
/// use waymark_core::RouteId;
///
/// let id = RouteId::from("route-1-abc");
/// assert_eq!(id.as_str(), "route-1-abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RouteId(String);

impl RouteId {
    /// Generate a fresh id from the current time and `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis());
        let suffix: String = (0..ID_SUFFIX_LEN)
            .filter_map(|_| ID_ALPHABET.choose(&mut *rng).copied().map(char::from))
            .collect();
        Self(format!("route-{millis}-{suffix}"))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RouteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// How a route is travelled. Selects the average speed used for duration
/// estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TravelMode {
    /// Private car, 50 km/h.
    #[default]
    Driving,
    /// On foot, 5 km/h.
    Walking,
    /// Public transport, 40 km/h.
    Transit,
    /// Bicycle, 15 km/h.
    Cycling,
}

impl TravelMode {
    /// Average speed for the mode in kilometres per hour.
    pub const fn speed_kmh(self) -> f64 {
        match self {
            Self::Driving => 50.0,
            Self::Walking => 5.0,
            Self::Transit => 40.0,
            Self::Cycling => 15.0,
        }
    }

    /// Lowercase name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Transit => "transit",
            Self::Cycling => "cycling",
        }
    }

    /// Parse a mode name, falling back to [`TravelMode::Driving`] when the
    /// name is not recognised.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::TravelMode;
    ///
    /// assert_eq!(TravelMode::from_name("Cycling"), TravelMode::Cycling);
    /// assert_eq!(TravelMode::from_name("hovercraft"), TravelMode::Driving);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "driving" => Self::Driving,
            "walking" => Self::Walking,
            "transit" => Self::Transit,
            "cycling" => Self::Cycling,
            other => {
                log::warn!("unknown travel mode {other:?}; falling back to driving");
                Self::Driving
            }
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display colour assigned to a route at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteColor {
    /// Colour used for every non-walking mode.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "#667eea"))]
    Standard,
    /// Colour used for walking routes.
    #[cfg_attr(feature = "serde", serde(rename = "#10b981"))]
    Walking,
}

impl RouteColor {
    /// Pick the colour for a travel mode.
    pub const fn for_mode(mode: TravelMode) -> Self {
        match mode {
            TravelMode::Walking => Self::Walking,
            TravelMode::Driving | TravelMode::Transit | TravelMode::Cycling => Self::Standard,
        }
    }

    /// CSS hex notation of the colour.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Standard => "#667eea",
            Self::Walking => "#10b981",
        }
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Options read when a route is created.
///
/// `avoid_tolls` and `avoid_highways` are carried for callers that forward
/// them to a road-aware router; they do not affect distance or duration here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RouteOptions {
    /// Travel mode used for duration estimates and colour selection.
    pub mode: TravelMode,
    /// Prefer routes without toll roads.
    pub avoid_tolls: bool,
    /// Prefer routes without highways.
    pub avoid_highways: bool,
    /// Reorder interior waypoints after creation.
    pub optimize: bool,
}

impl RouteOptions {
    /// Options for the given travel mode with every flag cleared.
    pub fn for_mode(mode: TravelMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// A named route through ordered waypoints.
///
/// Routes are created and mutated through a
/// [`RouteStore`](crate::RouteStore); the accessors here are read-only so the
/// cached metrics cannot drift from the point sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    id: RouteId,
    name: String,
    points: Vec<RoutePoint>,
    distance: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_secs"))]
    duration: Duration,
    color: RouteColor,
    mode: TravelMode,
}

impl Route {
    pub(crate) fn new(
        id: RouteId,
        name: String,
        points: Vec<RoutePoint>,
        options: &RouteOptions,
    ) -> Self {
        let mut route = Self {
            id,
            name,
            points,
            distance: 0.0,
            duration: Duration::ZERO,
            color: RouteColor::for_mode(options.mode),
            mode: options.mode,
        };
        route.recompute_metrics();
        route
    }

    /// Identifier assigned at creation.
    pub const fn id(&self) -> &RouteId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waypoints in travel order.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Total length in meters.
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Estimated travel time at the route's mode speed.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Display colour.
    pub const fn color(&self) -> RouteColor {
        self.color
    }

    /// Travel mode chosen at creation.
    pub const fn mode(&self) -> TravelMode {
        self.mode
    }

    pub(crate) fn points_mut(&mut self) -> &mut Vec<RoutePoint> {
        &mut self.points
    }

    pub(crate) fn replace_points(&mut self, points: Vec<RoutePoint>) {
        self.points = points;
        self.recompute_metrics();
    }

    /// Renumber points and refresh the cached distance and duration.
    pub(crate) fn recompute_metrics(&mut self) {
        renumber(&mut self.points);
        self.distance = route_length(&self.points);
        self.duration = estimate_duration(self.distance, self.mode);
    }
}

#[cfg(feature = "serde")]
fn serialize_secs<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_secs())
}
