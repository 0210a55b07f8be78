//! In-memory ownership of routes.
//!
//! The [`RouteStore`] owns every [`Route`] it creates and is the only way to
//! mutate one. Each mutating operation recomputes point order, distance and
//! duration before returning.
//!
//! Failures are returned to the caller and mirrored into a last-error slot so
//! UI layers can poll a single place for the most recent problem. The slot
//! keeps its value until [`RouteStore::clear_error`] is called.
//!
//! The store is not synchronised; wrap it in a mutex to share it between
//! threads.

mod error;

use std::collections::HashMap;

use geojson::FeatureCollection;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::export::route_to_geojson;
use crate::optimize::{NearestNeighbour, WaypointOptimizer};
use crate::{Coordinate, Route, RouteBounds, RouteId, RouteOptions, RoutePoint};

pub use error::RouteStoreError;

/// Owner of all routes in a planning session.
///
/// # Examples
///
/// ```
/// use waymark_core::{RouteOptions, RoutePoint, RouteStore};
///
/// let mut store = RouteStore::new();
/// let id = store
///     .create_route(
///         "Errands",
///         vec![RoutePoint::new(55.75, 37.61), RoutePoint::new(55.76, 37.62)],
///         RouteOptions::default(),
///     )
///     .id()
///     .clone();
///
/// store.add_point(&id, RoutePoint::new(55.74, 37.60)).unwrap();
/// let route = store.get(&id).unwrap();
/// assert_eq!(route.points().len(), 3);
/// assert_eq!(route.points()[2].order(), 2);
/// ```
#[derive(Debug)]
pub struct RouteStore {
    routes: HashMap<RouteId, Route>,
    creation_order: Vec<RouteId>,
    active: Option<RouteId>,
    last_error: Option<RouteStoreError>,
    rng: ChaCha8Rng,
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteStore {
    /// Create an empty store seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Create an empty store whose id suffixes are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            routes: HashMap::new(),
            creation_order: Vec::new(),
            active: None,
            last_error: None,
            rng,
        }
    }

    /// Create and store a route.
    ///
    /// Point `order` values are replaced by their indices and the metrics are
    /// derived from `options.mode`. Empty `points` yield a zero-length route.
    pub fn create_route(
        &mut self,
        name: impl Into<String>,
        points: Vec<RoutePoint>,
        options: RouteOptions,
    ) -> &Route {
        let id = self.fresh_id();
        let route = Route::new(id.clone(), name.into(), points, &options);
        log::debug!(
            "created route {id} with {} points ({:.0} m, {} mode)",
            route.points().len(),
            route.distance(),
            route.mode()
        );
        self.creation_order.push(id.clone());
        self.routes.entry(id).or_insert(route)
    }

    fn fresh_id(&mut self) -> RouteId {
        loop {
            let id = RouteId::generate(&mut self.rng);
            if !self.routes.contains_key(&id) {
                return id;
            }
        }
    }

    /// Look up a route.
    pub fn get(&self, id: &RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Iterate routes in creation order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.creation_order
            .iter()
            .filter_map(|id| self.routes.get(id))
    }

    /// Append a point to the end of a route.
    ///
    /// # Errors
    ///
    /// [`RouteStoreError::RouteNotFound`] when `id` is unknown.
    pub fn add_point(&mut self, id: &RouteId, point: RoutePoint) -> Result<(), RouteStoreError> {
        let Some(route) = self.routes.get_mut(id) else {
            return Err(self.record(RouteStoreError::not_found(id)));
        };
        route.points_mut().push(point);
        route.recompute_metrics();
        Ok(())
    }

    /// Remove the point at `index` and return it.
    ///
    /// An index past the end is ignored and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`RouteStoreError::RouteNotFound`] when `id` is unknown.
    pub fn remove_point(
        &mut self,
        id: &RouteId,
        index: usize,
    ) -> Result<Option<RoutePoint>, RouteStoreError> {
        let Some(route) = self.routes.get_mut(id) else {
            return Err(self.record(RouteStoreError::not_found(id)));
        };
        let len = route.points().len();
        if index >= len {
            log::debug!("ignoring removal of point {index} from route {id} with {len} points");
            return Ok(None);
        }
        let removed = route.points_mut().remove(index);
        route.recompute_metrics();
        Ok(Some(removed))
    }

    /// Reorder a route's interior points with [`NearestNeighbour`].
    ///
    /// # Errors
    ///
    /// [`RouteStoreError::RouteNotFound`] when `id` is unknown and
    /// [`RouteStoreError::InsufficientPoints`] when the route has fewer than
    /// three points.
    pub fn optimize(&mut self, id: &RouteId) -> Result<(), RouteStoreError> {
        self.optimize_with(id, &NearestNeighbour)
    }

    /// Reorder a route's points with a caller-supplied optimizer.
    ///
    /// # Errors
    ///
    /// As for [`RouteStore::optimize`].
    pub fn optimize_with<O>(&mut self, id: &RouteId, optimizer: &O) -> Result<(), RouteStoreError>
    where
        O: WaypointOptimizer + ?Sized,
    {
        let Some(route) = self.routes.get_mut(id) else {
            return Err(self.record(RouteStoreError::not_found(id)));
        };
        let before = route.distance();
        match optimizer.reorder(route.points()) {
            Ok(points) => {
                route.replace_points(points);
                log::debug!(
                    "optimized route {id}: {before:.0} m -> {:.0} m",
                    route.distance()
                );
                Ok(())
            }
            Err(source) => Err(self.record(RouteStoreError::from_optimize(id, source))),
        }
    }

    /// Remove a route and return it.
    ///
    /// Clears the active route when it is the one removed.
    ///
    /// # Errors
    ///
    /// [`RouteStoreError::RouteNotFound`] when `id` is unknown.
    pub fn delete_route(&mut self, id: &RouteId) -> Result<Route, RouteStoreError> {
        let Some(route) = self.routes.remove(id) else {
            return Err(self.record(RouteStoreError::not_found(id)));
        };
        self.creation_order.retain(|existing| existing != id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        log::debug!("deleted route {id}");
        Ok(route)
    }

    /// Remove every route and clear the active route.
    pub fn clear_all(&mut self) {
        self.routes.clear();
        self.creation_order.clear();
        self.active = None;
    }

    /// Select the active route, or clear the selection with `None`.
    ///
    /// # Errors
    ///
    /// [`RouteStoreError::RouteNotFound`] when `id` is unknown; the current
    /// selection is kept.
    pub fn set_active(&mut self, id: Option<&RouteId>) -> Result<(), RouteStoreError> {
        match id {
            None => {
                self.active = None;
                Ok(())
            }
            Some(id) if self.routes.contains_key(id) => {
                self.active = Some(id.clone());
                Ok(())
            }
            Some(id) => Err(self.record(RouteStoreError::not_found(id))),
        }
    }

    /// The active route, if one is selected.
    pub fn active(&self) -> Option<&Route> {
        self.active.as_ref().and_then(|id| self.routes.get(id))
    }

    /// Id of the active route, if one is selected.
    pub const fn active_id(&self) -> Option<&RouteId> {
        self.active.as_ref()
    }

    /// Export a route as a `GeoJSON` feature collection.
    ///
    /// # Errors
    ///
    /// [`RouteStoreError::RouteNotFound`] when `id` is unknown.
    pub fn export_geojson(&mut self, id: &RouteId) -> Result<FeatureCollection, RouteStoreError> {
        match self.routes.get(id) {
            Some(route) => Ok(route_to_geojson(route)),
            None => Err(self.record(RouteStoreError::not_found(id))),
        }
    }

    /// Bounding box of a route's points.
    ///
    /// `None` when the route is unknown or has no points.
    pub fn bounds(&self, id: &RouteId) -> Option<RouteBounds> {
        self.routes
            .get(id)
            .and_then(|route| RouteBounds::of(route.points()))
    }

    /// Centre of a route's bounding box.
    pub fn center(&self, id: &RouteId) -> Option<Coordinate> {
        self.bounds(id).map(|bounds| bounds.center)
    }

    /// Number of stored routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the store holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Whether the store holds at least one route.
    pub fn has_routes(&self) -> bool {
        !self.is_empty()
    }

    /// Sum of every stored route's distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.routes.values().map(Route::distance).sum()
    }

    /// Most recent error recorded by an operation.
    pub const fn last_error(&self) -> Option<&RouteStoreError> {
        self.last_error.as_ref()
    }

    /// Reset the error slot, returning its previous value.
    pub const fn clear_error(&mut self) -> Option<RouteStoreError> {
        self.last_error.take()
    }

    fn record(&mut self, error: RouteStoreError) -> RouteStoreError {
        log::debug!("route store operation failed: {error}");
        self.last_error = Some(error.clone());
        error
    }
}
