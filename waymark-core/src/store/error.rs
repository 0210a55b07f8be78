use thiserror::Error;

use crate::RouteId;
use crate::optimize::{MIN_OPTIMIZABLE_POINTS, OptimizeError};

/// Errors recorded by [`RouteStore`](crate::RouteStore) operations.
///
/// Both conditions are recoverable: the failing operation leaves the store
/// unchanged and every other route is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteStoreError {
    /// No route with the given id exists in the store.
    #[error("route {id} not found")]
    RouteNotFound {
        /// Id that was looked up.
        id: RouteId,
    },
    /// The route has too few points to optimize.
    #[error(
        "route {id} has {count} points; at least {MIN_OPTIMIZABLE_POINTS} are required to optimize"
    )]
    InsufficientPoints {
        /// Route that was to be optimized.
        id: RouteId,
        /// Number of points the route holds.
        count: usize,
    },
}

impl RouteStoreError {
    pub(crate) fn not_found(id: &RouteId) -> Self {
        Self::RouteNotFound { id: id.clone() }
    }

    pub(crate) fn from_optimize(id: &RouteId, source: OptimizeError) -> Self {
        match source {
            OptimizeError::InsufficientPoints { count } => Self::InsufficientPoints {
                id: id.clone(),
                count,
            },
        }
    }
}
