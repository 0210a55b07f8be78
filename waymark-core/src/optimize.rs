//! Waypoint reordering.
//!
//! The [`WaypointOptimizer`] trait is the seam for alternative reordering
//! strategies. [`NearestNeighbour`] is the built-in greedy heuristic: fast,
//! anchored at both ends, and not guaranteed to find the shortest tour.

use thiserror::Error;

use crate::RoutePoint;
use crate::geometry::distance;

/// Minimum number of points a route needs before reordering is meaningful.
pub const MIN_OPTIMIZABLE_POINTS: usize = 3;

/// Errors returned by [`WaypointOptimizer::reorder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The sequence is too short to have any interior points.
    #[error("at least {MIN_OPTIMIZABLE_POINTS} points are required to optimize, got {count}")]
    InsufficientPoints {
        /// Number of points supplied.
        count: usize,
    },
}

/// Reorder waypoints to shorten the total travel distance.
///
/// Implementations must keep the first and last points in place and return
/// every input point exactly once. `order` fields need not be updated; the
/// store renumbers the sequence afterwards.
pub trait WaypointOptimizer {
    /// Return a reordered copy of `points`.
    fn reorder(&self, points: &[RoutePoint]) -> Result<Vec<RoutePoint>, OptimizeError>;
}

/// Greedy nearest-neighbour ordering of interior waypoints.
///
/// Starting from the first point, the closest unvisited interior point is
/// appended repeatedly; the last point closes the sequence. Ties go to the
/// candidate that appears earliest. Runs in O(n²).
///
/// # Examples
/// ```
/// use waymark_core::{NearestNeighbour, RoutePoint, WaypointOptimizer};
///
/// let points = vec![
///     RoutePoint::new(0.0, 0.0).with_name("start"),
///     RoutePoint::new(0.0, 3.0).with_name("far"),
///     RoutePoint::new(0.0, 1.0).with_name("near"),
///     RoutePoint::new(0.0, 4.0).with_name("end"),
/// ];
/// let ordered = NearestNeighbour.reorder(&points).unwrap();
/// let names: Vec<_> = ordered.iter().filter_map(|p| p.name.as_deref()).collect();
/// assert_eq!(names, ["start", "near", "far", "end"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbour;

impl WaypointOptimizer for NearestNeighbour {
    fn reorder(&self, points: &[RoutePoint]) -> Result<Vec<RoutePoint>, OptimizeError> {
        let count = points.len();
        let (start, middle, end) = match points {
            [start, middle @ .., end] if count >= MIN_OPTIMIZABLE_POINTS => (start, middle, end),
            _ => return Err(OptimizeError::InsufficientPoints { count }),
        };

        let mut remaining: Vec<&RoutePoint> = middle.iter().collect();
        let mut ordered = Vec::with_capacity(count);
        ordered.push(start.clone());

        let mut current = start;
        while let Some(nearest) = nearest_index(current, &remaining) {
            let next = remaining.remove(nearest);
            ordered.push(next.clone());
            current = next;
        }

        ordered.push(end.clone());
        Ok(ordered)
    }
}

/// Index of the candidate closest to `from`; the first minimum wins.
fn nearest_index(from: &RoutePoint, candidates: &[&RoutePoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let meters = distance(from.coordinate, candidate.coordinate);
        match best {
            Some((_, best_meters)) if meters >= best_meters => {}
            _ => best = Some((index, meters)),
        }
    }
    best.map(|(index, _)| index)
}
