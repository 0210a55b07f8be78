//! Behavioural tests for route optimization using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use waymark_core::{Route, RouteId, RouteOptions, RoutePoint, RouteStore, RouteStoreError};

#[derive(Debug)]
struct OptimizerWorld {
    store: RefCell<RouteStore>,
    route_id: RefCell<Option<RouteId>>,
    before: RefCell<Option<Route>>,
}

impl OptimizerWorld {
    fn new() -> Self {
        Self {
            store: RefCell::new(RouteStore::with_seed(21)),
            route_id: RefCell::new(None),
            before: RefCell::new(None),
        }
    }

    fn store_route(&self, points: Vec<RoutePoint>) {
        let id = self
            .store
            .borrow_mut()
            .create_route("Optimizer", points, RouteOptions::default())
            .id()
            .clone();
        self.before.replace(self.store.borrow().get(&id).cloned());
        self.route_id.replace(Some(id));
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn route(&self) -> Route {
        let id = self
            .route_id
            .borrow()
            .clone()
            .expect("a route should be stored before this step");
        self.store
            .borrow()
            .get(&id)
            .cloned()
            .expect("route should remain stored")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn before(&self) -> Route {
        self.before
            .borrow()
            .clone()
            .expect("a snapshot should be taken before this step")
    }
}

#[fixture]
fn world() -> OptimizerWorld {
    OptimizerWorld::new()
}

#[given("a store holding a zigzag route along the equator")]
fn given_zigzag(world: &OptimizerWorld) {
    world.store_route(vec![
        RoutePoint::new(0.0, 0.0).with_name("west anchor"),
        RoutePoint::new(0.0, 0.4),
        RoutePoint::new(0.0, 0.1),
        RoutePoint::new(0.0, 0.3),
        RoutePoint::new(0.0, 0.2),
        RoutePoint::new(0.0, 0.5).with_name("east anchor"),
    ]);
}

#[given("a store holding a two-point route")]
fn given_two_points(world: &OptimizerWorld) {
    world.store_route(vec![RoutePoint::new(0.0, 0.0), RoutePoint::new(0.0, 1.0)]);
}

#[when("I optimize the route")]
fn when_optimize(world: &OptimizerWorld) {
    let id = world.route().id().clone();
    // Failures are inspected through the store's error slot.
    let _outcome = world.store.borrow_mut().optimize(&id);
}

#[then("the interior points are visited from west to east")]
fn then_west_to_east(world: &OptimizerWorld) {
    let longitudes: Vec<f64> = world
        .route()
        .points()
        .iter()
        .map(RoutePoint::longitude)
        .collect();
    assert_eq!(longitudes, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
}

#[then("the first and last points are unchanged")]
fn then_anchors_kept(world: &OptimizerWorld) {
    let before = world.before();
    let after = world.route();
    assert_eq!(
        after.points().first().map(|p| p.coordinate),
        before.points().first().map(|p| p.coordinate)
    );
    assert_eq!(
        after.points().last().map(|p| p.coordinate),
        before.points().last().map(|p| p.coordinate)
    );
    let orders: Vec<usize> = after.points().iter().map(RoutePoint::order).collect();
    assert_eq!(orders, (0..after.points().len()).collect::<Vec<_>>());
}

#[then("the route is shorter than before")]
fn then_shorter(world: &OptimizerWorld) {
    assert!(world.route().distance() < world.before().distance());
    assert!(world.route().duration() <= world.before().duration());
}

#[then("the store reports insufficient points")]
fn then_insufficient(world: &OptimizerWorld) {
    let store = world.store.borrow();
    assert!(matches!(
        store.last_error(),
        Some(RouteStoreError::InsufficientPoints { count: 2, .. })
    ));
}

#[then("the stored route is unchanged")]
fn then_unchanged(world: &OptimizerWorld) {
    assert_eq!(world.route(), world.before());
}

#[scenario(path = "tests/features/optimizer.feature", index = 0)]
fn reorder_zigzag(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/optimizer.feature", index = 1)]
fn two_point_route(world: OptimizerWorld) {
    let _ = world;
}
