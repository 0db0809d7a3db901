//! Route computation tests
//!
//! Covers the vehicle restriction, the trivial same-endpoint route, error
//! reporting for unknown locations, and the no-path result.

use std::sync::Arc;

use traffic_router::{
    seed_network, GraphBuilder, GraphStore, PathFinder, RoadClass, RouteError, Vehicle,
};

/// Three locations where the direct A-C road is narrow: A-B 10 min,
/// B-C 10 min, A-C 5 min narrow.
fn triangle_finder() -> PathFinder {
    let mut builder = GraphBuilder::new();
    builder
        .add_location("A", "Alpha", 0.0, 0.0)
        .add_location("B", "Beta", 50.0, 0.0)
        .add_location("C", "Gamma", 100.0, 0.0);
    builder
        .add_road("A", "B", 10.0, 10, RoadClass::Local)
        .add_road("B", "C", 10.0, 10, RoadClass::Local)
        .add_road("A", "C", 5.0, 5, RoadClass::Narrow);

    let store = Arc::new(GraphStore::new(builder.build().expect("valid network")));
    PathFinder::new(store)
}

fn seed_finder() -> (Arc<GraphStore>, PathFinder) {
    let store = Arc::new(GraphStore::new(seed_network().expect("seed network builds")));
    let finder = PathFinder::new(Arc::clone(&store));
    (store, finder)
}

#[test]
fn test_same_source_and_destination_is_zero_length() {
    let (_, finder) = seed_finder();

    let route = finder
        .find_path("A", "A", Vehicle::Car)
        .expect("known locations")
        .expect("trivial route exists");

    assert_eq!(route.path, vec!["A"]);
    assert_eq!(route.time, 0);
    assert_eq!(route.distance, 0.0);
}

#[test]
fn test_car_takes_narrow_shortcut() {
    let finder = triangle_finder();

    let route = finder
        .find_path("A", "C", Vehicle::Car)
        .expect("known locations")
        .expect("route exists");

    assert_eq!(route.path, vec!["A", "C"]);
    assert_eq!(route.time, 5);
    assert_eq!(route.distance, 5.0);
}

#[test]
fn test_truck_detours_around_narrow_road() {
    let finder = triangle_finder();

    let route = finder
        .find_path("A", "C", Vehicle::Truck)
        .expect("known locations")
        .expect("detour exists");

    assert_eq!(route.path, vec!["A", "B", "C"]);
    assert_eq!(route.time, 20);
    assert_eq!(route.distance, 20.0);
}

#[test]
fn test_bike_may_use_narrow_roads() {
    let finder = triangle_finder();

    let route = finder
        .find_path("A", "C", Vehicle::Bike)
        .expect("known locations")
        .expect("route exists");

    assert_eq!(route.path, vec!["A", "C"]);
}

#[test]
fn test_truck_routes_never_cross_narrow_segments() {
    let (store, finder) = seed_finder();
    let snapshot = store.snapshot();

    // Check every location pair; no truck route may use a narrow segment
    for from in &snapshot.locations {
        for to in &snapshot.locations {
            let Some(route) = finder
                .find_path(&from.id, &to.id, Vehicle::Truck)
                .expect("known locations")
            else {
                continue;
            };

            for hop in route.path.windows(2) {
                let segment = snapshot
                    .road_segments
                    .iter()
                    .find(|s| s.source == hop[0] && s.destination == hop[1])
                    .expect("route follows existing segments");
                assert_ne!(
                    segment.class,
                    RoadClass::Narrow,
                    "truck route {:?} uses narrow segment {}->{}",
                    route.path,
                    hop[0],
                    hop[1]
                );
            }
        }
    }
}

#[test]
fn test_route_totals_match_edge_sums() {
    let (store, finder) = seed_finder();
    let snapshot = store.snapshot();

    let route = finder
        .find_path("A", "F", Vehicle::Car)
        .expect("known locations")
        .expect("seed network is connected");

    let mut time = 0;
    let mut distance = 0.0;
    for hop in route.path.windows(2) {
        let segment = snapshot
            .road_segments
            .iter()
            .find(|s| s.source == hop[0] && s.destination == hop[1])
            .expect("route follows existing segments");
        time += segment.current_time;
        distance += segment.distance;
    }

    assert_eq!(route.time, time);
    assert!((route.distance - distance).abs() < 1e-9);
}

#[test]
fn test_unknown_location_is_rejected() {
    let (_, finder) = seed_finder();

    assert_eq!(
        finder.find_path("A", "Z", Vehicle::Car),
        Err(RouteError::InvalidLocation("Z".to_string()))
    );
    assert_eq!(
        finder.find_path("Z", "A", Vehicle::Truck),
        Err(RouteError::InvalidLocation("Z".to_string()))
    );
}

#[test]
fn test_unreachable_destination_reports_no_path() {
    // The only road into C is narrow, so a truck has no route there
    let mut builder = GraphBuilder::new();
    builder
        .add_location("A", "Alpha", 0.0, 0.0)
        .add_location("B", "Beta", 50.0, 0.0)
        .add_location("C", "Gamma", 100.0, 0.0);
    builder
        .add_road("A", "B", 10.0, 10, RoadClass::Local)
        .add_road("B", "C", 5.0, 5, RoadClass::Narrow);

    let store = Arc::new(GraphStore::new(builder.build().expect("valid network")));
    let finder = PathFinder::new(store);

    assert_eq!(
        finder.find_path("A", "C", Vehicle::Truck),
        Ok(None),
        "no-path is a result, not an error"
    );
    assert!(finder
        .find_path("A", "C", Vehicle::Car)
        .expect("known locations")
        .is_some());
}

#[test]
fn test_route_is_deterministic_for_fixed_weights() {
    let (_, finder) = seed_finder();

    let first = finder.find_path("E", "B", Vehicle::Car).expect("known");
    let second = finder.find_path("E", "B", Vehicle::Car).expect("known");
    assert_eq!(first, second);
}
