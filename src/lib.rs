//! Road-network routing engine with live traffic drift.
//!
//! Holds a small fixed road network, answers fastest-route queries for a
//! given vehicle class, and perturbs road traversal times to model traffic.
//! Transport layers (HTTP, UI) live outside this crate and only call into
//! the three operations re-exported below: `GraphStore::snapshot`,
//! `PathFinder::find_path` and `TrafficSimulator::update_traffic`.

pub mod graph;
pub mod routing;
pub mod seed;
pub mod store;
pub mod traffic;
pub mod types;

pub use graph::{GraphBuilder, RoadGraph};
pub use routing::{PathFinder, Route, RouteError};
pub use seed::seed_network;
pub use store::{GraphSnapshot, GraphStore};
pub use traffic::{TrafficSimulator, UPDATE_INTERVAL};
pub use types::{Location, RoadClass, RoadSegment, Vehicle};
