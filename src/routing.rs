//! Fastest-route queries over live traffic weights

use log::debug;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::store::GraphStore;
use crate::types::Vehicle;

/// A computed route
///
/// `path` lists location ids from source to destination inclusive; `time`
/// is total traversal minutes at current traffic, `distance` total
/// kilometers. A source-equals-destination query yields a single-entry
/// path with zero time and distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub time: u32,
    pub distance: f64,
}

/// Errors a route request can fail with. An unreachable destination is not
/// an error; it is reported as a `None` route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown location id {0:?}")]
    InvalidLocation(String),
}

/// Computes minimum-time routes against the shared graph
///
/// Each query runs under a single read guard, so it sees one consistent
/// set of traffic weights even while the simulator is running.
pub struct PathFinder {
    store: Arc<GraphStore>,
}

impl PathFinder {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }

    /// Finds the fastest current route from `source` to `destination` for
    /// the given vehicle class.
    ///
    /// Returns `Ok(None)` when no traversable route exists and
    /// [`RouteError::InvalidLocation`] when either endpoint is unknown.
    pub fn find_path(
        &self,
        source: &str,
        destination: &str,
        vehicle: Vehicle,
    ) -> Result<Option<Route>, RouteError> {
        let result = self
            .store
            .with_read(|graph| graph.shortest_path(source, destination, vehicle));

        match &result {
            Ok(Some(route)) => debug!(
                "route {} -> {} for {:?}: {} min over {} hops",
                source,
                destination,
                vehicle,
                route.time,
                route.path.len().saturating_sub(1)
            ),
            Ok(None) => debug!("no route {} -> {} for {:?}", source, destination, vehicle),
            Err(_) => {}
        }

        result
    }
}
