//! Shared ownership of the canonical graph
//!
//! The store is the single mutual-exclusion boundary around the network:
//! readers (snapshots, route computations) hold the read guard for their
//! whole operation and writers publish whole updates under the write guard,
//! so no caller ever observes a half-applied traffic update.

use serde::Serialize;
use std::sync::{PoisonError, RwLock};

use crate::graph::RoadGraph;
use crate::types::{Location, RoadSegment};

/// Read-only copy of the full network state at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub locations: Vec<Location>,
    pub road_segments: Vec<RoadSegment>,
}

/// Owns the canonical, mutable road graph behind a lock
///
/// Shared as `Arc<GraphStore>` between the pathfinder, the traffic
/// simulator and the surrounding transport layer. The traffic simulator is
/// the only writer.
pub struct GraphStore {
    inner: RwLock<RoadGraph>,
}

impl GraphStore {
    pub fn new(graph: RoadGraph) -> Self {
        Self {
            inner: RwLock::new(graph),
        }
    }

    /// Returns a cloned snapshot of the current locations and segments.
    /// Cannot fail; successive calls between traffic updates are identical.
    pub fn snapshot(&self) -> GraphSnapshot {
        self.with_read(|graph| GraphSnapshot {
            locations: graph.locations(),
            road_segments: graph.road_segments(),
        })
    }

    /// Runs `f` under the read guard; the graph cannot change while it runs
    pub(crate) fn with_read<T>(&self, f: impl FnOnce(&RoadGraph) -> T) -> T {
        // A poisoned lock still holds whole-road-consistent data; recover it
        let guard = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` under the write guard; used only by the traffic simulator
    pub(crate) fn with_write<T>(&self, f: impl FnOnce(&mut RoadGraph) -> T) -> T {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
