//! Road network graph and its validating builder
//!
//! Wraps a petgraph directed graph whose nodes are locations and whose edge
//! weights are directional road segments. Physical roads are tracked as
//! pairs of edge indices so traffic updates can write one computed time to
//! both directions.

use anyhow::{ensure, Result};
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::{Dfs, EdgeFiltered};
use std::collections::{HashMap, HashSet};

use crate::routing::{Route, RouteError};
use crate::types::{Location, RoadClass, RoadSegment, Vehicle};

/// One real-world road: the two directional edges that represent it plus
/// the shared free-flow time the traffic model perturbs around.
#[derive(Debug, Clone, Copy)]
struct PhysicalRoad {
    forward: EdgeIndex,
    reverse: EdgeIndex,
    base_time: u32,
}

/// The road network graph
///
/// Constructed once through [`GraphBuilder`]; the location and road sets
/// never change afterwards. Only segment `current_time` values are mutable,
/// through [`RoadGraph::perturb_roads`].
pub struct RoadGraph {
    /// The underlying petgraph directed graph (one edge per direction)
    graph: DiGraph<Location, RoadSegment>,

    /// Maps location ids to their node indices in the graph
    id_to_node: HashMap<String, NodeIndex>,

    /// One entry per physical road, pairing its two directional edges
    physical_roads: Vec<PhysicalRoad>,
}

impl RoadGraph {
    /// All locations, in insertion order
    pub fn locations(&self) -> Vec<Location> {
        self.graph.node_weights().cloned().collect()
    }

    /// All directional road segments with their live traversal times
    pub fn road_segments(&self) -> Vec<RoadSegment> {
        self.graph.edge_weights().cloned().collect()
    }

    /// Number of physical roads (half the number of directed segments)
    pub fn physical_road_count(&self) -> usize {
        self.physical_roads.len()
    }

    /// Rewrites every physical road's current time exactly once.
    ///
    /// `next_time` receives the road's base time and returns the new
    /// traversal time, which is written to both directional segments, so
    /// the two directions of a road can never disagree.
    pub(crate) fn perturb_roads<F>(&mut self, mut next_time: F)
    where
        F: FnMut(u32) -> u32,
    {
        for road in &self.physical_roads {
            let new_time = next_time(road.base_time);
            self.graph[road.forward].current_time = new_time;
            self.graph[road.reverse].current_time = new_time;
        }
    }

    /// Finds the minimum-current-time path between two locations for the
    /// given vehicle, using A* with a null heuristic (equivalent to
    /// Dijkstra) over a view of the graph with disallowed edges filtered
    /// out.
    ///
    /// Returns `Ok(None)` when no traversable route exists. Frontier
    /// selection always pops the lowest tentative time; ties resolve to
    /// whatever the binary heap yields, which is deterministic for a fixed
    /// graph but not otherwise meaningful.
    pub fn shortest_path(
        &self,
        source: &str,
        destination: &str,
        vehicle: Vehicle,
    ) -> Result<Option<Route>, RouteError> {
        let start = self.node(source)?;
        let goal = self.node(destination)?;

        let traversable =
            EdgeFiltered::from_fn(&self.graph, |edge| vehicle.can_traverse(edge.weight().class));

        let Some((time, node_path)) = astar(
            &traversable,
            start,
            |node| node == goal,
            |edge| edge.weight().current_time,
            |_| 0, // Null heuristic = Dijkstra
        ) else {
            return Ok(None);
        };

        // Duplicate (source, destination) pairs are rejected at build time,
        // so each consecutive node pair identifies exactly one segment.
        let mut distance = 0.0;
        for hop in node_path.windows(2) {
            if let Some(edge) = self.graph.find_edge(hop[0], hop[1]) {
                distance += self.graph[edge].distance;
            }
        }

        let path = node_path
            .iter()
            .map(|node| self.graph[*node].id.clone())
            .collect();

        Ok(Some(Route {
            path,
            time,
            distance,
        }))
    }

    fn node(&self, id: &str) -> Result<NodeIndex, RouteError> {
        self.id_to_node
            .get(id)
            .copied()
            .ok_or_else(|| RouteError::InvalidLocation(id.to_string()))
    }
}

/// Builder that assembles and validates a [`RoadGraph`]
///
/// Roads are declared once per physical road; the builder expands each into
/// its two directional segments.
#[derive(Default)]
pub struct GraphBuilder {
    locations: Vec<Location>,
    roads: Vec<RoadSpec>,
}

struct RoadSpec {
    a: String,
    b: String,
    distance: f64,
    base_time: u32,
    class: RoadClass,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a location
    pub fn add_location(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.locations.push(Location::new(id, name, x, y));
        self
    }

    /// Declares a physical road between two locations; both directional
    /// segments are created at build time with identical attributes
    pub fn add_road(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        distance: f64,
        base_time: u32,
        class: RoadClass,
    ) -> &mut Self {
        self.roads.push(RoadSpec {
            a: a.into(),
            b: b.into(),
            distance,
            base_time,
            class,
        });
        self
    }

    /// Validates the declared network and builds the graph.
    ///
    /// Rejects duplicate location ids, unknown road endpoints, self-loops,
    /// duplicate roads between the same endpoint pair, non-positive
    /// distances, zero base times, and networks that are not connected.
    pub fn build(self) -> Result<RoadGraph> {
        ensure!(
            !self.locations.is_empty(),
            "network needs at least one location"
        );

        let mut graph = DiGraph::new();
        let mut id_to_node: HashMap<String, NodeIndex> = HashMap::new();

        for location in self.locations {
            ensure!(
                !id_to_node.contains_key(&location.id),
                "duplicate location id {:?}",
                location.id
            );
            let id = location.id.clone();
            let node = graph.add_node(location);
            id_to_node.insert(id, node);
        }

        let mut physical_roads = Vec::with_capacity(self.roads.len());
        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

        for road in self.roads {
            let start = *id_to_node
                .get(&road.a)
                .ok_or_else(|| anyhow::anyhow!("road endpoint {:?} is not a location", road.a))?;
            let end = *id_to_node
                .get(&road.b)
                .ok_or_else(|| anyhow::anyhow!("road endpoint {:?} is not a location", road.b))?;

            ensure!(road.a != road.b, "self-loop road at {:?}", road.a);
            ensure!(
                road.distance > 0.0,
                "road {:?}-{:?} has non-positive distance",
                road.a,
                road.b
            );
            ensure!(
                road.base_time >= 1,
                "road {:?}-{:?} needs a base time of at least 1 minute",
                road.a,
                road.b
            );

            // Order-independent key so A-B and B-A count as the same road
            let key = if road.a <= road.b {
                (road.a.clone(), road.b.clone())
            } else {
                (road.b.clone(), road.a.clone())
            };
            ensure!(
                seen_pairs.insert(key),
                "duplicate road between {:?} and {:?}",
                road.a,
                road.b
            );

            let forward = graph.add_edge(
                start,
                end,
                RoadSegment {
                    source: road.a.clone(),
                    destination: road.b.clone(),
                    distance: road.distance,
                    base_time: road.base_time,
                    current_time: road.base_time,
                    class: road.class,
                },
            );
            let reverse = graph.add_edge(
                end,
                start,
                RoadSegment {
                    source: road.b,
                    destination: road.a,
                    distance: road.distance,
                    base_time: road.base_time,
                    current_time: road.base_time,
                    class: road.class,
                },
            );

            physical_roads.push(PhysicalRoad {
                forward,
                reverse,
                base_time: road.base_time,
            });
        }

        ensure_connected(&graph)?;

        Ok(RoadGraph {
            graph,
            id_to_node,
            physical_roads,
        })
    }
}

/// Every location must be reachable from every other. Roads are two-way,
/// so a DFS from any single node covering the whole graph is sufficient.
fn ensure_connected(graph: &DiGraph<Location, RoadSegment>) -> Result<()> {
    let start = NodeIndex::new(0);
    let mut dfs = Dfs::new(graph, start);
    let mut visited = 0usize;
    while dfs.next(graph).is_some() {
        visited += 1;
    }
    ensure!(
        visited == graph.node_count(),
        "network is not connected: reached {} of {} locations",
        visited,
        graph.node_count()
    );
    Ok(())
}
