//! Core types for the road network
//!
//! These are plain data types shared by the graph store, the pathfinder
//! and the traffic simulator.

use clap::ValueEnum;
use serde::Serialize;

/// Vehicle class requesting a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Vehicle {
    Car,
    Bike,
    Truck,
}

impl Vehicle {
    /// Whether this vehicle may drive on a road of the given class.
    /// Trucks are banned from narrow roads; everything else goes anywhere.
    pub fn can_traverse(self, class: RoadClass) -> bool {
        !(self == Vehicle::Truck && class == RoadClass::Narrow)
    }
}

/// Classification of a physical road, governing vehicle eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadClass {
    Highway,
    Narrow,
    Local,
}

/// A named point in the network (graph vertex)
///
/// Coordinates are layout percentages for rendering only; routing never
/// reads them. The location set is fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
        }
    }
}

/// A directed edge of the network
///
/// Every physical road is stored as two of these, one per direction, sharing
/// distance, base time and class. `current_time` is the live traffic-adjusted
/// traversal estimate in minutes and is the only mutable field in the system;
/// it is rewritten only by the traffic simulator and starts equal to
/// `base_time`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadSegment {
    pub source: String,
    pub destination: String,
    /// Physical length in kilometers, fixed
    pub distance: f64,
    /// Free-flow traversal time in minutes, fixed
    pub base_time: u32,
    /// Live traversal time in minutes; the routing weight
    pub current_time: u32,
    pub class: RoadClass,
}
