//! Seed dataset: the fixed nine-district network
//!
//! The content is a fixture, not a contract; the only requirement on a
//! seed network is that it passes builder validation (connected, no
//! duplicate roads, and so on).

use anyhow::Result;

use crate::graph::{GraphBuilder, RoadGraph};
use crate::types::RoadClass::{Highway, Local, Narrow};

/// Builds the default city network: nine locations on a rough 3x3 layout
/// with two narrow diagonal shortcuts into Central Station.
pub fn seed_network() -> Result<RoadGraph> {
    let mut builder = GraphBuilder::new();

    builder
        .add_location("A", "Downtown", 10.0, 20.0)
        .add_location("B", "Uptown", 90.0, 20.0)
        .add_location("C", "Midtown", 10.0, 50.0)
        .add_location("D", "Suburbia", 90.0, 50.0)
        .add_location("E", "Industrial Park", 10.0, 80.0)
        .add_location("F", "Airport", 90.0, 80.0)
        .add_location("G", "Central Station", 50.0, 35.0)
        .add_location("H", "Market District", 50.0, 65.0)
        .add_location("I", "South Bridge", 50.0, 95.0);

    // West-east corridors
    builder
        .add_road("A", "G", 10.0, 10, Highway)
        .add_road("G", "B", 10.0, 10, Highway)
        .add_road("C", "H", 12.0, 12, Local)
        .add_road("H", "D", 12.0, 12, Local)
        .add_road("E", "I", 11.0, 11, Highway)
        .add_road("I", "F", 11.0, 11, Highway);

    // North-south connectors
    builder
        .add_road("A", "C", 8.0, 8, Local)
        .add_road("C", "E", 8.0, 8, Local)
        .add_road("G", "H", 7.0, 7, Highway)
        .add_road("H", "I", 7.0, 7, Highway)
        .add_road("B", "D", 8.0, 8, Local)
        .add_road("D", "F", 8.0, 8, Local);

    // Diagonals and alternatives
    builder
        .add_road("C", "G", 9.0, 9, Narrow)
        .add_road("D", "G", 9.0, 9, Narrow)
        .add_road("E", "H", 9.0, 9, Local)
        .add_road("F", "H", 9.0, 9, Local);

    builder.build()
}
