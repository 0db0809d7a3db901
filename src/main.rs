use std::sync::Arc;
use std::thread;

use anyhow::Result;
use clap::{Parser, Subcommand};

use traffic_router::{
    seed_network, GraphStore, PathFinder, TrafficSimulator, Vehicle, UPDATE_INTERVAL,
};

#[derive(Parser)]
#[command(name = "traffic_router")]
#[command(about = "Road-network routing with simulated traffic")]
struct Cli {
    /// Seed the traffic RNG for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current graph snapshot as JSON
    Graph,
    /// Find the fastest current route between two locations
    Route {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, value_enum, default_value = "car")]
        vehicle: Vehicle,
    },
    /// Apply traffic drift and print the resulting snapshot
    Drift {
        /// Number of update rounds to run
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Run the periodic background updater, printing a snapshot per tick
    Watch {
        /// Number of ticks to observe before exiting
        #[arg(long, default_value_t = 3)]
        ticks: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = Arc::new(GraphStore::new(seed_network()?));
    let simulator = match cli.seed {
        Some(seed) => TrafficSimulator::with_seed(Arc::clone(&store), seed),
        None => TrafficSimulator::new(Arc::clone(&store)),
    };

    match cli.command {
        Command::Graph => {
            println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        }
        Command::Route { from, to, vehicle } => {
            let finder = PathFinder::new(Arc::clone(&store));
            match finder.find_path(&from, &to, vehicle)? {
                Some(route) => println!("{}", serde_json::to_string_pretty(&route)?),
                None => println!("No path found from {} to {} for {:?}", from, to, vehicle),
            }
        }
        Command::Drift { rounds } => {
            for _ in 0..rounds {
                simulator.update_traffic();
            }
            println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        }
        Command::Watch { ticks } => {
            let simulator = Arc::new(simulator);
            simulator.start_background(UPDATE_INTERVAL);
            for _ in 0..ticks {
                thread::sleep(UPDATE_INTERVAL);
                println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
            }
        }
    }

    Ok(())
}
