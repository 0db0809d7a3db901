//! Traffic drift model
//!
//! Periodically (or on demand) recomputes every physical road's current
//! traversal time. Each road gets one fluctuation per update, applied to
//! both of its directional segments.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use crate::store::GraphStore;

/// Default cadence of the background update loop
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(5);

/// Fluctuation is drawn uniformly from `[0, FLUCTUATION_FACTOR * base_time)`
const FLUCTUATION_FACTOR: f64 = 1.5;

/// Perturbs road traversal times on the shared graph
///
/// The fluctuation is never negative, so current time never drops below a
/// road's base time, and the result is clamped to at least one minute.
pub struct TrafficSimulator {
    store: Arc<GraphStore>,

    /// Optional seeded RNG for reproducible simulations
    rng: Mutex<Option<StdRng>>,

    /// Set once the background loop has been spawned
    loop_started: AtomicBool,
}

impl TrafficSimulator {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self {
            store,
            rng: Mutex::new(None),
            loop_started: AtomicBool::new(false),
        }
    }

    /// Create a simulator with a seeded RNG for reproducible updates
    pub fn with_seed(store: Arc<GraphStore>, seed: u64) -> Self {
        Self {
            rng: Mutex::new(Some(StdRng::seed_from_u64(seed))),
            ..Self::new(store)
        }
    }

    /// Recomputes the current traversal time of every physical road.
    ///
    /// `new_time = max(1, round(base_time + fluctuation))`, written to both
    /// directions of the road. Cannot fail on a well-formed graph.
    pub fn update_traffic(&self) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let roads = self.store.with_write(|graph| {
            graph.perturb_roads(|base_time| {
                let limit = FLUCTUATION_FACTOR * f64::from(base_time);
                let fluctuation = match rng.as_mut() {
                    Some(rng) => rng.random_range(0.0..limit),
                    None => rand::rng().random_range(0.0..limit),
                };
                ((f64::from(base_time) + fluctuation).round() as u32).max(1)
            });
            graph.physical_road_count()
        });

        debug!("traffic updated across {} roads", roads);
    }

    /// Starts the periodic background update loop.
    ///
    /// Spawns the updater thread on the first call and returns `true`;
    /// every later call is a no-op returning `false`, so a duplicate start
    /// request can never produce a second concurrent loop. The thread runs
    /// until process exit.
    pub fn start_background(self: &Arc<Self>, interval: Duration) -> bool {
        if self.loop_started.swap(true, Ordering::SeqCst) {
            debug!("traffic update loop already running, ignoring start");
            return false;
        }

        info!("starting traffic update loop, interval {:?}", interval);
        let simulator = Arc::clone(self);
        thread::spawn(move || loop {
            simulator.update_traffic();
            thread::sleep(interval);
        });

        true
    }
}
