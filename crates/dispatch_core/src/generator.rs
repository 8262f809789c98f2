//! Random instance generation for tests, benchmarks, and tooling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::instance::Instance;
use crate::ride::{Ride, RideId};
use crate::spatial::{manhattan_distance, GridPoint};

/// Parameters for generating a random instance. Windows are built from each
/// ride's own distance plus random slack, so generated rides start out
/// servable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorParams {
    pub rows: u32,
    pub cols: u32,
    pub vehicle_count: usize,
    pub ride_count: usize,
    pub bonus: u64,
    pub max_steps: u64,
    /// Upper bound on the random slack added past each ride's distance.
    pub max_slack: u64,
    /// Seed for the RNG (for reproducibility).
    pub seed: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            rows: 1_000,
            cols: 1_000,
            vehicle_count: 50,
            ride_count: 1_000,
            bonus: 2,
            max_steps: 10_000,
            max_slack: 500,
            seed: 0,
        }
    }
}

impl GeneratorParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fleet(mut self, vehicle_count: usize) -> Self {
        self.vehicle_count = vehicle_count;
        self
    }

    pub fn with_rides(mut self, ride_count: usize) -> Self {
        self.ride_count = ride_count;
        self
    }
}

pub fn generate_instance(params: &GeneratorParams) -> Instance {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut rides = Vec::with_capacity(params.ride_count);
    for id in 0..params.ride_count {
        let origin = random_point(&mut rng, params.rows, params.cols);
        let destination = random_point(&mut rng, params.rows, params.cols);
        let distance = manhattan_distance(origin, destination);
        let earliest_start = rng.gen_range(0..params.max_steps.max(1));
        let slack = rng.gen_range(0..=params.max_slack);
        // Leave the window at least one step longer than the ride itself.
        let latest_finish = earliest_start + distance + 1 + slack;
        rides.push(Ride::new(
            id as RideId,
            origin,
            destination,
            earliest_start,
            latest_finish,
        ));
    }
    Instance {
        rows: params.rows,
        cols: params.cols,
        vehicle_count: params.vehicle_count,
        bonus: params.bonus,
        max_steps: params.max_steps,
        rides,
    }
}

fn random_point<R: Rng>(rng: &mut R, rows: u32, cols: u32) -> GridPoint {
    GridPoint::new(rng.gen_range(0..rows.max(1)), rng.gen_range(0..cols.max(1)))
}
