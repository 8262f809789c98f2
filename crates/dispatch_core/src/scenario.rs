//! Scenario construction: turns a loaded instance into a ready world.

use bevy_ecs::prelude::World;

use crate::clock::{SimulationClock, StepBudget};
use crate::ecs::{Fleet, Position, ServedRides, Vehicle};
use crate::instance::Instance;
use crate::matching::{RideSelectorResource, SampledNearestSelector};
use crate::queue::PendingQueue;
use crate::spatial::GridPoint;
use crate::telemetry::SimTelemetry;

/// Candidates the selector examines per assignment in the reference
/// configuration.
const DEFAULT_SAMPLING_WIDTH: usize = 1000;

/// Tunable dispatch parameters.
#[derive(Debug, Clone, Copy)]
pub struct DispatchConfig {
    /// Greedy lookahead breadth: feasible candidates examined before the
    /// selector commits.
    pub sampling_width: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            sampling_width: DEFAULT_SAMPLING_WIDTH,
        }
    }
}

impl DispatchConfig {
    pub fn with_sampling_width(mut self, sampling_width: usize) -> Self {
        self.sampling_width = sampling_width;
        self
    }
}

/// Inserts all simulation resources and spawns the fleet at the grid
/// origin, recording spawn order in [`Fleet`].
pub fn build_simulation(world: &mut World, instance: &Instance, config: &DispatchConfig) {
    world.insert_resource(SimulationClock::default());
    world.insert_resource(StepBudget(instance.max_steps));
    world.insert_resource(PendingQueue::from_rides(instance.rides.clone()));
    world.insert_resource(RideSelectorResource::new(Box::new(
        SampledNearestSelector::new(config.sampling_width),
    )));
    world.insert_resource(SimTelemetry::default());

    let mut fleet = Fleet::default();
    for _ in 0..instance.vehicle_count {
        let entity = world
            .spawn((
                Vehicle::default(),
                Position(GridPoint::ORIGIN),
                ServedRides::default(),
            ))
            .id();
        fleet.0.push(entity);
    }
    world.insert_resource(fleet);
}
