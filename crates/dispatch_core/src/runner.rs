//! Simulation runner: advances the step clock and runs the dispatch
//! schedule.
//!
//! Clock progression happens here, outside systems. Each step runs the
//! schedule at the current step value, then advances the clock, until the
//! fixed step budget is spent.

use bevy_ecs::prelude::{Schedule, World};

use crate::clock::{SimulationClock, StepBudget};
use crate::systems::dispatch_system;

/// Builds the per-step schedule: the fleet dispatch pass.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(dispatch_system);
    schedule
}

/// Runs a single step: the schedule at the current clock value, then the
/// clock advance.
pub fn run_step(world: &mut World, schedule: &mut Schedule) {
    schedule.run(world);
    world.resource_mut::<SimulationClock>().advance();
}

/// Runs the full [`StepBudget`] and returns the number of steps executed.
pub fn run_to_completion(world: &mut World, schedule: &mut Schedule) -> u64 {
    let budget = world.resource::<StepBudget>().0;
    for _ in 0..budget {
        run_step(world, schedule);
    }
    budget
}

/// Runs the full [`StepBudget`] and invokes `hook` after each step with the
/// index of the step just executed.
pub fn run_to_completion_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    mut hook: F,
) -> u64
where
    F: FnMut(&World, u64),
{
    let budget = world.resource::<StepBudget>().0;
    for step in 0..budget {
        run_step(world, schedule);
        hook(world, step);
    }
    budget
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::instance::Instance;
    use crate::plan::extract_plan;
    use crate::ride::Ride;
    use crate::scenario::{build_simulation, DispatchConfig};
    use crate::spatial::GridPoint;

    fn one_ride_instance() -> Instance {
        Instance {
            rows: 3,
            cols: 4,
            vehicle_count: 1,
            bonus: 2,
            max_steps: 10,
            rides: vec![Ride::new(
                0,
                GridPoint::new(0, 0),
                GridPoint::new(0, 2),
                0,
                5,
            )],
        }
    }

    #[test]
    fn runs_exactly_the_step_budget() {
        let mut world = World::new();
        build_simulation(&mut world, &one_ride_instance(), &DispatchConfig::default());
        let mut schedule = simulation_schedule();

        let steps = run_to_completion(&mut world, &mut schedule);
        assert_eq!(steps, 10);
        assert_eq!(world.resource::<SimulationClock>().now(), 10);
    }

    #[test]
    fn hook_fires_once_per_step() {
        let mut world = World::new();
        build_simulation(&mut world, &one_ride_instance(), &DispatchConfig::default());
        let mut schedule = simulation_schedule();

        let mut calls = 0;
        run_to_completion_with_hook(&mut world, &mut schedule, |_, _| calls += 1);
        assert_eq!(calls, 10);
    }

    #[test]
    fn single_vehicle_single_ride_end_to_end() {
        let mut world = World::new();
        build_simulation(
            &mut world,
            &one_ride_instance(),
            &DispatchConfig::default().with_sampling_width(1),
        );
        let mut schedule = simulation_schedule();
        run_to_completion(&mut world, &mut schedule);

        let plans = extract_plan(&world);
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].rides, vec![0]);
    }
}
