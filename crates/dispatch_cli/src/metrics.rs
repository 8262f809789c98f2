//! Metrics extraction from a finished simulation world.

use bevy_ecs::prelude::World;
use dispatch_core::instance::Instance;
use dispatch_core::telemetry::SimTelemetry;
use serde::Serialize;

/// Summary of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub sampling_width: usize,
    pub vehicle_count: usize,
    pub max_steps: u64,
    pub rides_total: usize,
    pub rides_served: usize,
    pub rides_unserved: usize,
    pub total_ride_distance: u64,
    pub total_approach_distance: u64,
    pub on_time_pickups: usize,
    /// Served ride distance plus the per-ride bonus for on-time pickups.
    pub estimated_score: u64,
}

pub fn extract_metrics(world: &World, instance: &Instance, sampling_width: usize) -> RunMetrics {
    let assignments: &[_] = world
        .get_resource::<SimTelemetry>()
        .map(|telemetry| telemetry.assignments.as_slice())
        .unwrap_or(&[]);

    let rides_served = assignments.len();
    let total_ride_distance = assignments.iter().map(|a| a.ride_distance).sum::<u64>();
    let total_approach_distance = assignments
        .iter()
        .map(|a| a.approach_distance())
        .sum::<u64>();
    let on_time_pickups = assignments.iter().filter(|a| a.started_on_time()).count();

    RunMetrics {
        sampling_width,
        vehicle_count: instance.vehicle_count,
        max_steps: instance.max_steps,
        rides_total: instance.rides.len(),
        rides_served,
        rides_unserved: instance.rides.len() - rides_served,
        total_ride_distance,
        total_approach_distance,
        on_time_pickups,
        estimated_score: total_ride_distance + instance.bonus * on_time_pickups as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::ride::Ride;
    use dispatch_core::spatial::GridPoint;

    use crate::run::simulate;

    #[test]
    fn counts_served_rides_and_score() {
        let instance = Instance {
            rows: 10,
            cols: 10,
            vehicle_count: 1,
            bonus: 2,
            max_steps: 20,
            rides: vec![
                // Starts at the vehicle's origin, so the pickup is on time.
                Ride::new(0, GridPoint::new(0, 0), GridPoint::new(0, 2), 0, 5),
            ],
        };
        let world = simulate(&instance, 1, None);
        let metrics = extract_metrics(&world, &instance, 1);

        assert_eq!(metrics.rides_served, 1);
        assert_eq!(metrics.rides_unserved, 0);
        assert_eq!(metrics.total_ride_distance, 2);
        assert_eq!(metrics.total_approach_distance, 0);
        assert_eq!(metrics.on_time_pickups, 1);
        assert_eq!(metrics.estimated_score, 2 + 2);
    }

    #[test]
    fn unservable_rides_stay_unserved() {
        let instance = Instance {
            rows: 100,
            cols: 100,
            vehicle_count: 1,
            bonus: 2,
            max_steps: 5,
            // The window closes before the ride distance can be covered.
            rides: vec![Ride::new(
                0,
                GridPoint::new(0, 0),
                GridPoint::new(50, 50),
                0,
                10,
            )],
        };
        let world = simulate(&instance, 1, None);
        let metrics = extract_metrics(&world, &instance, 1);

        assert_eq!(metrics.rides_served, 0);
        assert_eq!(metrics.rides_unserved, 1);
        assert_eq!(metrics.estimated_score, 0);
    }

    #[test]
    fn world_without_telemetry_counts_nothing() {
        let instance = Instance {
            rows: 1,
            cols: 1,
            vehicle_count: 0,
            bonus: 0,
            max_steps: 0,
            rides: Vec::new(),
        };
        let world = World::new();
        let metrics = extract_metrics(&world, &instance, 10);
        assert_eq!(metrics.rides_served, 0);
        assert_eq!(metrics.sampling_width, 10);
    }
}
