//! Telemetry: records every assignment for post-run analysis.

use bevy_ecs::prelude::{Entity, Resource};

use crate::ride::RideId;

/// One assignment, recorded at the step the selector commits a vehicle.
/// All timestamps are simulation steps; use the helper methods for derived
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub ride: RideId,
    pub vehicle: Entity,
    pub assigned_at: u64,
    /// Step the vehicle reaches the ride origin.
    pub pickup_at: u64,
    pub completion_at: u64,
    pub ride_distance: u64,
    pub earliest_start: u64,
}

impl AssignmentRecord {
    /// Distance traveled empty to reach the ride origin.
    pub fn approach_distance(&self) -> u64 {
        self.pickup_at.saturating_sub(self.assigned_at)
    }

    /// True when the vehicle reached the origin by the ride's earliest
    /// start, so the ride departs on time.
    pub fn started_on_time(&self) -> bool {
        self.pickup_at <= self.earliest_start
    }
}

/// Collects simulation telemetry. Inserted by the scenario builder; the
/// dispatch pass appends to it.
#[derive(Debug, Default, Resource)]
pub struct SimTelemetry {
    pub assignments: Vec<AssignmentRecord>,
}
