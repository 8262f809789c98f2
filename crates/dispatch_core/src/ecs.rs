//! ECS components and fleet bookkeeping for vehicles.

use bevy_ecs::prelude::{Component, Entity, Resource};

use crate::ride::RideId;
use crate::spatial::GridPoint;

/// A fleet vehicle. `busy_until` is the step at which the current
/// assignment completes; `None` means the vehicle is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Vehicle {
    busy_until: Option<u64>,
}

impl Vehicle {
    pub fn is_idle(&self) -> bool {
        self.busy_until.is_none()
    }

    pub fn busy_until(&self) -> Option<u64> {
        self.busy_until
    }

    /// Marks the vehicle busy until `completion_step`. Callers must only
    /// invoke this on an idle vehicle.
    pub fn begin_ride(&mut self, completion_step: u64) {
        debug_assert!(self.busy_until.is_none(), "vehicle is already on a ride");
        self.busy_until = Some(completion_step);
    }

    /// True when the current assignment has completed by `now`.
    pub fn due_by(&self, now: u64) -> bool {
        self.busy_until.is_some_and(|step| step <= now)
    }

    pub fn release(&mut self) {
        self.busy_until = None;
    }
}

/// Current grid position of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Position(pub GridPoint);

/// Ordered, append-only log of the ride ids a vehicle has served.
#[derive(Debug, Clone, Default, Component)]
pub struct ServedRides(Vec<RideId>);

impl ServedRides {
    pub fn push(&mut self, id: RideId) {
        self.0.push(id);
    }

    pub fn ids(&self) -> &[RideId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Vehicles in spawn order. The dispatch pass iterates this, so assignment
/// order is deterministic for a given instance.
#[derive(Debug, Default, Resource)]
pub struct Fleet(pub Vec<Entity>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_lifecycle_round_trip() {
        let mut vehicle = Vehicle::default();
        assert!(vehicle.is_idle());
        assert!(!vehicle.due_by(0));

        vehicle.begin_ride(5);
        assert!(!vehicle.is_idle());
        assert_eq!(vehicle.busy_until(), Some(5));
        assert!(!vehicle.due_by(4));
        assert!(vehicle.due_by(5));
        assert!(vehicle.due_by(6));

        vehicle.release();
        assert!(vehicle.is_idle());
        assert_eq!(vehicle.busy_until(), None);
    }

    #[test]
    fn served_rides_preserve_assignment_order() {
        let mut served = ServedRides::default();
        assert!(served.is_empty());
        served.push(3);
        served.push(1);
        served.push(2);
        assert_eq!(served.ids(), &[3, 1, 2]);
        assert_eq!(served.len(), 3);
    }
}
