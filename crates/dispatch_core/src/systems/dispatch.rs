use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::SimulationClock;
use crate::ecs::{Fleet, Position, ServedRides, Vehicle};
use crate::matching::{RideSelectorResource, SelectionError};
use crate::queue::PendingQueue;
use crate::telemetry::{AssignmentRecord, SimTelemetry};

/// Runs one dispatch pass over the fleet in spawn order.
///
/// For each vehicle: an idle vehicle with pending rides asks the selector
/// for an assignment (an exhausted scan leaves it idle this tick); a busy
/// vehicle whose completion step has been reached is released and becomes
/// assignable on the next tick. A ride taken by one vehicle is gone from
/// the queue before the next vehicle in the pass scans.
pub fn dispatch_system(
    clock: Res<SimulationClock>,
    fleet: Res<Fleet>,
    selector: Res<RideSelectorResource>,
    mut queue: ResMut<PendingQueue>,
    mut telemetry: ResMut<SimTelemetry>,
    mut vehicles: Query<(&mut Vehicle, &mut Position, &mut ServedRides)>,
) {
    let now = clock.now();
    for &entity in fleet.0.iter() {
        let Ok((mut vehicle, mut position, mut served)) = vehicles.get_mut(entity) else {
            continue;
        };
        if vehicle.is_idle() {
            if queue.is_empty() {
                continue;
            }
            match selector.select_ride(position.0, &mut queue, now) {
                Ok(selected) => {
                    let completion = now + selected.cost;
                    let approach = selected.cost - selected.ride.distance;
                    vehicle.begin_ride(completion);
                    position.0 = selected.ride.destination;
                    served.push(selected.ride.id);
                    telemetry.assignments.push(AssignmentRecord {
                        ride: selected.ride.id,
                        vehicle: entity,
                        assigned_at: now,
                        pickup_at: now + approach,
                        completion_at: completion,
                        ride_distance: selected.ride.distance,
                        earliest_start: selected.ride.earliest_start,
                    });
                }
                // Not enough feasible rides remain; the vehicle waits.
                Err(SelectionError::OutOfRange) => {}
            }
        } else if vehicle.due_by(now) {
            vehicle.release();
        }
    }
}
