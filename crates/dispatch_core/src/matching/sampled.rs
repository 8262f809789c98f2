use crate::matching::{RideSelector, SelectedRide, SelectionError};
use crate::queue::PendingQueue;
use crate::ride::Ride;
use crate::spatial::{manhattan_distance, GridPoint};

/// Greedy sampled nearest-feasible selection.
///
/// Scans the queue from the head, skipping rides the vehicle can no longer
/// complete in time, and examines exactly `sampling_width` feasible
/// candidates. The candidate with the lowest total cost (approach plus ride
/// distance) wins; on equal cost the candidate seen first is kept, so
/// earliest-start order breaks ties. If the queue runs out before the
/// sample fills, the whole selection fails with
/// [`SelectionError::OutOfRange`] and no ride is taken.
#[derive(Debug, Clone, Copy)]
pub struct SampledNearestSelector {
    /// Candidates examined before committing; trades per-step cost against
    /// match quality.
    pub sampling_width: usize,
}

impl SampledNearestSelector {
    pub fn new(sampling_width: usize) -> Self {
        Self { sampling_width }
    }

    fn total_cost(vehicle_pos: GridPoint, ride: &Ride) -> u64 {
        manhattan_distance(vehicle_pos, ride.origin) + ride.distance
    }

    /// A ride is feasible when the vehicle can reach its origin and finish
    /// the ride no later than `latest_finish`.
    fn is_feasible(vehicle_pos: GridPoint, ride: &Ride, now: u64) -> bool {
        Self::total_cost(vehicle_pos, ride) + now <= ride.latest_finish
    }
}

impl RideSelector for SampledNearestSelector {
    fn select_ride(
        &self,
        vehicle_pos: GridPoint,
        queue: &mut PendingQueue,
        now: u64,
    ) -> Result<SelectedRide, SelectionError> {
        queue.prune_expired(now);

        let best = {
            let mut live = queue.iter_live();
            let mut best: Option<(usize, u64)> = None;
            let mut sampled = 0;
            while sampled < self.sampling_width {
                let (slot, cost) = loop {
                    let (slot, ride) = live.next().ok_or(SelectionError::OutOfRange)?;
                    if Self::is_feasible(vehicle_pos, ride, now) {
                        break (slot, Self::total_cost(vehicle_pos, ride));
                    }
                };
                // Strictly-less comparison: the first candidate with the
                // minimal cost wins ties.
                if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                    best = Some((slot, cost));
                }
                sampled += 1;
            }
            best
        };

        let (slot, cost) = best.ok_or(SelectionError::OutOfRange)?;
        let ride = queue.take(slot).ok_or(SelectionError::OutOfRange)?;
        Ok(SelectedRide { ride, cost })
    }
}
