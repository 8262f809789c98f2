pub mod sampled;

use std::fmt;

use bevy_ecs::prelude::Resource;

pub use sampled::SampledNearestSelector;

use crate::queue::PendingQueue;
use crate::ride::Ride;
use crate::spatial::GridPoint;

/// A ride chosen for a vehicle, already removed from the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRide {
    pub ride: Ride,
    /// Approach distance plus ride distance; the assignment completes at
    /// `now + cost`.
    pub cost: u64,
}

/// Raised when a scan runs past the end of the queue before the sample is
/// filled. Recoverable: the scheduler treats it as "nothing assignable this
/// tick" for that vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    OutOfRange,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::OutOfRange => {
                write!(f, "scan ran past the end of the pending queue")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Strategy seam for picking the next ride for an idle vehicle.
pub trait RideSelector: Send + Sync {
    /// Selects at most one ride for a vehicle at `vehicle_pos` at step
    /// `now`, removing it from the queue on success.
    fn select_ride(
        &self,
        vehicle_pos: GridPoint,
        queue: &mut PendingQueue,
        now: u64,
    ) -> Result<SelectedRide, SelectionError>;
}

/// Resource wrapper for the ride selector trait object.
#[derive(Resource)]
pub struct RideSelectorResource(pub Box<dyn RideSelector>);

impl RideSelectorResource {
    pub fn new(selector: Box<dyn RideSelector>) -> Self {
        Self(selector)
    }
}

impl std::ops::Deref for RideSelectorResource {
    type Target = dyn RideSelector;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
