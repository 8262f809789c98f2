//! The pending-ride working set.
//!
//! Rides are sorted once by earliest start at construction and the queue
//! only ever shrinks: nothing is inserted after load and the order is never
//! rebuilt. Removal tombstones a slot instead of shifting the array, so an
//! assignment does not move the remaining entries.

use bevy_ecs::prelude::Resource;

use crate::ride::Ride;

#[derive(Debug, Default, Resource)]
pub struct PendingQueue {
    slots: Vec<Ride>,
    removed: Vec<bool>,
    /// First slot that may still be live; everything before it is removed.
    head: usize,
    live: usize,
}

impl PendingQueue {
    /// Builds the queue from the loaded rides, ordered ascending by
    /// `earliest_start`. The sort is stable: ties keep load order.
    pub fn from_rides(mut rides: Vec<Ride>) -> Self {
        rides.sort_by_key(|ride| ride.earliest_start);
        let len = rides.len();
        Self {
            slots: rides,
            removed: vec![false; len],
            head: 0,
            live: len,
        }
    }

    /// Number of live (not yet assigned or expired) rides.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drops expired rides from the head: while the first live entry has
    /// `latest_finish <= now`, it is removed. Expired rides deeper in the
    /// queue are intentionally left in place; the feasibility check at
    /// selection time skips them until they surface at the head.
    /// Idempotent at a fixed `now`.
    pub fn prune_expired(&mut self, now: u64) {
        self.skip_removed();
        while self.head < self.slots.len() && self.slots[self.head].latest_finish <= now {
            self.removed[self.head] = true;
            self.live -= 1;
            self.head += 1;
            self.skip_removed();
        }
    }

    /// Live entries in earliest-start order, keyed by slot.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &Ride)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .skip(self.head)
            .filter(|(slot, _)| !self.removed[*slot])
    }

    /// Removes and returns the ride at `slot`. Returns `None` when the slot
    /// is out of range or already removed; a removed id never reappears.
    pub fn take(&mut self, slot: usize) -> Option<Ride> {
        if slot >= self.slots.len() || self.removed[slot] {
            return None;
        }
        self.removed[slot] = true;
        self.live -= 1;
        if slot == self.head {
            self.skip_removed();
        }
        Some(self.slots[slot])
    }

    fn skip_removed(&mut self) {
        while self.head < self.slots.len() && self.removed[self.head] {
            self.head += 1;
        }
    }
}
