//! Step clock for the fixed-budget simulation loop.
//!
//! Time is a bare step counter owned by the runner; systems read it through
//! the resource and never advance it themselves.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: u64,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Advances the clock by one step and returns the new value.
    pub fn advance(&mut self) -> u64 {
        self.now += 1;
        self.now
    }
}

/// Total number of steps a run executes, fixed at construction from the
/// instance header.
#[derive(Debug, Clone, Copy, Resource)]
pub struct StepBudget(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero_and_advances_by_one() {
        let mut clock = SimulationClock::default();
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.advance(), 2);
        assert_eq!(clock.now(), 2);
    }
}
