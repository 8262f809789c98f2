pub mod clock;
pub mod ecs;
#[cfg(feature = "test-helpers")]
pub mod generator;
pub mod instance;
pub mod matching;
pub mod plan;
pub mod queue;
pub mod ride;
pub mod runner;
pub mod scenario;
pub mod spatial;
pub mod systems;
pub mod telemetry;
