//! Scenario loading and logging for the `gridwalk` command.

pub mod logger;
pub mod scenario;

pub use scenario::{RunReport, Scenario, ScenarioConfig, ScenarioError, build_scenario};
