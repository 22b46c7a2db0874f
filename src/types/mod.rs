//! Shared data structures for campaign planning
//!
//! This module defines the core types the planning engine exchanges with its
//! callers:
//! - Inputs: DrillingParameters, BitType roster, BitSequence, Scenario
//! - Outputs: SimulationStep timeline, ScenarioResult summary
//!
//! All ownership stays with the caller; the engine never mutates its inputs.

mod campaign;
mod scenario;

pub use campaign::*;
pub use scenario::*;
