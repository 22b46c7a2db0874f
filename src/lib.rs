//! RigPlan: Drilling Campaign Planning
//!
//! Estimates the time and cost of drilling a well interval from an ordered
//! plan of bit runs, and searches for the lowest-cost plan that reaches the
//! target depth.
//!
//! ## Architecture
//!
//! - **Simulator**: deterministic timeline replay of one bit sequence
//! - **Optimizer**: dynamic-programming search over active bit types
//! - **Config**: campaign TOML documents and the validation gate
//!
//! Both engine components are pure, synchronous functions: the caller owns
//! every piece of state, results are pure functions of their inputs, and
//! nothing here does I/O. Validate inputs with `validate_campaign` before
//! calling the engine — degenerate ranges are a caller error, not something
//! the engine guards.

pub mod config;
pub mod fingerprint;
pub mod optimizer;
pub mod simulator;
pub mod types;

// Re-export the engine entry points
pub use optimizer::optimize;
pub use simulator::{sequence_capacity, simulate, simulate_scenario};

// Re-export commonly used types
pub use types::{
    Activity, BitSequence, BitType, DrillingParameters, Scenario, ScenarioResult, ScenarioStatus,
    SimulationStep,
};

// Re-export the validation gate
pub use config::{validate_campaign, InvalidParameterError, ValidationWarning};

// Re-export memoization helpers
pub use fingerprint::{scenario_fingerprint, ResultCache};
