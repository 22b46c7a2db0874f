//! Campaign Simulator
//!
//! Deterministic replay of an ordered bit-run plan against rig parameters.
//! Pure functions throughout — no shared state, no I/O, cheap enough to
//! recompute on every caller edit.
//!
//! - `simulate()` / `simulate_scenario()` — full timeline replay
//! - `costs` — per-run time/cost building blocks, shared with the optimizer
//! - `sequence_capacity()` — quick feasibility check without a replay

pub mod costs;
mod timeline;

pub use costs::{drilling_hours, round_trip_hours, run_cost, sequence_capacity};
pub use timeline::{describe_sequence, simulate, simulate_scenario};
