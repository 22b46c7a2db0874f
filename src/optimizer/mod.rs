//! Bit-Sequence Optimizer
//!
//! Searches for the lowest-cost ordered plan of active bits that reaches the
//! target depth. Entirely algorithmic and deterministic; materially more
//! expensive than a single replay, so interactive callers should run it off
//! the critical path and are free to drop a superseded result — there is
//! nothing to roll back.
//!
//! "No plan" (no active bits, nothing to drill) is an empty sequence, never
//! an error.

mod dp;

pub use dp::optimize;
