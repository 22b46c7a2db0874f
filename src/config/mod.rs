//! Campaign Configuration Module
//!
//! Caller-owned campaign state as a TOML document, plus the validation layer
//! that gates the engine.
//!
//! ## Loading Order
//!
//! 1. Explicit path (CLI `--campaign`)
//! 2. `RIGPLAN_CAMPAIGN` environment variable
//! 3. `campaign.toml` in the current working directory
//!
//! Validation runs after loading and before any simulate/optimize call:
//! range errors abort, warnings are surfaced and ignored.

mod campaign_file;
pub mod validation;

pub use campaign_file::*;
pub use validation::{
    validate_bit_types, validate_campaign, validate_parameters, InvalidParameterError,
    ValidationWarning,
};
