//! Campaign validation: hard range errors and non-fatal warnings
//!
//! The engine itself never rejects inputs — degenerate ranges (zero trip
//! speed, zero penetration rate) would silently turn into infinite or NaN
//! time, so they are caught here, before any simulation or optimization is
//! attempted. Suspicious-but-legal values come back as warnings and never
//! block a run.

use crate::types::{BitType, DrillingParameters};

// ============================================================================
// Hard Errors
// ============================================================================

/// Parameter ranges that make the campaign arithmetic undefined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParameterError {
    #[error("trip_speed must be > 0 for finite trip time (got {0})")]
    NonPositiveTripSpeed(f64),

    #[error("stand_length must be > 0 (got {0})")]
    NonPositiveStandLength(f64),

    #[error("rig_cost_per_day must be >= 0 (got {0})")]
    NegativeRigRate(f64),

    #[error("start_depth must be >= 0 (got {0})")]
    NegativeStartDepth(f64),

    #[error("interval_to_drill must be >= 0 (got {0})")]
    NegativeInterval(f64),

    #[error("bit_change_overhead_hours must be >= 0 (got {0})")]
    NegativeChangeOverhead(f64),

    #[error("{field} must be a finite number (got {value})")]
    NonFiniteParameter { field: &'static str, value: f64 },

    #[error("bit '{bit}': penetration_rate must be > 0 (got {value})")]
    NonPositivePenetrationRate { bit: String, value: f64 },

    #[error("bit '{bit}': max_run_length must be > 0 (got {value})")]
    NonPositiveMaxRunLength { bit: String, value: f64 },

    #[error("bit '{bit}': unit_cost must be >= 0 (got {value})")]
    NegativeUnitCost { bit: String, value: f64 },

    #[error("bit '{bit}': {field} must be a finite number (got {value})")]
    NonFiniteBitField {
        bit: String,
        field: &'static str,
        value: f64,
    },

    #[error("bit roster has an entry with an empty id")]
    EmptyBitId,

    #[error("duplicate bit id '{0}' — sequence references would be ambiguous")]
    DuplicateBitId(String),
}

/// Check rig and interval parameters.
pub fn validate_parameters(params: &DrillingParameters) -> Result<(), InvalidParameterError> {
    let finite_checks = [
        ("rig_cost_per_day", params.rig_cost_per_day),
        ("trip_speed", params.trip_speed),
        ("stand_length", params.stand_length),
        ("start_depth", params.start_depth),
        ("interval_to_drill", params.interval_to_drill),
        ("bit_change_overhead_hours", params.bit_change_overhead_hours),
    ];
    for (field, value) in finite_checks {
        if !value.is_finite() {
            return Err(InvalidParameterError::NonFiniteParameter { field, value });
        }
    }

    if params.trip_speed <= 0.0 {
        return Err(InvalidParameterError::NonPositiveTripSpeed(params.trip_speed));
    }
    if params.stand_length <= 0.0 {
        return Err(InvalidParameterError::NonPositiveStandLength(
            params.stand_length,
        ));
    }
    if params.rig_cost_per_day < 0.0 {
        return Err(InvalidParameterError::NegativeRigRate(params.rig_cost_per_day));
    }
    if params.start_depth < 0.0 {
        return Err(InvalidParameterError::NegativeStartDepth(params.start_depth));
    }
    if params.interval_to_drill < 0.0 {
        return Err(InvalidParameterError::NegativeInterval(
            params.interval_to_drill,
        ));
    }
    if params.bit_change_overhead_hours < 0.0 {
        return Err(InvalidParameterError::NegativeChangeOverhead(
            params.bit_change_overhead_hours,
        ));
    }

    Ok(())
}

/// Check every roster entry and id uniqueness.
pub fn validate_bit_types(bit_types: &[BitType]) -> Result<(), InvalidParameterError> {
    let mut seen = std::collections::HashSet::new();

    for bit in bit_types {
        if bit.id.is_empty() {
            return Err(InvalidParameterError::EmptyBitId);
        }
        if !seen.insert(bit.id.as_str()) {
            return Err(InvalidParameterError::DuplicateBitId(bit.id.clone()));
        }

        let finite_checks = [
            ("unit_cost", bit.unit_cost),
            ("penetration_rate", bit.penetration_rate),
            ("max_run_length", bit.max_run_length),
        ];
        for (field, value) in finite_checks {
            if !value.is_finite() {
                return Err(InvalidParameterError::NonFiniteBitField {
                    bit: bit.id.clone(),
                    field,
                    value,
                });
            }
        }

        if bit.penetration_rate <= 0.0 {
            return Err(InvalidParameterError::NonPositivePenetrationRate {
                bit: bit.id.clone(),
                value: bit.penetration_rate,
            });
        }
        if bit.max_run_length <= 0.0 {
            return Err(InvalidParameterError::NonPositiveMaxRunLength {
                bit: bit.id.clone(),
                value: bit.max_run_length,
            });
        }
        if bit.unit_cost < 0.0 {
            return Err(InvalidParameterError::NegativeUnitCost {
                bit: bit.id.clone(),
                value: bit.unit_cost,
            });
        }
    }

    Ok(())
}

// ============================================================================
// Warnings
// ============================================================================

/// A non-fatal campaign warning (suspicious value, degenerate roster).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — {s}")?;
        }
        Ok(())
    }
}

/// Trip speeds above this read like a data-entry slip, not a rig.
const SUSPICIOUS_TRIP_SPEED: f64 = 100.0;

/// Penetration rates above this are beyond anything a bit record should hold.
const SUSPICIOUS_PENETRATION_RATE: f64 = 500.0;

/// Validate a full campaign, returning lint warnings on success.
///
/// Hard errors short-circuit; warnings accumulate and are the caller's to
/// surface (the CLI logs them via `tracing::warn!`).
pub fn validate_campaign(
    params: &DrillingParameters,
    bit_types: &[BitType],
) -> Result<Vec<ValidationWarning>, InvalidParameterError> {
    validate_parameters(params)?;
    validate_bit_types(bit_types)?;

    let mut warnings = Vec::new();

    if params.rig_cost_per_day == 0.0 {
        warnings.push(ValidationWarning {
            field: "rig_cost_per_day".to_string(),
            message: "rig day rate is zero; plans will be ranked by bit cost alone".to_string(),
            suggestion: None,
        });
    }

    if params.trip_speed > SUSPICIOUS_TRIP_SPEED {
        warnings.push(ValidationWarning {
            field: "trip_speed".to_string(),
            message: format!(
                "trip speed {} stands/hr is far outside rig practice",
                params.trip_speed
            ),
            suggestion: Some("check the stands-per-hour figure".to_string()),
        });
    }

    for bit in bit_types {
        if bit.penetration_rate > SUSPICIOUS_PENETRATION_RATE {
            warnings.push(ValidationWarning {
                field: format!("bits.{}.penetration_rate", bit.id),
                message: format!(
                    "bit '{}' penetration rate {} length/hr is implausibly high",
                    bit.id, bit.penetration_rate
                ),
                suggestion: Some("check the units on this roster entry".to_string()),
            });
        }
    }

    if params.interval_to_drill > 0.0 && !bit_types.iter().any(|b| b.active) {
        warnings.push(ValidationWarning {
            field: "bits".to_string(),
            message: "no active bit types; the optimizer will produce no plan".to_string(),
            suggestion: Some("mark at least one roster entry active".to_string()),
        });
    }

    Ok(warnings)
}
