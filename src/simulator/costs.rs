//! Time and cost building blocks for bit runs
//!
//! Pure helpers shared by the timeline simulator and the optimizer's cost
//! model. All of them assume parameters already passed the validation layer;
//! degenerate inputs are guarded with `debug_assert!` rather than errors.

use crate::types::{BitType, DrillingParameters};

// ============================================================================
// Trip Time
// ============================================================================

/// Hours for a round trip (pull out + run back in) at the given depth.
///
/// Formula: `2 × depth / (trip_speed × stand_length)`
///
/// Where:
/// - depth = current hole depth (length units)
/// - trip_speed = stands/hour
/// - stand_length = length/stand
pub fn round_trip_hours(depth: f64, params: &DrillingParameters) -> f64 {
    debug_assert!(
        params.trip_speed > 0.0 && params.stand_length > 0.0,
        "trip speed and stand length must be validated as > 0 before simulation"
    );

    let length_per_hour = params.trip_speed * params.stand_length;
    if length_per_hour <= 0.0 {
        return 0.0;
    }

    2.0 * depth / length_per_hour
}

// ============================================================================
// Drilling Time
// ============================================================================

/// Hours to drill `run_length` with the given bit.
///
/// Formula: `run_length / penetration_rate`
pub fn drilling_hours(run_length: f64, bit: &BitType) -> f64 {
    debug_assert!(
        bit.penetration_rate > 0.0,
        "penetration rate must be validated as > 0 before simulation"
    );

    if bit.penetration_rate <= 0.0 {
        return 0.0;
    }

    run_length / bit.penetration_rate
}

// ============================================================================
// Run Cost
// ============================================================================

/// Total cost of one bit run: bit purchase plus rig time for the trip,
/// the changeover circulation, and the drilling itself.
///
/// `trip_hours` is passed in rather than derived so the caller decides
/// whether this run pays a trip (the first run of a campaign starts already
/// in hole and pays none).
pub fn run_cost(
    bit: &BitType,
    run_length: f64,
    trip_hours: f64,
    params: &DrillingParameters,
) -> f64 {
    let on_clock =
        trip_hours + params.bit_change_overhead_hours + drilling_hours(run_length, bit);
    bit.unit_cost + on_clock * params.hourly_rig_rate()
}

// ============================================================================
// Sequence Capacity
// ============================================================================

/// Total distance a sequence can drill: sum of `max_run_length` over its
/// resolvable entries.
///
/// A quick feasibility check — `capacity < interval_to_drill` guarantees an
/// incomplete replay without running the simulator. Unknown ids contribute
/// nothing, mirroring the simulator's skip policy.
pub fn sequence_capacity(bit_types: &[BitType], sequence: &[String]) -> f64 {
    sequence
        .iter()
        .filter_map(|id| bit_types.iter().find(|b| &b.id == id))
        .map(|b| b.max_run_length)
        .sum()
}
