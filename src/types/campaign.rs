//! Campaign input types: drilling parameters, bit roster, bit sequences

use serde::{Deserialize, Serialize};

// ============================================================================
// Drilling Parameters
// ============================================================================

/// Rig and interval parameters for a drilling campaign.
///
/// All depths and lengths share one length unit (typically meters or feet —
/// the engine never converts); times are hours and costs are currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillingParameters {
    /// Rig day rate (currency/day), charged against every hour on the clock
    #[serde(default)]
    pub rig_cost_per_day: f64,

    /// Tripping speed (stands/hour); must be > 0 for finite trip time
    pub trip_speed: f64,

    /// Length of one stand of drill pipe (length/stand); must be > 0
    pub stand_length: f64,

    /// Depth at which the interval starts (length, ≥ 0)
    #[serde(default)]
    pub start_depth: f64,

    /// Distance still to drill from `start_depth` (length, ≥ 0)
    pub interval_to_drill: f64,

    /// Fixed circulation / bit-and-assembly change time per run (hours, ≥ 0)
    #[serde(default)]
    pub bit_change_overhead_hours: f64,
}

impl DrillingParameters {
    /// Target depth the campaign must reach. Derived, never stored.
    pub fn target_depth(&self) -> f64 {
        self.start_depth + self.interval_to_drill
    }

    /// Rig rate per hour on the clock.
    pub fn hourly_rig_rate(&self) -> f64 {
        self.rig_cost_per_day / 24.0
    }
}

// ============================================================================
// Bit Roster
// ============================================================================

/// One bit type in the roster.
///
/// A sequence entry referencing this id means "a fresh instance of this
/// type"; the same id may appear any number of times in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitType {
    /// Unique roster key, referenced by sequences
    pub id: String,

    /// Operator-facing name (shown in timelines and run tallies)
    pub name: String,

    /// Purchase cost of one instance (currency, ≥ 0)
    #[serde(default)]
    pub unit_cost: f64,

    /// Rate of penetration (length/hour); must be > 0
    pub penetration_rate: f64,

    /// Distance a single instance can drill before retirement (length, > 0)
    pub max_run_length: f64,

    /// Whether the optimizer may place this bit. The simulator ignores this
    /// flag and runs any bit explicitly present in a sequence.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// An ordered plan of bit runs, by roster id. Empty is a valid plan.
pub type BitSequence = Vec<String>;

// ============================================================================
// Scenario
// ============================================================================

/// A named, caller-owned plan: one ordered bit sequence plus identity.
///
/// Scenarios are authored in campaign files or synthesized by the optimizer;
/// the engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Stable caller-assigned key
    pub id: String,

    /// Display name
    pub name: String,

    /// Ordered bit ids; unknown ids are tolerated (skipped) by the simulator
    #[serde(default)]
    pub sequence: BitSequence,
}
