//! Simulation output types: timeline steps and scenario results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Timeline Activities
// ============================================================================

/// What the rig is doing at a timeline point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// Campaign start marker, always the first step
    Start,
    /// Moving the drill string in/out of the hole
    Tripping,
    /// Circulating while changing bit and assembly
    Circulating,
    /// Making hole with a bit on bottom
    Drilling,
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Start => write!(f, "Start"),
            Activity::Tripping => write!(f, "Tripping"),
            Activity::Circulating => write!(f, "Circulating"),
            Activity::Drilling => write!(f, "Drilling"),
        }
    }
}

// ============================================================================
// Timeline Steps
// ============================================================================

/// One point on a scenario timeline.
///
/// Steps are append-only and ordered by time; depth, elapsed time, and
/// cumulative cost are all non-decreasing along the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// Hole depth after this activity (length units)
    pub depth: f64,

    /// Hours on the clock since campaign start
    pub elapsed_hours: f64,

    /// Total spend so far, rig time plus bit purchases
    pub cumulative_cost: f64,

    /// Activity this step accounts for
    pub activity: Activity,

    /// Name of the bit on bottom; set when `activity` is `Drilling`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_name: Option<String>,
}

// ============================================================================
// Scenario Results
// ============================================================================

/// Whether a plan reached the target depth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Final depth reached or passed the target
    Complete,
    /// Sequence exhausted short of the target
    Incomplete,
}

impl std::fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioStatus::Complete => write!(f, "complete"),
            ScenarioStatus::Incomplete => write!(f, "incomplete"),
        }
    }
}

/// Full replay of one scenario: timeline plus summary metrics.
///
/// A result is a pure function of `(parameters, bit roster, sequence)` — it
/// has no lifecycle of its own and is recomputed whenever any input changes.
/// Callers that care about recomputation cost should memoize by input
/// fingerprint (see `fingerprint::scenario_fingerprint`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario id (caller-assigned, or the input fingerprint)
    pub id: String,

    /// Display name
    pub name: String,

    /// Timeline; at least one step, the first always `Activity::Start`
    pub steps: Vec<SimulationStep>,

    /// Hours from campaign start to the end of the last run
    pub total_time_hours: f64,

    /// Total spend: rig time plus bit purchases
    pub total_cost: f64,

    /// `total_cost / distance actually drilled`, 0.0 when nothing was drilled
    pub cost_per_unit_depth: f64,

    /// Run count per bit name. Ordered map so serialized output is stable.
    pub bits_used: BTreeMap<String, u32>,

    /// Whether the plan reached the target depth
    pub status: ScenarioStatus,
}

impl ScenarioResult {
    /// Depth at the end of the timeline.
    pub fn final_depth(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.depth)
    }

    /// Total runs across all bit types.
    pub fn total_runs(&self) -> u32 {
        self.bits_used.values().sum()
    }
}
