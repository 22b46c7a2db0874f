//! Deterministic campaign replay
//!
//! Walks an ordered bit sequence against a parameter set and produces the
//! full timeline plus summary metrics. Pure and total: unknown sequence ids
//! are skipped, undersized plans come back `Incomplete`, and nothing here
//! ever panics on caller data. Parameter ranges that would make the
//! arithmetic undefined (zero trip speed, zero penetration rate) are the
//! validation layer's responsibility — see `config::validation`.

use std::collections::BTreeMap;

use crate::fingerprint::scenario_fingerprint;
use crate::types::{
    Activity, BitType, DrillingParameters, Scenario, ScenarioResult, ScenarioStatus,
    SimulationStep,
};

use super::costs::{drilling_hours, round_trip_hours};

/// Replay a bit sequence and produce its `ScenarioResult`.
///
/// The result id is the input fingerprint and the name a run summary, which
/// keeps the result a pure function of its arguments. Callers replaying a
/// named plan should use [`simulate_scenario`] instead.
pub fn simulate(
    params: &DrillingParameters,
    bit_types: &[BitType],
    sequence: &[String],
) -> ScenarioResult {
    let id = scenario_fingerprint(params, bit_types, sequence);
    let name = describe_sequence(bit_types, sequence);
    replay(params, bit_types, sequence, id, name)
}

/// Replay a caller-owned scenario, keeping its id and name on the result.
pub fn simulate_scenario(
    params: &DrillingParameters,
    bit_types: &[BitType],
    scenario: &Scenario,
) -> ScenarioResult {
    replay(
        params,
        bit_types,
        &scenario.sequence,
        scenario.id.clone(),
        scenario.name.clone(),
    )
}

/// The timeline engine behind both entry points.
///
/// Runs until the target depth is reached or the sequence is exhausted.
/// Per run: a round trip to the current depth (waived for the first run,
/// which starts already in hole), the fixed changeover circulation, then
/// drilling `min(max_run_length, remaining)`. The bit purchase is charged on
/// the first step its run emits; rig time is charged per step. Zero-duration
/// trip and circulation steps are elided.
fn replay(
    params: &DrillingParameters,
    bit_types: &[BitType],
    sequence: &[String],
    id: String,
    name: String,
) -> ScenarioResult {
    debug_assert!(
        params.trip_speed > 0.0 && params.stand_length > 0.0,
        "parameters must be validated before simulation"
    );

    let target = params.target_depth();
    let hourly = params.hourly_rig_rate();

    let mut depth = params.start_depth;
    let mut hours = 0.0_f64;
    let mut cost = 0.0_f64;
    let mut runs = 0_u32;
    let mut bits_used: BTreeMap<String, u32> = BTreeMap::new();

    let mut steps = vec![SimulationStep {
        depth,
        elapsed_hours: hours,
        cumulative_cost: cost,
        activity: Activity::Start,
        bit_name: None,
    }];

    for bit_id in sequence {
        if depth >= target {
            break;
        }

        let Some(bit) = bit_types.iter().find(|b| &b.id == bit_id) else {
            tracing::debug!(bit_id = %bit_id, "sequence references an unknown bit id — skipping entry");
            continue;
        };

        // Cap the run at the remaining interval; pin the end depth to the
        // target exactly when the cap applies so completion is not lost to
        // float accumulation.
        let remaining = target - depth;
        let (run_length, end_depth) = if bit.max_run_length >= remaining {
            (remaining, target)
        } else {
            (bit.max_run_length, depth + bit.max_run_length)
        };

        // The bit purchase rides on the first step this run emits.
        let mut bit_charge = bit.unit_cost;

        if runs > 0 {
            let trip = round_trip_hours(depth, params);
            if trip > 0.0 {
                hours += trip;
                cost += trip * hourly + bit_charge;
                bit_charge = 0.0;
                steps.push(SimulationStep {
                    depth,
                    elapsed_hours: hours,
                    cumulative_cost: cost,
                    activity: Activity::Tripping,
                    bit_name: None,
                });
            }
        }

        let overhead = params.bit_change_overhead_hours;
        if overhead > 0.0 {
            hours += overhead;
            cost += overhead * hourly + bit_charge;
            bit_charge = 0.0;
            steps.push(SimulationStep {
                depth,
                elapsed_hours: hours,
                cumulative_cost: cost,
                activity: Activity::Circulating,
                bit_name: None,
            });
        }

        let drill = drilling_hours(run_length, bit);
        depth = end_depth;
        hours += drill;
        cost += drill * hourly + bit_charge;
        steps.push(SimulationStep {
            depth,
            elapsed_hours: hours,
            cumulative_cost: cost,
            activity: Activity::Drilling,
            bit_name: Some(bit.name.clone()),
        });

        *bits_used.entry(bit.name.clone()).or_insert(0) += 1;
        runs += 1;
    }

    let drilled = depth - params.start_depth;
    let status = if depth >= target {
        ScenarioStatus::Complete
    } else {
        ScenarioStatus::Incomplete
    };
    let cost_per_unit_depth = if drilled > 0.0 { cost / drilled } else { 0.0 };

    ScenarioResult {
        id,
        name,
        steps,
        total_time_hours: hours,
        total_cost: cost,
        cost_per_unit_depth,
        bits_used,
        status,
    }
}

/// Human summary of a plan, run-length encoded in authored order.
///
/// Unknown ids keep their raw id so an operator can spot the stale
/// reference. An empty plan reads "Empty plan".
pub fn describe_sequence(bit_types: &[BitType], sequence: &[String]) -> String {
    if sequence.is_empty() {
        return "Empty plan".to_string();
    }

    let mut groups: Vec<(String, u32)> = Vec::new();
    for bit_id in sequence {
        let label = bit_types
            .iter()
            .find(|b| &b.id == bit_id)
            .map_or_else(|| bit_id.clone(), |b| b.name.clone());
        match groups.last_mut() {
            Some((last, count)) if *last == label => *count += 1,
            _ => groups.push((label, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(label, count)| {
            if count == 1 {
                label
            } else {
                format!("{label} ×{count}")
            }
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
