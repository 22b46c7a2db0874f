//! Lowest-cost plan search over discretized depth
//!
//! The cost of a run depends only on the depth already reached, never on
//! which bits produced that depth, so minimum remaining cost is a function
//! of depth alone. That optimal substructure makes the search a dynamic
//! program over drilled distance: states are whole resolution units of the
//! interval, each state holds the cheapest way to finish from there, and the
//! winning plan falls out of walking the recorded choices forward.

use crate::simulator::costs::{round_trip_hours, run_cost};
use crate::types::{BitSequence, BitType, DrillingParameters};

/// Depth resolution (length units) for the state grid. Shrunk adaptively
/// when the smallest active bit would otherwise advance zero states.
const DEPTH_RESOLUTION: f64 = 1.0;

/// Cheapest known way to finish from one depth state.
#[derive(Clone, Copy)]
struct Cell {
    cost: f64,
    runs: u32,
}

impl Cell {
    const UNSEEN: Self = Self {
        cost: f64::INFINITY,
        runs: u32::MAX,
    };

    /// Strict improvement test: lower cost, or equal cost in fewer runs.
    /// Candidates are offered in ascending bit-id order, so keeping the
    /// incumbent on a full tie yields the lexicographically smallest plan.
    fn improves_on(&self, incumbent: &Self) -> bool {
        self.cost < incumbent.cost || (self.cost == incumbent.cost && self.runs < incumbent.runs)
    }
}

/// Search for the lowest-cost sequence of active bits that reaches the
/// target depth.
///
/// Returns an empty sequence when no active bit exists or there is nothing
/// left to drill — never an error. Any non-empty result, replayed through
/// the simulator, reports `Complete`: a bit's modeled advance per run
/// (`floor(max_run_length / Δ)` states) never exceeds its actual advance,
/// so the real replay reaches the target at least as fast as the model.
pub fn optimize(params: &DrillingParameters, bit_types: &[BitType]) -> BitSequence {
    // Candidate roster: active bits that can make progress. Sorted by id so
    // the tie-breaking scan is deterministic.
    let mut active: Vec<&BitType> = bit_types
        .iter()
        .filter(|b| b.active && b.penetration_rate > 0.0 && b.max_run_length > 0.0)
        .collect();
    active.sort_by(|a, b| a.id.cmp(&b.id));

    if active.is_empty() || params.interval_to_drill <= 0.0 {
        return Vec::new();
    }

    // Resolution must not round the shortest run down to zero states.
    let shortest_run = active
        .iter()
        .map(|b| b.max_run_length)
        .fold(f64::INFINITY, f64::min);
    let delta = DEPTH_RESOLUTION.min(shortest_run);

    let state_count = (params.interval_to_drill / delta).ceil() as usize;
    let advances: Vec<usize> = active
        .iter()
        .map(|b| (b.max_run_length / delta).floor() as usize)
        .collect();

    tracing::debug!(
        states = state_count,
        bits = active.len(),
        resolution = delta,
        "searching bit sequences"
    );

    let target = params.target_depth();

    // cost_to_finish[k] = cheapest completion from k drilled units, assuming
    // the next run pays a trip (true for every run but the first).
    let mut cost_to_finish = vec![Cell::UNSEEN; state_count + 1];
    let mut choice: Vec<Option<usize>> = vec![None; state_count + 1];
    cost_to_finish[state_count] = Cell { cost: 0.0, runs: 0 };

    for k in (1..state_count).rev() {
        let depth = params.start_depth + (k as f64) * delta;
        let remaining = target - depth;
        let trip = round_trip_hours(depth, params);

        for (idx, bit) in active.iter().enumerate() {
            // Overshoot beyond the target collapses into the final state —
            // drilling past it only ever costs more, so deeper states need
            // no representation.
            let landing = (k + advances[idx]).min(state_count);
            let run_length = bit.max_run_length.min(remaining);
            let candidate = Cell {
                cost: run_cost(bit, run_length, trip, params) + cost_to_finish[landing].cost,
                runs: 1 + cost_to_finish[landing].runs,
            };
            if candidate.improves_on(&cost_to_finish[k]) {
                cost_to_finish[k] = candidate;
                choice[k] = Some(idx);
            }
        }
    }

    // First run: same selection, but starting already in hole — no trip.
    let mut best = Cell::UNSEEN;
    let mut first_choice: Option<usize> = None;
    let first_remaining = params.interval_to_drill;
    for (idx, bit) in active.iter().enumerate() {
        let landing = advances[idx].min(state_count);
        let run_length = bit.max_run_length.min(first_remaining);
        let candidate = Cell {
            cost: run_cost(bit, run_length, 0.0, params) + cost_to_finish[landing].cost,
            runs: 1 + cost_to_finish[landing].runs,
        };
        if candidate.improves_on(&best) {
            best = candidate;
            first_choice = Some(idx);
        }
    }

    // Walk the recorded choices forward into the final plan.
    let mut sequence = Vec::new();
    let Some(first) = first_choice else {
        return sequence;
    };
    sequence.push(active[first].id.clone());
    let mut k = advances[first].min(state_count);
    while k < state_count {
        let Some(idx) = choice[k] else {
            debug_assert!(false, "every interior state has a recorded choice");
            break;
        };
        sequence.push(active[idx].id.clone());
        k = (k + advances[idx]).min(state_count);
    }

    tracing::debug!(
        runs = sequence.len(),
        modeled_cost = best.cost,
        "plan selected"
    );

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::simulate;
    use crate::types::ScenarioStatus;

    fn make_params() -> DrillingParameters {
        DrillingParameters {
            rig_cost_per_day: 24_000.0,
            trip_speed: 40.0,
            stand_length: 25.0,
            start_depth: 2000.0,
            interval_to_drill: 1200.0,
            bit_change_overhead_hours: 6.0,
        }
    }

    fn make_bit(id: &str, unit_cost: f64, max_run_length: f64) -> BitType {
        BitType {
            id: id.to_string(),
            name: id.to_uppercase(),
            unit_cost,
            penetration_rate: 5.0,
            max_run_length,
            active: true,
        }
    }

    #[test]
    fn no_active_bits_returns_empty_plan() {
        let mut bits = vec![
            make_bit("a", 15_000.0, 150.0),
            make_bit("b", 25_000.0, 450.0),
        ];
        for b in &mut bits {
            b.active = false;
        }
        assert!(optimize(&make_params(), &bits).is_empty());
    }

    #[test]
    fn empty_roster_returns_empty_plan() {
        assert!(optimize(&make_params(), &[]).is_empty());
    }

    #[test]
    fn zero_interval_returns_empty_plan() {
        let mut params = make_params();
        params.interval_to_drill = 0.0;
        let bits = vec![make_bit("b", 25_000.0, 450.0)];
        assert!(optimize(&params, &bits).is_empty());
    }

    #[test]
    fn inactive_bits_are_never_placed() {
        let mut bits = vec![
            make_bit("a", 1.0, 450.0), // absurdly cheap but inactive
            make_bit("b", 25_000.0, 450.0),
        ];
        bits[0].active = false;
        let plan = optimize(&make_params(), &bits);
        assert!(plan.iter().all(|id| id == "b"));
    }

    #[test]
    fn plan_replays_to_complete() {
        let bits = vec![
            make_bit("a", 15_000.0, 150.0),
            make_bit("b", 25_000.0, 450.0),
        ];
        let plan = optimize(&make_params(), &bits);
        assert!(!plan.is_empty());
        let result = simulate(&make_params(), &bits, &plan);
        assert_eq!(result.status, ScenarioStatus::Complete);
    }

    #[test]
    fn long_runs_beat_cheap_short_runs_here() {
        // Three 450-runs of B cover the interval with two trips; covering it
        // with 150-runs of A needs eight runs and seven ever-deeper trips.
        let bits = vec![
            make_bit("a", 15_000.0, 150.0),
            make_bit("b", 25_000.0, 450.0),
        ];
        let plan = optimize(&make_params(), &bits);
        assert_eq!(plan, vec!["b", "b", "b"]);
    }

    #[test]
    fn equal_cost_prefers_fewer_runs() {
        // Zero rig rate reduces cost to bit purchases alone: one 600-run at
        // 200 ties two 300-runs at 100 each, so the single run must win.
        let mut params = make_params();
        params.rig_cost_per_day = 0.0;
        params.interval_to_drill = 600.0;
        let bits = vec![
            make_bit("narrow", 100.0, 300.0),
            make_bit("wide", 200.0, 600.0),
        ];
        let plan = optimize(&params, &bits);
        assert_eq!(plan, vec!["wide"]);
    }

    #[test]
    fn full_tie_prefers_lexicographically_smallest_ids() {
        let mut params = make_params();
        params.rig_cost_per_day = 0.0;
        params.interval_to_drill = 600.0;
        let bits = vec![
            make_bit("beta", 100.0, 300.0),
            make_bit("alpha", 100.0, 300.0),
        ];
        let plan = optimize(&params, &bits);
        assert_eq!(plan, vec!["alpha", "alpha"]);
    }

    #[test]
    fn deterministic_across_calls() {
        let bits = vec![
            make_bit("a", 15_000.0, 150.0),
            make_bit("b", 25_000.0, 450.0),
            make_bit("c", 40_000.0, 900.0),
        ];
        let first = optimize(&make_params(), &bits);
        let second = optimize(&make_params(), &bits);
        assert_eq!(first, second);
    }

    #[test]
    fn sub_unit_run_lengths_shrink_the_resolution() {
        // A 0.5-length bit must still make progress on the state grid.
        let mut params = make_params();
        params.interval_to_drill = 5.0;
        let bits = vec![make_bit("tiny", 10.0, 0.5)];
        let plan = optimize(&params, &bits);
        assert_eq!(plan.len(), 10);
        let result = simulate(&params, &bits, &plan);
        assert_eq!(result.status, ScenarioStatus::Complete);
    }
}
