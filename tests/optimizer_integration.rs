//! Optimizer Integration Tests
//!
//! Verifies the search end-to-end against the simulator: soundness (every
//! returned plan replays to complete), minimality against brute-force
//! enumeration on small rosters, and the deterministic tie-breaking order.

use rigplan::{optimize, simulate, BitType, DrillingParameters, ScenarioStatus};

fn make_params() -> DrillingParameters {
    DrillingParameters {
        rig_cost_per_day: 2_400.0, // 100/hour
        trip_speed: 40.0,
        stand_length: 25.0, // round trip = 2 × depth / 1000 hours
        start_depth: 1000.0,
        interval_to_drill: 400.0,
        bit_change_overhead_hours: 2.0,
    }
}

fn make_bits() -> Vec<BitType> {
    vec![
        BitType {
            id: "a".to_string(),
            name: "A".to_string(),
            unit_cost: 1_000.0,
            penetration_rate: 10.0,
            max_run_length: 250.0,
            active: true,
        },
        BitType {
            id: "b".to_string(),
            name: "B".to_string(),
            unit_cost: 1_800.0,
            penetration_rate: 20.0,
            max_run_length: 400.0,
            active: true,
        },
    ]
}

/// Every id-sequence over `ids` up to `max_len`, shortest first and in
/// lexicographic order within a length, matching the optimizer's tie-break.
fn enumerate_plans(ids: &[&str], max_len: usize) -> Vec<Vec<String>> {
    let mut plans: Vec<Vec<String>> = vec![Vec::new()];
    let mut frontier: Vec<Vec<String>> = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for plan in &frontier {
            for id in ids {
                let mut extended = plan.clone();
                extended.push((*id).to_string());
                next.push(extended);
            }
        }
        plans.extend(next.iter().cloned());
        frontier = next;
    }
    plans
}

/// Cheapest complete plan by (cost, runs, lexicographic ids).
fn brute_force_best(
    params: &DrillingParameters,
    bits: &[BitType],
    max_len: usize,
) -> Option<(Vec<String>, f64)> {
    let ids: Vec<&str> = bits.iter().map(|b| b.id.as_str()).collect();
    let mut best: Option<(Vec<String>, f64)> = None;

    for plan in enumerate_plans(&ids, max_len) {
        let result = simulate(params, bits, &plan);
        if result.status != ScenarioStatus::Complete {
            continue;
        }
        let cost = result.total_cost;
        let better = match &best {
            None => true,
            Some((incumbent, incumbent_cost)) => {
                cost < incumbent_cost - 1e-9
                    || ((cost - incumbent_cost).abs() <= 1e-9
                        && (plan.len() < incumbent.len()
                            || (plan.len() == incumbent.len() && plan < *incumbent)))
            }
        };
        if better {
            best = Some((plan, cost));
        }
    }
    best
}

// ============================================================================
// Soundness
// ============================================================================

#[test]
fn returned_plans_always_replay_to_complete() {
    let bits = make_bits();
    for interval in [1.0, 150.0, 400.0, 777.0, 1200.0] {
        let mut params = make_params();
        params.interval_to_drill = interval;
        let plan = optimize(&params, &bits);
        assert!(!plan.is_empty(), "active roster must always yield a plan");
        let result = simulate(&params, &bits, &plan);
        assert_eq!(
            result.status,
            ScenarioStatus::Complete,
            "plan for interval {interval} fell short"
        );
    }
}

#[test]
fn all_inactive_yields_no_plan() {
    let mut bits = make_bits();
    for bit in &mut bits {
        bit.active = false;
    }
    assert!(optimize(&make_params(), &bits).is_empty());
}

// ============================================================================
// Minimality (brute-force spot-checks)
// ============================================================================

#[test]
fn matches_brute_force_on_the_two_bit_roster() {
    let params = make_params();
    let bits = make_bits();

    let plan = optimize(&params, &bits);
    let result = simulate(&params, &bits, &plan);
    let (best_plan, best_cost) =
        brute_force_best(&params, &bits, 4).expect("roster can reach the target");

    assert!(
        result.total_cost <= best_cost + 1e-6,
        "optimizer cost {} worse than brute force {}",
        result.total_cost,
        best_cost
    );
    assert_eq!(plan, best_plan);
}

#[test]
fn matches_brute_force_when_short_runs_win() {
    // Make the long bit wildly expensive so stacking short runs is optimal.
    let params = make_params();
    let mut bits = make_bits();
    bits[1].unit_cost = 50_000.0;

    let plan = optimize(&params, &bits);
    let result = simulate(&params, &bits, &plan);
    let (best_plan, best_cost) =
        brute_force_best(&params, &bits, 4).expect("roster can reach the target");

    assert!(result.total_cost <= best_cost + 1e-6);
    assert_eq!(plan, best_plan);
    assert!(plan.iter().all(|id| id == "a"));
}

#[test]
fn single_cheap_long_run_beats_alternatives() {
    // By hand: [b] = 1800 + (2 + 20) h × 100 = 4000, cheaper than any mix.
    let params = make_params();
    let bits = make_bits();
    let plan = optimize(&params, &bits);
    assert_eq!(plan, vec!["b"]);

    let result = simulate(&params, &bits, &plan);
    assert!((result.total_cost - 4_000.0).abs() < 1e-9);
}

// ============================================================================
// Determinism & Tie-Breaking
// ============================================================================

#[test]
fn repeated_searches_are_identical() {
    let params = make_params();
    let bits = make_bits();
    let first = optimize(&params, &bits);
    for _ in 0..5 {
        assert_eq!(optimize(&params, &bits), first);
    }
}

#[test]
fn roster_order_does_not_change_the_plan() {
    let params = make_params();
    let mut bits = make_bits();
    let forward = optimize(&params, &bits);
    bits.reverse();
    let reversed = optimize(&params, &bits);
    assert_eq!(forward, reversed);
}

#[test]
fn cost_ties_resolve_to_fewer_runs_then_smaller_ids() {
    // Zero rig rate: cost is bit purchases only, so ties are exact.
    let mut params = make_params();
    params.rig_cost_per_day = 0.0;
    params.interval_to_drill = 600.0;

    let bits = vec![
        BitType {
            id: "m-300".to_string(),
            name: "M 300".to_string(),
            unit_cost: 100.0,
            penetration_rate: 10.0,
            max_run_length: 300.0,
            active: true,
        },
        BitType {
            id: "w-600".to_string(),
            name: "W 600".to_string(),
            unit_cost: 200.0,
            penetration_rate: 10.0,
            max_run_length: 600.0,
            active: true,
        },
    ];

    // 1 × w-600 ties 2 × m-300 at 200 — fewer runs wins
    assert_eq!(optimize(&params, &bits), vec!["w-600"]);

    // Two interchangeable bits — lexicographically smaller id wins
    let twins = vec![
        BitType {
            id: "beta".to_string(),
            name: "Beta".to_string(),
            unit_cost: 100.0,
            penetration_rate: 10.0,
            max_run_length: 300.0,
            active: true,
        },
        BitType {
            id: "alpha".to_string(),
            name: "Alpha".to_string(),
            unit_cost: 100.0,
            penetration_rate: 10.0,
            max_run_length: 300.0,
            active: true,
        },
    ];
    assert_eq!(optimize(&params, &twins), vec!["alpha", "alpha"]);
}
