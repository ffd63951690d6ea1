//! ILP/LP Optimizer (component F, §4.F).
//!
//! Builds `max c·x` subject to the windowed penalty constraints and dispatches
//! it to `good_lp`'s bundled `coin_cbc` backend; the core only owns the
//! coefficient assembly.

use good_lp::{
    Expression, ProblemVariables, Solution, SolverModel, Variable, constraint, variable,
};

use crate::err::SolverError;
use crate::slot::Slot;

/// Which quantity the objective maximises over the retained slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Maximise total retained variant count (the default).
    VariantCount,
    /// Maximise count of retained positions (`--pos`).
    PositionCount,
}

/// Window lower bound `lo(i)`: smallest slot index j with `pos[j] > reach[i]`.
fn window_lo(positions: &[u64], reach: u64) -> usize {
    positions.partition_point(|&p| p <= reach)
}

/// Solve the binary ILP and write the result into `slots[i].retained`.
pub fn solve_ilp(slots: &mut [Slot], delta: u64, objective: Objective) -> Result<(), SolverError> {
    let n = slots.len();
    if n == 0 {
        return Ok(());
    }
    let positions: Vec<u64> = slots.iter().map(|s| s.pos).collect();

    let mut problem = ProblemVariables::new();
    let x: Vec<Variable> = problem.add_vector(variable().binary(), n);

    let mut objective_expr = Expression::from(0.0);
    for (i, &xi) in x.iter().enumerate() {
        let weight = match objective {
            Objective::VariantCount => slots[i].count as f64,
            Objective::PositionCount => 1.0,
        };
        objective_expr += weight * xi;
    }

    let mut model = problem
        .maximise(objective_expr)
        .using(good_lp::default_solver);

    for i in 0..n {
        let lo = window_lo(&positions, slots[i].reach);
        let mut lhs = Expression::from(0.0);
        for j in lo..=i {
            lhs += slots[j].penalty as f64 * x[j];
        }
        model = model.with(constraint!(lhs <= delta as f64));
    }

    let solution = model.solve().map_err(translate_error)?;

    for (i, &xi) in x.iter().enumerate() {
        slots[i].retained = solution.value(xi) < 0.5;
    }
    Ok(())
}

/// Window lower bound matching `p[i]-p[j] < alpha` directly (the pure-SNP
/// loader never produces deletion shortcuts, so this is the same window the
/// original `lp_snp` tool scans, not the reach-derived α−1 window).
fn window_lo_by_distance(positions: &[u64], i: usize, alpha: u64) -> usize {
    let bound = positions[i].saturating_sub(alpha);
    positions.partition_point(|&p| p <= bound)
}

/// Solve the LP relaxation (x ∈ [0,1], uniform penalty 1) and repair any
/// rounded assignment that would violate a window budget by forcing
/// retention — an LP relaxation's rounded solution is not guaranteed
/// feasible, so this is a conservative repair pass (§9 Open Question).
pub fn solve_lp_relaxation(slots: &mut [Slot], alpha: u64, delta: u64) -> Result<(), SolverError> {
    let n = slots.len();
    if n == 0 {
        return Ok(());
    }
    let positions: Vec<u64> = slots.iter().map(|s| s.pos).collect();

    let mut problem = ProblemVariables::new();
    let x: Vec<Variable> = problem.add_vector(variable().min(0.0).max(1.0), n);

    let mut objective_expr = Expression::from(0.0);
    for (i, &xi) in x.iter().enumerate() {
        objective_expr += slots[i].count as f64 * xi;
    }

    let mut model = problem
        .maximise(objective_expr)
        .using(good_lp::default_solver);

    for i in 0..n {
        let lo = window_lo_by_distance(&positions, i, alpha);
        let mut lhs = Expression::from(0.0);
        for &xj in &x[lo..=i] {
            lhs += xj;
        }
        model = model.with(constraint!(lhs <= delta as f64));
    }

    let solution = model.solve().map_err(translate_error)?;

    for (i, &xi) in x.iter().enumerate() {
        slots[i].retained = solution.value(xi) < 0.5;
    }

    // Repair pass: re-validate each window against the rounded assignment.
    let mut cum = vec![0u64; n + 1];
    for i in 0..n {
        let lo = window_lo_by_distance(&positions, i, alpha);
        let inflight = cum[i] - cum[lo];
        let pen = 1u64;
        if !slots[i].retained && inflight + pen <= delta {
            cum[i + 1] = cum[i] + pen;
        } else {
            slots[i].retained = true;
            cum[i + 1] = cum[i];
        }
    }

    Ok(())
}

fn translate_error(err: good_lp::ResolutionError) -> SolverError {
    match err {
        good_lp::ResolutionError::Infeasible => SolverError::Infeasible,
        good_lp::ResolutionError::Unbounded => SolverError::Unbounded,
        good_lp::ResolutionError::Other(msg) => SolverError::Other(msg.to_string()),
        good_lp::ResolutionError::Str(msg) => SolverError::Other(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reach::compute_reach;
    use crate::slot::VariantSet;

    fn snp_slots(positions: &[(u64, u64)]) -> Vec<Slot> {
        positions
            .iter()
            .map(|&(pos, count)| Slot {
                pos,
                count,
                snp_count: count,
                max_ins: 0,
                max_del: 0,
                snp_present: true,
                penalty: 1,
                reach: 0,
                retained: false,
            })
            .collect()
    }

    #[test]
    fn s5_ilp_strictly_beats_greedy_when_counts_diverge() {
        // alpha=4, delta=2, counts (1,10,1) at positions 1,2,3.
        let mut slots = snp_slots(&[(1, 1), (2, 10), (3, 1)]);
        let variants = VariantSet::default();
        let reach = compute_reach(&slots, &variants, 4).unwrap();
        for (s, r) in slots.iter_mut().zip(reach) {
            s.reach = r;
        }
        solve_ilp(&mut slots, 2, Objective::VariantCount).unwrap();

        // Exactly one slot may be dropped under the window budget; the ILP
        // must keep the count-10 position retained.
        assert!(slots[1].retained);
        let dropped = slots.iter().filter(|s| !s.retained).count();
        assert_eq!(dropped, 1);
    }

    #[test]
    fn ilp_objective_is_at_least_greedy_objective() {
        use crate::optimize::greedy_sweep;

        let mut ilp_slots = snp_slots(&[(1, 1), (2, 10), (3, 1)]);
        let mut greedy_slots = ilp_slots.clone();
        let variants = VariantSet::default();
        let reach = compute_reach(&ilp_slots, &variants, 4).unwrap();
        for (s, r) in ilp_slots.iter_mut().zip(reach.iter()) {
            s.reach = *r;
        }
        for (s, r) in greedy_slots.iter_mut().zip(reach) {
            s.reach = r;
        }

        solve_ilp(&mut ilp_slots, 2, Objective::VariantCount).unwrap();
        greedy_sweep(&mut greedy_slots, 2);

        let ilp_obj: u64 = ilp_slots
            .iter()
            .filter(|s| !s.retained)
            .map(|s| s.count)
            .sum();
        let greedy_obj: u64 = greedy_slots
            .iter()
            .filter(|s| !s.retained)
            .map(|s| s.count)
            .sum();
        assert!(ilp_obj >= greedy_obj);
    }

    #[test]
    fn lp_relaxation_weighs_objective_by_count_not_uniformly() {
        // alpha=4, delta=2, counts (1,10,1) at positions 1,2,3: the only
        // admissible single drop that maximises the weighted objective must
        // keep the count-10 position retained, same as the ILP.
        let mut slots = snp_slots(&[(1, 1), (2, 10), (3, 1)]);
        solve_lp_relaxation(&mut slots, 4, 2).unwrap();

        assert!(slots[1].retained);
        let dropped = slots.iter().filter(|s| !s.retained).count();
        assert_eq!(dropped, 1);
    }

    #[test]
    fn lp_relaxation_window_matches_direct_distance_formula() {
        // alpha=3: p[i]-p[j] < 3 admits j at distance 1 or 2. A single
        // variant at position 1 and one at position 3 fall in the same
        // window (3-1=2 < 3), so both cannot be dropped under delta=1.
        let mut slots = snp_slots(&[(1, 1), (3, 1)]);
        solve_lp_relaxation(&mut slots, 3, 1).unwrap();

        let dropped = slots.iter().filter(|s| !s.retained).count();
        assert_eq!(dropped, 1);
    }
}
