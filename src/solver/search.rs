//! Deterministic branch-and-bound search over presence variables.
//!
//! Depth-first over jobs in input order; at each job the branches are
//! its candidate tanks in candidate order, then "skip". Feasibility is
//! maintained incrementally (tank span overlap against placed
//! candidates, per-slot worker demand against capacity) and undone on
//! backtrack. An incumbent stores the best complete assignment found;
//! a node is pruned when even scheduling every remaining job cannot
//! beat it. Ties keep the first incumbent, so runs are reproducible.
//!
//! A wall-clock budget bounds the search. On expiry the incumbent (if
//! any) is returned as a feasible, possibly suboptimal result; the
//! search never blocks past the budget and never panics.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::models::SolveStatus;
use crate::solver::model::ConstraintModel;

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Per-candidate presence decisions.
    pub presence: Vec<bool>,
    /// How the search terminated.
    pub status: SolveStatus,
    /// Objective value of the returned assignment (meaningless for
    /// `NoSolution`).
    pub objective: i64,
    /// Search tree nodes expanded.
    pub nodes: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Runs the search under a wall-clock budget.
///
/// An empty model returns immediately with an all-false optimal
/// assignment.
pub fn solve(model: &ConstraintModel<'_>, budget: Duration) -> SolveReport {
    let started = Instant::now();
    let mut search = Search {
        model,
        deadline: started + budget,
        usage: vec![0; model.total_slots()],
        picked: Vec::with_capacity(model.groups.len()),
        best: None,
        nodes: 0,
        expired: false,
    };
    search.descend(0, 0);

    let elapsed = started.elapsed();
    let (status, presence, objective) = match (search.expired, search.best) {
        (false, Some((score, presence))) => (SolveStatus::Optimal, presence, score),
        (true, Some((score, presence))) => (SolveStatus::Feasible, presence, score),
        (_, None) => (
            SolveStatus::NoSolution,
            vec![false; model.candidates.len()],
            0,
        ),
    };
    debug!(
        ?status,
        objective,
        nodes = search.nodes,
        ?elapsed,
        "search finished"
    );

    SolveReport {
        presence,
        status,
        objective,
        nodes: search.nodes,
        elapsed,
    }
}

struct Search<'m, 'a> {
    model: &'m ConstraintModel<'a>,
    deadline: Instant,
    /// Per-slot worker demand of the candidates placed so far.
    usage: Vec<u32>,
    /// Candidate index chosen per decided group.
    picked: Vec<usize>,
    /// Best complete assignment: (score, presence).
    best: Option<(i64, Vec<bool>)>,
    nodes: u64,
    expired: bool,
}

impl Search<'_, '_> {
    fn descend(&mut self, group: usize, scheduled: usize) {
        if self.expired {
            return;
        }
        self.nodes += 1;
        if Instant::now() >= self.deadline {
            self.expired = true;
            return;
        }

        if group == self.model.groups.len() {
            self.record_leaf();
            return;
        }

        // Bound: every remaining job scheduled, perfect balance.
        let optimistic = self.model.presence_weight
            * (scheduled + (self.model.groups.len() - group)) as i64;
        if let Some((best_score, _)) = &self.best {
            if optimistic <= *best_score {
                return;
            }
        }

        let model = self.model;
        for &cand_idx in &model.groups[group] {
            if !self.fits(cand_idx) {
                continue;
            }
            self.place(cand_idx);
            self.picked.push(cand_idx);
            self.descend(group + 1, scheduled + 1);
            self.picked.pop();
            self.unplace(cand_idx);
            if self.expired {
                return;
            }
        }

        // Skip branch last: scheduling is always preferred first.
        self.descend(group + 1, scheduled);
    }

    fn record_leaf(&mut self) {
        let mut presence = vec![false; self.model.candidates.len()];
        for &idx in &self.picked {
            presence[idx] = true;
        }
        let score = self.model.score(&presence);
        // Strict improvement only: the first-found assignment wins ties.
        if self.best.as_ref().map_or(true, |(b, _)| score > *b) {
            self.best = Some((score, presence));
        }
    }

    /// Whether a candidate is compatible with everything placed so far.
    fn fits(&self, cand_idx: usize) -> bool {
        // Tank exclusivity against placed candidates.
        if self
            .picked
            .iter()
            .any(|&placed| self.model.tanks_conflict(cand_idx, placed))
        {
            return false;
        }

        // Workforce capacity on the attended spans.
        let cand = &self.model.candidates[cand_idx];
        let soak = (cand.soak_start, cand.soak_end(), cand.soak_workers);
        let rinse = (cand.rinse_start, cand.rinse_end(), cand.rinse_workers);
        for (start, end, demand) in [soak, rinse] {
            for t in start..end.min(self.usage.len()) {
                if self.usage[t] + demand > self.model.capacity[t] {
                    return false;
                }
            }
        }
        true
    }

    fn place(&mut self, cand_idx: usize) {
        self.apply_demand(cand_idx, true);
    }

    fn unplace(&mut self, cand_idx: usize) {
        self.apply_demand(cand_idx, false);
    }

    fn apply_demand(&mut self, cand_idx: usize, add: bool) {
        let cand = &self.model.candidates[cand_idx];
        let soak = (cand.soak_start, cand.soak_end(), cand.soak_workers);
        let rinse = (cand.rinse_start, cand.rinse_end(), cand.rinse_workers);
        for (start, end, demand) in [soak, rinse] {
            for t in start..end.min(self.usage.len()) {
                if add {
                    self.usage[t] += demand;
                } else {
                    self.usage[t] -= demand;
                }
            }
        }
    }
}
