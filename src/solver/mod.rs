//! Constraint model and optimizer.
//!
//! Turns the candidate set into a no-overlap + capacity constraint
//! model and explores it with a deterministic branch-and-bound search
//! under a wall-clock budget. The formulation is solver-technology
//! agnostic: the model exposes plain conflict and scoring predicates,
//! and the search is an ordinary incumbent-tracking tree search.

mod model;
mod search;

pub use model::ConstraintModel;
pub use search::{solve, SolveReport};
