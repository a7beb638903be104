//! Scheduling logic: split scoring, match selection, schedule building, stats.

mod schedule;
mod scoring;
mod selector;
mod stats;

pub use schedule::{generate_schedule, generate_schedule_with_rng};
pub use scoring::{split_cost, BALANCE_WEIGHT, JITTER_MAGNITUDE, OPPONENT_WEIGHT, TEAMMATE_WEIGHT};
pub use selector::{pick_best_match, CANDIDATE_POOL_CAP};
pub use stats::compute_stats;
