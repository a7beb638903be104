//! Round-robin doubles scheduler: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    compute_stats, generate_schedule, generate_schedule_with_rng, pick_best_match, split_cost,
};
pub use models::{
    canonical_pair_key, CounterState, MatchCard, MatchId, Player, PlayerId, PlayerStat, Team,
    TeamSide,
};
