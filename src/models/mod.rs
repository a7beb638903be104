//! Data structures for the scheduler: players, teams, match cards, counters.

mod counters;
mod game;
mod player;

pub use counters::CounterState;
pub use game::{canonical_pair_key, MatchCard, MatchId, Team, TeamSide};
pub use player::{Player, PlayerId, PlayerStat};
