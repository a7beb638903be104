//! Match card, Team, TeamSide, and the canonical pair key for 2v2 matches.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of a match card won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TeamSide {
    A,
    B,
}

/// A doubles team: exactly two distinct players.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team(pub PlayerId, pub PlayerId);

impl Team {
    /// Both members as an array (for iteration).
    pub fn players(&self) -> [PlayerId; 2] {
        [self.0, self.1]
    }

    /// Order-independent key for this team's pair (teammate counting).
    pub fn key(&self) -> String {
        canonical_pair_key(self.0, self.1)
    }
}

/// A single scheduled match: two teams of two.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchCard {
    pub id: MatchId,
    /// 1-based position across the whole schedule (not reset per round).
    pub index: usize,
    pub team_a: Team,
    pub team_b: Team,
}

impl MatchCard {
    pub fn new(index: usize, team_a: Team, team_b: Team) -> Self {
        Self {
            id: Uuid::new_v4(),
            index,
            team_a,
            team_b,
        }
    }

    /// All four participants, team A first.
    pub fn players(&self) -> [PlayerId; 4] {
        [self.team_a.0, self.team_a.1, self.team_b.0, self.team_b.1]
    }
}

/// Order-independent identifier for an unordered pair of player ids:
/// the two ids sorted and joined, so (a, b) and (b, a) collide.
pub fn canonical_pair_key(a: PlayerId, b: PlayerId) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}:{hi}")
}
