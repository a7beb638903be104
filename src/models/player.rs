//! Player and PlayerStat data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A player on the roster. Identity is the id; the rest is display data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Display color (e.g. for shirts/UI), if the caller tracks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Player {
    /// Create a new player with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: None,
            gender: None,
        }
    }
}

/// Per-player totals derived from a schedule plus recorded winners (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub id: PlayerId,
    pub name: String,
    pub play_count: u32,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerStat {
    /// Zeroed stats for a roster player.
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            play_count: 0,
            wins: 0,
            losses: 0,
        }
    }
}
