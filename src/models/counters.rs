//! Run-scoped pairing tallies: play counts, teammate repeats, opponent repeats.

use crate::models::game::{canonical_pair_key, MatchCard};
use crate::models::player::PlayerId;
use std::collections::HashMap;

/// Mutable tallies for one scheduling run. Created empty when a run starts,
/// updated only by [`CounterState::commit`], and dropped when the run returns;
/// the maps always equal the tallies of the committed match prefix.
#[derive(Clone, Debug, Default)]
pub struct CounterState {
    play_count: HashMap<PlayerId, u32>,
    teammate_count: HashMap<String, u32>,
    opponent_count: HashMap<String, u32>,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times this player has been scheduled so far this run.
    pub fn plays(&self, id: PlayerId) -> u32 {
        self.play_count.get(&id).copied().unwrap_or(0)
    }

    /// Times these two have been on the same team this run.
    pub fn teamed(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.teammate_count
            .get(&canonical_pair_key(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Times these two have faced each other this run.
    pub fn opposed(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.opponent_count
            .get(&canonical_pair_key(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Record a committed match: bump play counts for all four participants,
    /// the teammate key of each team, and every cross-team opponent key.
    pub fn commit(&mut self, card: &MatchCard) {
        for id in card.players() {
            *self.play_count.entry(id).or_insert(0) += 1;
        }
        *self.teammate_count.entry(card.team_a.key()).or_insert(0) += 1;
        *self.teammate_count.entry(card.team_b.key()).or_insert(0) += 1;
        for a in card.team_a.players() {
            for b in card.team_b.players() {
                *self
                    .opponent_count
                    .entry(canonical_pair_key(a, b))
                    .or_insert(0) += 1;
            }
        }
    }
}
