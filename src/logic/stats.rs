//! Stats aggregation: per-player play/win/loss totals from a finished schedule.

use crate::models::{MatchCard, MatchId, Player, PlayerId, PlayerStat, TeamSide};
use std::collections::HashMap;

/// Derive per-player totals from `schedule` plus recorded winners.
///
/// Every roster player gets an entry, zeroed if they never played. Matches
/// without a recorded winner contribute only to play counts; result entries
/// whose match id is not in the schedule have no effect. Output is sorted by
/// name ascending. Pure and idempotent.
pub fn compute_stats(
    players: &[Player],
    schedule: &[MatchCard],
    results: &HashMap<MatchId, TeamSide>,
) -> Vec<PlayerStat> {
    let mut by_id: HashMap<PlayerId, PlayerStat> = players
        .iter()
        .map(|p| (p.id, PlayerStat::from_player(p)))
        .collect();

    for card in schedule {
        for id in card.players() {
            if let Some(stat) = by_id.get_mut(&id) {
                stat.play_count += 1;
            }
        }
        if let Some(&winner) = results.get(&card.id) {
            let (winning, losing) = match winner {
                TeamSide::A => (card.team_a, card.team_b),
                TeamSide::B => (card.team_b, card.team_a),
            };
            for id in winning.players() {
                if let Some(stat) = by_id.get_mut(&id) {
                    stat.wins += 1;
                }
            }
            for id in losing.players() {
                if let Some(stat) = by_id.get_mut(&id) {
                    stat.losses += 1;
                }
            }
        }
    }

    let mut stats: Vec<PlayerStat> = by_id.into_values().collect();
    stats.sort_by(|a, b| a.name.cmp(&b.name));
    stats
}
