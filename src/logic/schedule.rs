//! Schedule building: rounds x courts, no double-booking within a round.

use crate::logic::selector::pick_best_match;
use crate::models::{CounterState, MatchCard, Player, PlayerId};
use rand::Rng;
use std::collections::HashSet;

/// Generate a doubles schedule with ambient randomness (`thread_rng`).
///
/// Convenience wrapper around [`generate_schedule_with_rng`]; repeated calls
/// with the same inputs will differ because of the tie-break jitter.
pub fn generate_schedule(players: &[Player], rounds: usize, courts: usize) -> Vec<MatchCard> {
    generate_schedule_with_rng(players, rounds, courts, &mut rand::thread_rng())
}

/// Generate a doubles schedule: `rounds` waves of up to `courts` concurrent
/// matches, committed in order with a running 1-based index.
///
/// Rosters under 4 players yield an empty schedule. The requested court count
/// is clipped to `floor(playerCount / 4)` (minimum 1); within a round no
/// player is booked twice, and a court slot with fewer than 4 players left
/// simply goes unfilled. All pairing tallies live in a [`CounterState`]
/// scoped to this call, so every run starts from zero.
///
/// A seeded `rng` makes the output deterministic for identical inputs.
pub fn generate_schedule_with_rng<R: Rng>(
    players: &[Player],
    rounds: usize,
    courts: usize,
    rng: &mut R,
) -> Vec<MatchCard> {
    let mut schedule = Vec::new();
    if players.len() < 4 {
        return schedule;
    }

    let usable_courts = courts.min(players.len() / 4).max(1);
    let mut counters = CounterState::new();

    for round in 0..rounds {
        let mut used: HashSet<PlayerId> = HashSet::new();
        let round_start = schedule.len();

        for _court in 0..usable_courts {
            let available: Vec<PlayerId> = players
                .iter()
                .map(|p| p.id)
                .filter(|id| !used.contains(id))
                .collect();
            if available.len() < 4 {
                break;
            }
            let Some((team_a, team_b)) = pick_best_match(&available, &counters, rng) else {
                break;
            };
            let card = MatchCard::new(schedule.len() + 1, team_a, team_b);
            used.extend(card.players());
            counters.commit(&card);
            schedule.push(card);
        }

        let produced = schedule.len() - round_start;
        log::debug!(
            "round {}: scheduled {} match(es) on {} court(s)",
            round + 1,
            produced,
            usable_courts
        );
        if produced == 0 {
            break;
        }
    }

    schedule
}
