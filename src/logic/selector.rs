//! Match selection: enumerate 4-player subsets and team splits, keep the cheapest.

use crate::logic::scoring::split_cost;
use crate::models::{CounterState, PlayerId, Team};
use rand::Rng;

/// At most this many least-played players are considered per court slot,
/// which caps the search at C(10,4) = 210 subsets (630 scored splits).
/// Test fixtures assume this exact value.
pub const CANDIDATE_POOL_CAP: usize = 10;

/// All 4-element combinations of `pool` (order-independent, no repeats).
pub(crate) fn four_player_combinations(pool: &[PlayerId]) -> Vec<[PlayerId; 4]> {
    let n = pool.len();
    let mut combos = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                for l in (k + 1)..n {
                    combos.push([pool[i], pool[j], pool[k], pool[l]]);
                }
            }
        }
    }
    combos
}

/// The 3 distinct ways to split four players into two teams of two.
fn team_splits([a, b, c, d]: [PlayerId; 4]) -> [(Team, Team); 3] {
    [
        (Team(a, b), Team(c, d)),
        (Team(a, c), Team(b, d)),
        (Team(a, d), Team(b, c)),
    ]
}

/// Pick the cheapest 2v2 split from `pool`, or `None` for pools under 4.
///
/// The pool is ranked ascending by play count (random tie-break) and capped
/// at [`CANDIDATE_POOL_CAP`] before enumeration, so cost stays bounded no
/// matter the roster size. Equal-cost splits beyond the jitter term may
/// legitimately differ between calls.
pub fn pick_best_match<R: Rng>(
    pool: &[PlayerId],
    counters: &CounterState,
    rng: &mut R,
) -> Option<(Team, Team)> {
    if pool.len() < 4 {
        return None;
    }

    let mut ranked: Vec<(PlayerId, u32, u32)> = pool
        .iter()
        .map(|&id| (id, counters.plays(id), rng.gen::<u32>()))
        .collect();
    ranked.sort_by_key(|&(_, plays, tiebreak)| (plays, tiebreak));
    let candidates: Vec<PlayerId> = ranked
        .into_iter()
        .take(CANDIDATE_POOL_CAP)
        .map(|(id, _, _)| id)
        .collect();

    let mut best: Option<(f64, Team, Team)> = None;
    for quad in four_player_combinations(&candidates) {
        for (team_a, team_b) in team_splits(quad) {
            let cost = split_cost(team_a, team_b, counters, rng);
            if best.as_ref().map_or(true, |&(lowest, _, _)| cost < lowest) {
                best = Some((cost, team_a, team_b));
            }
        }
    }
    best.map(|(_, team_a, team_b)| (team_a, team_b))
}
