//! Cost function for one candidate 2v2 split, lower is better.

use crate::models::{CounterState, Team};
use rand::Rng;

/// Penalty per time the two members of a team have already been teammates.
pub const TEAMMATE_WEIGHT: f64 = 5.0;
/// Penalty per time a cross-team pair has already been opponents.
pub const OPPONENT_WEIGHT: f64 = 2.0;
/// Penalty on the play-count spread (max - min) among the four players.
pub const BALANCE_WEIGHT: f64 = 1.5;
/// Upper bound (exclusive) of the random tie-break jitter added to each score.
pub const JITTER_MAGNITUDE: f64 = 0.1;

/// Score one candidate split of four players into `team_a` vs `team_b`.
///
/// Terms, strongest penalty first: teammate repeats, opponent repeats,
/// play-count spread; the base is the four players' play-count sum, and a
/// fresh jitter draw in [0, JITTER_MAGNITUDE) breaks exact ties.
pub fn split_cost<R: Rng>(
    team_a: Team,
    team_b: Team,
    counters: &CounterState,
    rng: &mut R,
) -> f64 {
    let plays = [
        counters.plays(team_a.0),
        counters.plays(team_a.1),
        counters.plays(team_b.0),
        counters.plays(team_b.1),
    ];
    let play_sum: u32 = plays.iter().sum();
    let spread = plays.iter().max().unwrap() - plays.iter().min().unwrap();

    let teammate_repeats =
        counters.teamed(team_a.0, team_a.1) + counters.teamed(team_b.0, team_b.1);

    let mut opponent_repeats = 0;
    for a in team_a.players() {
        for b in team_b.players() {
            opponent_repeats += counters.opposed(a, b);
        }
    }

    f64::from(play_sum)
        + TEAMMATE_WEIGHT * f64::from(teammate_repeats)
        + OPPONENT_WEIGHT * f64::from(opponent_repeats)
        + BALANCE_WEIGHT * f64::from(spread)
        + rng.gen_range(0.0..JITTER_MAGNITUDE)
}
