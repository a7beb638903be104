//! Integration tests for match selection: pool cap behavior, repeat avoidance.

use doubles_scheduler::{pick_best_match, CounterState, MatchCard, Player, PlayerId, Team};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn ids(n: usize) -> Vec<PlayerId> {
    (0..n).map(|i| Player::new(format!("P{i}")).id).collect()
}

#[test]
fn pools_under_four_yield_no_match() {
    let pool = ids(3);
    let counters = CounterState::new();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(pick_best_match(&pool, &counters, &mut rng).is_none());
    assert!(pick_best_match(&[], &counters, &mut rng).is_none());
}

#[test]
fn exactly_four_players_always_produce_a_match() {
    let pool = ids(4);
    let counters = CounterState::new();
    let mut rng = StdRng::seed_from_u64(2);
    let (team_a, team_b) = pick_best_match(&pool, &counters, &mut rng).unwrap();

    let picked: HashSet<_> = team_a.players().into_iter().chain(team_b.players()).collect();
    assert_eq!(picked, pool.iter().copied().collect());
}

#[test]
fn repeat_teammates_are_avoided_when_an_alternative_exists() {
    // After one AB vs CD match, re-picking from the same four must not
    // reproduce the AB/CD split: its teammate penalty (2 * 5.0) plus four
    // opponent repeats dwarfs the other splits' two opponent repeats.
    let pool = ids(4);
    let first = MatchCard::new(1, Team(pool[0], pool[1]), Team(pool[2], pool[3]));
    let mut counters = CounterState::new();
    counters.commit(&first);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (team_a, team_b) = pick_best_match(&pool, &counters, &mut rng).unwrap();
        for team in [team_a, team_b] {
            let pair: HashSet<_> = team.players().into_iter().collect();
            assert_ne!(pair, [pool[0], pool[1]].into_iter().collect());
            assert_ne!(pair, [pool[2], pool[3]].into_iter().collect());
        }
    }
}

#[test]
fn least_played_player_is_always_included() {
    // Four players with one match behind them plus one fresh player: any
    // split containing the fresh player costs at least a full play less,
    // far more than the jitter can offset.
    let pool = ids(5);
    let first = MatchCard::new(1, Team(pool[0], pool[1]), Team(pool[2], pool[3]));
    let mut counters = CounterState::new();
    counters.commit(&first);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (team_a, team_b) = pick_best_match(&pool, &counters, &mut rng).unwrap();
        let picked: HashSet<_> = team_a.players().into_iter().chain(team_b.players()).collect();
        assert!(picked.contains(&pool[4]), "fresh player left out");
    }
}
