//! Single-game simulation.
//!
//! Performance comes from rating plus a bell-shaped noise term and a capped
//! equipment bonus. Whether the game is won is decided against a threshold
//! that rises every season; the final score is drawn afterwards and does not
//! depend on how large the margin was.

use super::types::{MatchResult, StatLine};
use crate::catalog::teams::random_opponent;
use crate::catalog::upgrades::UpgradeEffect;
use crate::character::attributes::Position;
use crate::core::constants::{
    MATCH_EQUIP_BONUS_CAP, MONEY_PER_PERFORMANCE_POINT, NOISE_SCALE, RATING_MIN,
    WIN_JITTER_RANGE, WIN_THRESHOLD_BASE, WIN_THRESHOLD_PER_SEASON,
};
use crate::core::game_state::GameState;
use crate::upgrades::logic::owned_upgrades;
use rand::Rng;

/// Uncapped sum of `level * magnitude` over match-bonus upgrades.
pub fn match_equip_bonus(state: &GameState) -> f64 {
    owned_upgrades(state)
        .filter_map(|(def, level)| match def.effect {
            UpgradeEffect::MatchBonus(magnitude) => Some(magnitude * level as f64),
            _ => None,
        })
        .sum()
}

/// Performance score before the win decision, clamped to [0, 100].
pub fn roll_performance<R: Rng>(rating: u32, equip_bonus: f64, rng: &mut R) -> f64 {
    let base = (rating as f64 - RATING_MIN) / 59.0 * 100.0;
    let noise = (rng.gen::<f64>() + rng.gen::<f64>() + rng.gen::<f64>() - 1.5) * NOISE_SCALE;
    let equip = equip_bonus.min(MATCH_EQUIP_BONUS_CAP);
    (base + noise + equip).clamp(0.0, 100.0)
}

pub fn win_threshold(season_number: u32) -> f64 {
    WIN_THRESHOLD_BASE + season_number as f64 * WIN_THRESHOLD_PER_SEASON
}

/// Team and opponent scores. A win always has the higher team score.
pub fn roll_scores<R: Rng>(win: bool, rng: &mut R) -> (u32, u32) {
    if win {
        let team = rng.gen_range(21..=38);
        let opponent = rng.gen_range(7..=team - 1);
        (team, opponent)
    } else {
        let team = rng.gen_range(7..=24);
        let opponent = rng.gen_range(team + 1..=team + 21);
        (team, opponent)
    }
}

fn scaled<R: Rng>(rng: &mut R, p: f64, lo: f64, hi: f64) -> u32 {
    (p * rng.gen_range(lo..hi)).floor() as u32
}

/// Position-appropriate box score for a performance fraction `p` in [0, 1].
pub fn generate_stats<R: Rng>(position: Position, p: f64, rng: &mut R) -> StatLine {
    let mut stats = StatLine::default();
    match position {
        Position::QB => {
            stats.passing_yards = scaled(rng, p, 250.0, 400.0);
            stats.passing_tds = scaled(rng, p, 1.0, 5.0);
            stats.interceptions = scaled(rng, 1.0 - p, 0.0, 3.0);
            stats.completion_pct = (p * rng.gen_range(0.85..1.05)).min(1.0);
            stats.rushing_yards = scaled(rng, p, 0.0, 40.0);
        }
        Position::RB => {
            stats.rushing_yards = scaled(rng, p, 60.0, 180.0);
            stats.rushing_tds = scaled(rng, p, 0.0, 3.0);
            stats.receptions = scaled(rng, p, 0.0, 6.0);
            stats.receiving_yards = scaled(rng, p, 0.0, 50.0);
        }
        Position::WR => {
            stats.receptions = scaled(rng, p, 3.0, 12.0);
            stats.receiving_yards = scaled(rng, p, 40.0, 180.0);
            stats.receiving_tds = scaled(rng, p, 0.0, 3.0);
        }
        Position::TE => {
            stats.receptions = scaled(rng, p, 2.0, 9.0);
            stats.receiving_yards = scaled(rng, p, 20.0, 120.0);
            stats.receiving_tds = scaled(rng, p, 0.0, 2.0);
        }
        Position::LB => {
            stats.tackles = scaled(rng, p, 4.0, 15.0);
            stats.sacks = scaled(rng, p, 0.0, 2.0);
            stats.defensive_interceptions = u32::from(rng.gen::<f64>() < p * 0.1);
        }
        Position::CB | Position::S => {
            stats.tackles = scaled(rng, p, 2.0, 10.0);
            stats.defensive_interceptions = u32::from(rng.gen::<f64>() < p * 0.2);
            stats.sacks = u32::from(rng.gen::<f64>() < p * 0.05);
        }
    }
    stats
}

/// Simulates the current week's game. Reads the state but never mutates it;
/// the season engine applies the result.
pub fn simulate_match<R: Rng>(state: &GameState, rng: &mut R) -> MatchResult {
    let season = &state.season;

    let performance = roll_performance(state.player.rating(), match_equip_bonus(state), rng);

    let jitter = (rng.gen::<f64>() - 0.5) * WIN_JITTER_RANGE;
    let win = performance > win_threshold(season.season_number) + jitter;

    let (team_score, opponent_score) = roll_scores(win, rng);

    let p = performance / 100.0;
    let stats = generate_stats(state.player.position, p, rng);

    let xp_earned = (performance * 2.0 + if win { 50.0 } else { 10.0 }).floor() as u64;
    let money_earned = ((performance * MONEY_PER_PERFORMANCE_POINT
        + state.contract.salary_per_game as f64)
        * state.legacy.money_multiplier)
        .floor();
    let fame_earned = (performance * 0.5 + if win { 5.0 } else { 0.0 }).floor() as u64;

    let opponent = match &season.current_opponent {
        Some(name) => name.clone(),
        None => random_opponent(rng),
    };

    MatchResult {
        week: season.current_week,
        season: season.season_number,
        opponent,
        stats,
        team_score,
        opponent_score,
        win,
        xp_earned,
        money_earned,
        fame_earned,
        performance_score: performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrades::types::PurchasedUpgrade;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rookie(position: Position) -> GameState {
        GameState::new("Starter".to_string(), position, 0)
    }

    #[test]
    fn test_performance_in_bounds_and_scores_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for position in Position::ALL {
            let state = rookie(position);
            for _ in 0..500 {
                let result = simulate_match(&state, &mut rng);
                assert!((0.0..=100.0).contains(&result.performance_score));
                if result.win {
                    assert!(result.team_score > result.opponent_score);
                } else {
                    assert!(result.opponent_score > result.team_score);
                }
            }
        }
    }

    #[test]
    fn test_score_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let (team, opp) = roll_scores(true, &mut rng);
            assert!((21..=38).contains(&team));
            assert!((7..team).contains(&opp));

            let (team, opp) = roll_scores(false, &mut rng);
            assert!((7..=24).contains(&team));
            assert!(opp > team && opp <= team + 21);
        }
    }

    #[test]
    fn test_performance_clamped_for_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let low = roll_performance(40, 0.0, &mut rng);
            assert!((0.0..=30.0).contains(&low));
            let high = roll_performance(99, 15.0, &mut rng);
            assert!((85.0..=100.0).contains(&high));
        }
    }

    #[test]
    fn test_equip_bonus_capped() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let capped = roll_performance(70, 15.0, &mut rng_a);
            let huge = roll_performance(70, 90.0, &mut rng_b);
            assert_eq!(capped, huge);
        }
    }

    #[test]
    fn test_match_equip_bonus_sums_levels() {
        let mut state = rookie(Position::QB);
        state.purchased_upgrades.push(PurchasedUpgrade {
            upgrade_id: "cleats_basic".to_string(),
            level: 2,
            purchased_at: 0,
        });
        state.purchased_upgrades.push(PurchasedUpgrade {
            upgrade_id: "elite_equipment".to_string(),
            level: 1,
            purchased_at: 0,
        });
        assert!((match_equip_bonus(&state) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_rewards_follow_formulas() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let state = rookie(Position::WR);
        for _ in 0..100 {
            let r = simulate_match(&state, &mut rng);
            let bonus = if r.win { 50.0 } else { 10.0 };
            assert_eq!(r.xp_earned, (r.performance_score * 2.0 + bonus).floor() as u64);
            assert_eq!(
                r.money_earned,
                (r.performance_score * 500.0 + 50_000.0).floor()
            );
            let fame_bonus = if r.win { 5.0 } else { 0.0 };
            assert_eq!(
                r.fame_earned,
                (r.performance_score * 0.5 + fame_bonus).floor() as u64
            );
        }
    }

    #[test]
    fn test_pre_selected_opponent_is_used() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = rookie(Position::CB);
        state.season.current_opponent = Some("Packers".to_string());
        let r = simulate_match(&state, &mut rng);
        assert_eq!(r.opponent, "Packers");
        assert_eq!(r.week, 1);
        assert_eq!(r.season, 1);
    }

    #[test]
    fn test_stats_match_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let qb = generate_stats(Position::QB, 1.0, &mut rng);
        assert!(qb.passing_yards >= 250 && qb.passing_yards < 400);
        assert_eq!(qb.tackles, 0);
        assert!(qb.completion_pct <= 1.0);
        assert_eq!(qb.interceptions, 0);

        let lb = generate_stats(Position::LB, 1.0, &mut rng);
        assert!(lb.tackles >= 4 && lb.tackles < 15);
        assert_eq!(lb.passing_yards, 0);

        let wr = generate_stats(Position::WR, 0.0, &mut rng);
        assert_eq!(wr, StatLine::default());
    }

    #[test]
    fn test_full_performance_stats_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..500 {
            let qb = generate_stats(Position::QB, 1.0, &mut rng);
            assert!((250..400).contains(&qb.passing_yards));
            assert!((1..5).contains(&qb.passing_tds));
            assert!(qb.rushing_yards < 40);
            assert!(qb.completion_pct >= 0.85 && qb.completion_pct <= 1.0);

            let rb = generate_stats(Position::RB, 1.0, &mut rng);
            assert!((60..180).contains(&rb.rushing_yards));
            assert!(rb.rushing_tds < 3);

            let te = generate_stats(Position::TE, 1.0, &mut rng);
            assert!((2..9).contains(&te.receptions));
            assert!((20..120).contains(&te.receiving_yards));

            let cb = generate_stats(Position::CB, 1.0, &mut rng);
            assert!((2..10).contains(&cb.tackles));
            assert!(cb.defensive_interceptions <= 1 && cb.sacks <= 1);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let state = rookie(Position::RB);
        let a = simulate_match(&state, &mut ChaCha8Rng::seed_from_u64(77));
        let b = simulate_match(&state, &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
