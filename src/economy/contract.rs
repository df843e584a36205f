//! Player contracts and off-season renewal.

use crate::core::constants::{
    STARTING_CONTRACT_YEARS, STARTING_SALARY_PER_GAME, STARTING_SIGNING_BONUS,
};
use crate::core::game_state::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};

const BASE_SALARY: f64 = 50_000.0;
const SALARY_PER_SEASON: f64 = 25_000.0;
const SALARY_PER_RATING_POINT: f64 = 5_000.0;
const TOKEN_SALARY_BONUS: f64 = 20_000.0;
const SALARY_VARIANCE: f64 = 0.2;
const BONUS_VARIANCE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub years_remaining: u32,
    pub salary_per_game: u64,
    pub signing_bonus: u64,
}

impl Default for Contract {
    fn default() -> Self {
        Self {
            years_remaining: STARTING_CONTRACT_YEARS,
            salary_per_game: STARTING_SALARY_PER_GAME,
            signing_bonus: STARTING_SIGNING_BONUS,
        }
    }
}

/// Offers a new contract. Salary grows with season and rating, and every
/// contract token spent adds a flat bonus on top.
pub fn generate_contract<R: Rng>(
    season_number: u32,
    rating: u32,
    contract_tokens: u32,
    rng: &mut R,
) -> Contract {
    let base = BASE_SALARY
        + season_number as f64 * SALARY_PER_SEASON
        + (rating as f64 - 40.0) * SALARY_PER_RATING_POINT;
    let token_bonus = contract_tokens as f64 * TOKEN_SALARY_BONUS;

    let salary = ((base + token_bonus) * (1.0 + rng.gen::<f64>() * SALARY_VARIANCE)).floor();
    let signing_bonus = (base * 2.0 * (1.0 + rng.gen::<f64>() * BONUS_VARIANCE)).floor();

    Contract {
        years_remaining: 3 + (rating / 80).min(2),
        salary_per_game: salary.max(0.0) as u64,
        signing_bonus: signing_bonus.max(0.0) as u64,
    }
}

/// Counts down one contract year. When the deal runs out a new one is
/// signed, all contract tokens are consumed, and the signing bonus is paid.
/// Returns true if a new contract was signed.
pub fn process_season_end<R: Rng>(state: &mut GameState, rng: &mut R) -> bool {
    state.contract.years_remaining = state.contract.years_remaining.saturating_sub(1);
    if state.contract.years_remaining > 0 {
        return false;
    }

    let contract = generate_contract(
        state.season.season_number,
        state.player.rating(),
        state.resources.contract_tokens,
        rng,
    );
    state.resources.contract_tokens = 0;
    state.resources.money += contract.signing_bonus as f64;
    tracing::info!(
        salary = contract.salary_per_game,
        years = contract.years_remaining,
        "signed new contract"
    );
    state.contract = contract;
    true
}
