//! Elo rating updates.
//!
//! ```text
//! expected = 1 / (1 + 10^((opponent - player) / 400))
//! delta    = round(K × (score - expected))      score ∈ {0, 1}
//! ```
//!
//! Rounding is half-up (`floor(x + 0.5)`), so a loss at even odds gives
//! -16 and a win +16, but -15.5 rounds to -15.

use crate::core::GameRng;

/// Default K-factor.
pub const K_FACTOR: f64 = 32.0;

/// Probability that `player` beats `opponent`.
#[must_use]
pub fn expected_score(player_mmr: i32, opponent_mmr: i32) -> f64 {
    let diff = f64::from(opponent_mmr - player_mmr);
    1.0 / (1.0 + 10f64.powf(diff / 400.0))
}

/// MMR change for one game with K = 32.
#[must_use]
pub fn rating_delta(player_mmr: i32, opponent_mmr: i32, won: bool) -> i32 {
    rating_delta_with_k(player_mmr, opponent_mmr, won, K_FACTOR)
}

/// MMR change for one game with an explicit K-factor.
#[must_use]
pub fn rating_delta_with_k(player_mmr: i32, opponent_mmr: i32, won: bool, k: f64) -> i32 {
    let score = if won { 1.0 } else { 0.0 };
    let raw = k * (score - expected_score(player_mmr, opponent_mmr));
    round_half_up(raw) as i32
}

/// Apply a delta, flooring the result at 0.
#[must_use]
pub fn apply_delta(mmr: u32, delta: i32) -> u32 {
    let next = i64::from(mmr) + i64::from(delta);
    next.max(0) as u32
}

/// A fabricated near-peer: `mmr + uniform(-jitter..=jitter)`.
///
/// Not floored; an opponent of a 0-MMR player may sit below zero.
#[must_use]
pub fn synthetic_opponent_mmr(mmr: u32, jitter: i32, rng: &mut GameRng) -> i32 {
    let base = i32::try_from(mmr).unwrap_or(i32::MAX);
    base.saturating_add(rng.gen_range_inclusive(-jitter..=jitter))
}

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_match() {
        assert!((expected_score(1000, 1000) - 0.5).abs() < 1e-12);
        assert_eq!(rating_delta(1000, 1000, true), 16);
        assert_eq!(rating_delta(1000, 1000, false), -16);
    }

    #[test]
    fn test_favorite_gains_less() {
        let favorite_win = rating_delta(1400, 1000, true);
        let underdog_win = rating_delta(1000, 1400, true);
        assert!(favorite_win < underdog_win);
        assert_eq!(favorite_win, 3);
        assert_eq!(underdog_win, 29);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_half_up(-15.5), -15.0);
        assert_eq!(round_half_up(15.5), 16.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }

    #[test]
    fn test_bounded_by_k() {
        for diff in [-2000, -400, 0, 400, 2000] {
            for won in [true, false] {
                assert!(rating_delta(1000, 1000 + diff, won).abs() <= 32);
            }
        }
    }

    #[test]
    fn test_custom_k() {
        assert_eq!(rating_delta_with_k(500, 500, true, 64.0), 32);
    }

    #[test]
    fn test_apply_delta_floor() {
        assert_eq!(apply_delta(10, -16), 0);
        assert_eq!(apply_delta(0, -3), 0);
        assert_eq!(apply_delta(100, 16), 116);
    }

    #[test]
    fn test_synthetic_opponent_range() {
        let mut rng = GameRng::new(3);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..5000 {
            let opp = synthetic_opponent_mmr(1000, 100, &mut rng);
            assert!((900..=1100).contains(&opp));
            seen_low |= opp == 900;
            seen_high |= opp == 1100;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_synthetic_opponent_may_be_negative() {
        let mut rng = GameRng::new(5);
        let min = (0..2000)
            .map(|_| synthetic_opponent_mmr(0, 100, &mut rng))
            .min()
            .unwrap();
        assert!(min < 0);
    }
}
