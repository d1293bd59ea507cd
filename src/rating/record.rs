//! Per-mode rank records and their update after a game.
//!
//! A ranked game always runs the Elo update, placement or not. The only
//! placement-specific state is a counter that stops at the configured
//! number of placement matches.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, RatingConfig};

use super::elo::{apply_delta, rating_delta_with_k, synthetic_opponent_mmr};
use super::tier::{tier_from_mmr, TierDivision, TierName};

/// Stored rank for one player in one mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRecord {
    pub mmr: u32,
    pub tier: TierName,
    pub division: u8,
    pub placement_matches: u32,
    pub games_played: u32,
    pub wins: u32,
}

impl Default for RankRecord {
    fn default() -> Self {
        Self {
            mmr: 0,
            tier: TierName::Bronze,
            division: 1,
            placement_matches: 0,
            games_played: 0,
            wins: 0,
        }
    }
}

impl RankRecord {
    #[must_use]
    pub fn tier_division(&self) -> TierDivision {
        TierDivision::new(self.tier, self.division)
    }

    #[must_use]
    pub fn in_placement(&self, config: &RatingConfig) -> bool {
        self.placement_matches < config.placement_matches
    }

    /// Apply one ranked result against `opponent_mmr`.
    ///
    /// Deterministic given its inputs; the caller supplies the opponent so
    /// the same game is never rated twice with different jitter.
    pub fn apply_ranked_result(
        &mut self,
        won: bool,
        opponent_mmr: i32,
        config: &RatingConfig,
    ) -> RatingUpdate {
        let previous = self.tier_division();
        let current = i32::try_from(self.mmr).unwrap_or(i32::MAX);
        let delta = rating_delta_with_k(current, opponent_mmr, won, config.k_factor);
        let next = apply_delta(self.mmr, delta);
        let new = tier_from_mmr(next);

        let update = RatingUpdate {
            previous,
            new,
            previous_mmr: self.mmr,
            new_mmr: next,
            opponent_mmr,
            // Signed change as computed, before the floor.
            delta,
        };

        self.mmr = next;
        self.tier = new.tier;
        self.division = new.division;
        self.placement_matches = (self.placement_matches + 1).min(config.placement_matches);
        self.games_played += 1;
        if won {
            self.wins += 1;
        }
        update
    }

    #[must_use]
    pub fn placement_progress(&self, config: &RatingConfig) -> PlacementProgress {
        PlacementProgress::new(self.placement_matches, config.placement_matches)
    }
}

/// Outcome of one rating computation. Computed once per match and cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub previous: TierDivision,
    pub new: TierDivision,
    pub previous_mmr: u32,
    pub new_mmr: u32,
    pub opponent_mmr: i32,
    pub delta: i32,
}

/// Rate a ranked game against a synthetic near-peer drawn from `rng`.
pub fn rate_ranked_match(
    record: &mut RankRecord,
    won: bool,
    config: &RatingConfig,
    rng: &mut GameRng,
) -> RatingUpdate {
    let opponent = synthetic_opponent_mmr(record.mmr, config.opponent_jitter, rng);
    record.apply_ranked_result(won, opponent, config)
}

/// Placement counter view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementProgress {
    pub completed: u32,
    pub remaining: u32,
    /// 0–100.
    pub percent: u32,
}

impl PlacementProgress {
    fn new(completed: u32, total: u32) -> Self {
        let completed = completed.min(total);
        let percent = if total == 0 { 100 } else { completed * 100 / total };
        Self {
            completed,
            remaining: total - completed,
            percent,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}
