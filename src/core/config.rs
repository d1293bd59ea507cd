//! Match and rating configuration.
//!
//! - `MatchConfig`: round count, hand composition, round scoring, AI seats
//! - `RatingConfig`: Elo K-factor, placement length, synthetic opponent jitter
//!
//! Defaults carry the HighCard constants; builders exist for tests and
//! variants.

use serde::{Deserialize, Serialize};

/// Number of regular cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Per-match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds in a match.
    pub max_rounds: u32,

    /// Regular cards dealt from the shared deck to each player.
    pub regular_cards_per_hand: usize,

    /// Freshly generated power-up cards added to each hand.
    pub power_ups_per_hand: usize,

    /// Score delta for being on the winning side of a round.
    pub win_points: i32,

    /// Score delta for being on the losing side of a round.
    pub loss_points: i32,

    /// Score delta for everyone on a tied round.
    pub tie_points: i32,

    /// Artificial "thinking" delay before synthetic players submit.
    pub ai_think_delay_ms: u64,

    /// AI reference MMR above which names come from the high-ranked pool.
    pub ai_high_ranked_mmr: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            regular_cards_per_hand: 8,
            power_ups_per_hand: 2,
            win_points: 2,
            loss_points: -1,
            tie_points: 0,
            ai_think_delay_ms: 1500,
            ai_high_ranked_mmr: 600,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "A match needs at least 1 round");
        self.max_rounds = rounds;
        self
    }

    /// Set the number of regular cards per hand.
    #[must_use]
    pub fn with_regular_cards_per_hand(mut self, count: usize) -> Self {
        self.regular_cards_per_hand = count;
        self
    }

    /// Set the number of power-up cards per hand.
    #[must_use]
    pub fn with_power_ups_per_hand(mut self, count: usize) -> Self {
        self.power_ups_per_hand = count;
        self
    }

    /// Set the AI thinking delay.
    #[must_use]
    pub fn with_ai_think_delay_ms(mut self, delay: u64) -> Self {
        self.ai_think_delay_ms = delay;
        self
    }

    /// Regular cards needed to deal `players` hands from one deck.
    #[must_use]
    pub fn regular_cards_needed(&self, players: usize) -> usize {
        self.regular_cards_per_hand * players
    }
}

/// Rating model configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Elo K-factor.
    pub k_factor: f64,

    /// Ranked games counted as placement matches.
    pub placement_matches: u32,

    /// Max absolute offset of the synthetic opponent's MMR.
    pub opponent_jitter: i32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            placement_matches: 5,
            opponent_jitter: 100,
        }
    }
}

impl RatingConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the K-factor.
    #[must_use]
    pub fn with_k_factor(mut self, k: f64) -> Self {
        self.k_factor = k;
        self
    }

    /// Set the opponent jitter.
    #[must_use]
    pub fn with_opponent_jitter(mut self, jitter: i32) -> Self {
        assert!(jitter >= 0, "Jitter must be non-negative");
        self.opponent_jitter = jitter;
        self
    }
}
