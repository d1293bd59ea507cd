//! End-of-match payload for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Team};
use crate::rating::RatingUpdate;
use crate::rules::RoundWinner;

use super::engine::MatchEngine;
use super::error::MatchError;
use super::state::{GameMode, RoundResult};

/// One row of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub id: PlayerId,
    pub name: String,
    pub is_ai: bool,
    pub team: Option<Team>,
    pub score: i32,
    pub rounds_won: u32,
}

/// Figures about the human's game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Power-ups still in the human's hand.
    pub unused_power_ups: usize,
    /// Largest single-round score change for the human.
    pub best_round_delta: i32,
}

/// Tier labels and MMR change of a ranked match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankChange {
    pub previous: String,
    pub new: String,
    pub mmr_change: i32,
}

impl From<&RatingUpdate> for RankChange {
    fn from(update: &RatingUpdate) -> Self {
        Self {
            previous: update.previous.label(),
            new: update.new.label(),
            mmr_change: update.delta,
        }
    }
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub mode: GameMode,
    pub ranked: bool,
    pub players: Vec<PlayerLine>,
    pub winner: RoundWinner,
    pub human_won: bool,
    pub rounds: Vec<RoundResult>,
    pub stats: MatchStats,
    /// Only present for ranked matches once rated.
    pub rank_change: Option<RankChange>,
}

impl MatchSummary {
    /// Summarize a finished match.
    pub fn from_engine(engine: &MatchEngine) -> Result<Self, MatchError> {
        if !engine.is_complete() {
            return Err(MatchError::MatchInProgress);
        }
        let state = engine.state();

        let players = state
            .players
            .iter()
            .map(|p| PlayerLine {
                id: p.id.clone(),
                name: p.name.clone(),
                is_ai: p.is_ai,
                team: p.team,
                score: p.score,
                rounds_won: p.rounds_won,
            })
            .collect();

        let stats = match state.human() {
            Some(human) => MatchStats {
                unused_power_ups: human.hand.power_ups().count(),
                best_round_delta: state
                    .results
                    .iter()
                    .filter_map(|r| r.delta_for(&human.id))
                    .max()
                    .unwrap_or(0),
            },
            None => MatchStats::default(),
        };

        Ok(Self {
            match_id: state.id.clone(),
            mode: state.mode,
            ranked: state.ranked,
            players,
            winner: engine.match_winner(),
            human_won: engine.human_won(),
            rounds: state.results.iter().cloned().collect(),
            stats,
            rank_change: None,
        })
    }

    /// Attach the cached rating result of a ranked match.
    #[must_use]
    pub fn with_rating(mut self, update: &RatingUpdate) -> Self {
        if self.ranked {
            self.rank_change = Some(RankChange::from(update));
        }
        self
    }
}
