//! Match engine: the state machine driving one match.
//!
//! ```text
//! create ──► Playing ──(advance_round × max_rounds)──► Finished
//!              ▲   │
//!              └───┘ submit_card / advance_round
//! ```
//!
//! Every operation either applies fully or returns a `MatchError` without
//! touching the state.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cards::{build_deck, deal_hand_with, Card};
use crate::core::{CardId, GameRng, MatchConfig, PlayerId, Team, DECK_SIZE};
use crate::rules::{self, RoundWinner};

use super::error::MatchError;
use super::events::{EventLog, MatchEventKind};
use super::player::Player;
use super::roster::{ai_name, seats};
use super::state::{GameMode, Match, MatchStatus, RoundResult};

/// Owns a `Match` and enforces its rules.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    state: Match,
}

impl MatchEngine {
    /// Create a match with the default configuration.
    pub fn create(
        mode: GameMode,
        ranked: bool,
        human_name: &str,
        rng: &mut GameRng,
    ) -> Result<Self, MatchError> {
        Self::create_with_config(MatchConfig::default(), mode, ranked, human_name, rng)
    }

    /// Build the roster, deal every hand from one shared deck (human first)
    /// and open round 1.
    ///
    /// Fails with `InsufficientCards` if the roster cannot be dealt from a
    /// single deck.
    pub fn create_with_config(
        config: MatchConfig,
        mode: GameMode,
        ranked: bool,
        human_name: &str,
        rng: &mut GameRng,
    ) -> Result<Self, MatchError> {
        let seats = seats(mode);
        let needed = config.regular_cards_needed(seats.len());
        if needed > DECK_SIZE {
            return Err(MatchError::InsufficientCards {
                needed,
                available: DECK_SIZE,
            });
        }

        let match_id = format!("{:016x}", rng.next_u64());
        let mut events = EventLog::new();
        events.record(MatchEventKind::MatchCreated {
            match_id: match_id.clone(),
            mode,
            ranked,
            players: seats.iter().map(|s| s.id.clone()).collect(),
        });

        let mut deck = build_deck(rng);
        let mut players = Vec::with_capacity(seats.len());
        for seat in seats {
            let dealt = deal_hand_with(
                deck,
                config.regular_cards_per_hand,
                config.power_ups_per_hand,
                rng,
            )?;
            deck = dealt.remaining;

            let name = match seat.reference_mmr {
                Some(mmr) => ai_name(mmr, config.ai_high_ranked_mmr, rng).to_string(),
                None => human_name.to_string(),
            };

            events.record(MatchEventKind::HandDealt {
                player: seat.id.clone(),
                regular: dealt.hand.regular_cards().count(),
                power_ups: dealt.hand.power_ups().count(),
            });
            players.push(Player::new(seat.id, name, seat.is_ai, seat.team, dealt.hand));
        }

        let state = Match {
            id: match_id,
            mode,
            ranked,
            players,
            current_round: 1,
            max_rounds: config.max_rounds,
            played: Default::default(),
            results: Default::default(),
            status: MatchStatus::Playing,
            created_at_ms: now_ms(),
            events,
        };

        Ok(Self { config, state })
    }

    /// Wrap an existing match (e.g. one restored from a snapshot).
    #[must_use]
    pub fn from_match(config: MatchConfig, state: Match) -> Self {
        Self { config, state }
    }

    #[must_use]
    pub fn state(&self) -> &Match {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.state.current_round
    }

    // === Card submission ===

    /// Record `card` as `player`'s play for the current round and take it
    /// out of their hand.
    ///
    /// Rejected if the match is finished, the player is unknown, the player
    /// already played this round, or the card is not in their hand.
    pub fn submit_card(&mut self, player: &PlayerId, card: CardId) -> Result<Card, MatchError> {
        if self.is_complete() {
            return Err(MatchError::MatchFinished);
        }
        let round = self.state.current_round;
        if self.state.has_played(player) {
            return Err(MatchError::AlreadyPlayed {
                player: player.clone(),
                round,
            });
        }

        let seat = self
            .state
            .player_mut(player)
            .ok_or_else(|| MatchError::PlayerNotFound(player.clone()))?;
        let played = seat.hand.remove(card).ok_or_else(|| MatchError::CardNotInHand {
            player: player.clone(),
            card,
        })?;

        self.state.played.insert(player.clone(), played);
        self.state.events.record(MatchEventKind::CardSubmitted {
            round,
            player: player.clone(),
            card: played,
        });
        Ok(played)
    }

    // === Round resolution ===

    /// True once every player has a play recorded this round.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.state.played.len() == self.state.players.len()
    }

    /// Winner of the current plays. Read-only.
    #[must_use]
    pub fn resolve_round(&self) -> RoundWinner {
        rules::resolve(&self.state.played, &self.state.participants())
    }

    /// Score the complete round, log it and open the next one.
    ///
    /// Winners get `win_points`, losers `loss_points`, everyone gets
    /// `tie_points` on a tie. Finishes the match after `max_rounds`.
    pub fn advance_round(&mut self) -> Result<&RoundResult, MatchError> {
        if self.is_complete() {
            return Err(MatchError::MatchFinished);
        }
        if !self.is_round_complete() {
            return Err(MatchError::RoundIncomplete {
                round: self.state.current_round,
                played: self.state.played.len(),
                expected: self.state.players.len(),
            });
        }

        let winner = self.resolve_round();
        let round = self.state.current_round;

        let mut deltas = Vec::with_capacity(self.state.players.len());
        for player in &mut self.state.players {
            let won = winner.includes(&player.id, player.team);
            let delta = if winner.is_tie() {
                self.config.tie_points
            } else if won {
                self.config.win_points
            } else {
                self.config.loss_points
            };

            player.score += delta;
            if won {
                player.rounds_won += 1;
            }
            deltas.push((player.id.clone(), delta));
        }

        self.state.results.push_back(RoundResult {
            round,
            winner: winner.clone(),
            deltas,
        });
        self.state.events.record(MatchEventKind::RoundResolved { round, winner });
        self.state.played.clear();
        self.state.current_round += 1;

        if round >= self.state.max_rounds {
            self.state.status = MatchStatus::Finished;
            let winner = self.match_winner();
            self.state.events.record(MatchEventKind::MatchFinished { winner });
        }

        let last = self.state.results.len() - 1;
        Ok(&self.state.results[last])
    }

    /// True once the match is finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.status == MatchStatus::Finished
            || self.state.current_round > self.state.max_rounds
    }

    // === Outcome ===

    /// Cumulative score per player, in roster order.
    #[must_use]
    pub fn final_scores(&self) -> Vec<(PlayerId, i32)> {
        self.state
            .players
            .iter()
            .map(|p| (p.id.clone(), p.score))
            .collect()
    }

    /// Match winner by cumulative score.
    ///
    /// 1v1: the player with the strictly higher score. 2v2: the team with the
    /// strictly higher summed score. Otherwise a tie.
    #[must_use]
    pub fn match_winner(&self) -> RoundWinner {
        match self.state.mode {
            GameMode::OneVsOne => {
                let mut ranked: Vec<_> = self.state.players.iter().collect();
                ranked.sort_by(|a, b| b.score.cmp(&a.score));
                match ranked.as_slice() {
                    [first, second, ..] if first.score > second.score => {
                        RoundWinner::Player(first.id.clone())
                    }
                    [only] => RoundWinner::Player(only.id.clone()),
                    _ => RoundWinner::Tie,
                }
            }
            GameMode::TwoVsTwo => rules::TeamScores {
                team1: self.state.team_score(Team::One),
                team2: self.state.team_score(Team::Two),
            }
            .winner(),
        }
    }

    /// Did the human side win the match?
    #[must_use]
    pub fn human_won(&self) -> bool {
        self.state
            .human()
            .map(|h| self.match_winner().includes(&h.id, h.team))
            .unwrap_or(false)
    }

    // === Snapshots ===

    /// Serialize the match with bincode.
    pub fn snapshot(&self) -> Result<Vec<u8>, MatchError> {
        Ok(bincode::serialize(&self.state)?)
    }

    /// Restore a match saved with `snapshot`.
    pub fn restore(config: MatchConfig, bytes: &[u8]) -> Result<Self, MatchError> {
        let state: Match = bincode::deserialize(bytes)?;
        Ok(Self::from_match(config, state))
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
