//! Cooperative driving loop for one match.
//!
//! The driver owns the engine and plays the AI seats. AI plays are not made
//! immediately: when a round opens the driver schedules one "thinking" turn,
//! due `ai_think_delay_ms` later. The caller passes the clock in through
//! `tick(now_ms)`, so nothing here sleeps or spawns.
//!
//! ```text
//! open round ──► schedule(due, round) ──tick(now ≥ due)──► AI plays
//!                      │
//!                      └── cancel_pending / teardown / round moved on ──► dropped
//! ```
//!
//! A scheduled turn re-checks the match before acting: it does nothing if
//! the match completed or the round it was scheduled for has passed.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, GameRng, GameRngState, MatchConfig, PlayerId};
use crate::game::{Match, MatchEngine, MatchError, RoundResult};

use super::policy::{OpponentPolicy, RandomRegularPolicy};

/// A pending AI turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTurn {
    pub due_at_ms: u64,
    /// Round this turn was scheduled for.
    pub round: u32,
}

/// Driver counters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DriverStats {
    /// AI turns scheduled.
    pub turns_scheduled: u32,
    /// Scheduled turns that fired and played.
    pub turns_fired: u32,
    /// Scheduled turns dropped (canceled, stale round, or match over).
    pub turns_dropped: u32,
    /// Cards submitted for AI seats.
    pub ai_cards_played: u32,
    /// AI seats that had nothing the policy would play.
    pub stalled_seats: u32,
}

impl DriverStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What one `tick` did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// AI plays submitted, in roster order.
    pub played: Vec<(PlayerId, Card)>,
    /// AI seats still without a play because the policy returned nothing.
    pub stalled: Vec<PlayerId>,
}

impl TickOutcome {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.played.is_empty() && self.stalled.is_empty()
    }
}

/// Everything needed to resume a driven match.
#[derive(Serialize, Deserialize)]
struct DriverSnapshot {
    state: Match,
    rng: GameRngState,
    pending: Option<ScheduledTurn>,
}

/// Owns a match and drives its AI seats.
pub struct MatchDriver<P: OpponentPolicy = RandomRegularPolicy> {
    engine: MatchEngine,
    policy: P,
    rng: GameRng,
    pending: Option<ScheduledTurn>,
    stats: DriverStats,
}

impl MatchDriver<RandomRegularPolicy> {
    /// Drive `engine` with the default policy. Schedules the first AI turn.
    pub fn new(engine: MatchEngine, rng: GameRng, now_ms: u64) -> Self {
        Self::with_policy(engine, RandomRegularPolicy, rng, now_ms)
    }
}

impl<P: OpponentPolicy> MatchDriver<P> {
    /// Drive `engine` with a custom policy. Schedules the first AI turn.
    pub fn with_policy(engine: MatchEngine, policy: P, rng: GameRng, now_ms: u64) -> Self {
        let mut driver = Self {
            engine,
            policy,
            rng,
            pending: None,
            stats: DriverStats::new(),
        };
        driver.schedule(now_ms);
        driver
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    #[must_use]
    pub fn stats(&self) -> &DriverStats {
        &self.stats
    }

    #[must_use]
    pub fn pending(&self) -> Option<ScheduledTurn> {
        self.pending
    }

    /// Submit the human's card for the current round.
    pub fn submit_human(&mut self, card: CardId) -> Result<Card, MatchError> {
        self.engine.submit_card(&PlayerId::human(), card)
    }

    /// Fire the pending AI turn if it is due.
    ///
    /// Each AI seat without a play this round submits what the policy picks.
    pub fn tick(&mut self, now_ms: u64) -> Result<TickOutcome, MatchError> {
        let turn = match self.pending {
            Some(turn) if now_ms >= turn.due_at_ms => turn,
            _ => return Ok(TickOutcome::default()),
        };
        self.pending = None;

        if self.engine.is_complete() || turn.round != self.engine.current_round() {
            self.stats.turns_dropped += 1;
            return Ok(TickOutcome::default());
        }
        self.stats.turns_fired += 1;

        let waiting: Vec<PlayerId> = self
            .engine
            .state()
            .players
            .iter()
            .filter(|p| p.is_ai && !self.engine.state().has_played(&p.id))
            .map(|p| p.id.clone())
            .collect();

        let mut outcome = TickOutcome::default();
        for id in waiting {
            let choice = self
                .engine
                .state()
                .player(&id)
                .and_then(|p| self.policy.choose_card(p, &mut self.rng));

            match choice {
                Some(card) => {
                    let played = self.engine.submit_card(&id, card)?;
                    self.stats.ai_cards_played += 1;
                    outcome.played.push((id, played));
                }
                None => {
                    self.stats.stalled_seats += 1;
                    outcome.stalled.push(id);
                }
            }
        }
        Ok(outcome)
    }

    /// Score the complete round and schedule the next AI turn.
    pub fn finish_round(&mut self, now_ms: u64) -> Result<RoundResult, MatchError> {
        let result = self.engine.advance_round()?.clone();
        self.pending = None;
        self.schedule(now_ms);
        Ok(result)
    }

    /// Drop the pending AI turn. Returns whether one was pending.
    pub fn cancel_pending(&mut self) -> bool {
        let canceled = self.pending.take().is_some();
        if canceled {
            self.stats.turns_dropped += 1;
        }
        canceled
    }

    /// Stop driving and hand the match back. Any pending turn is dropped.
    pub fn teardown(mut self) -> MatchEngine {
        self.cancel_pending();
        self.engine
    }

    /// Serialize the match, the AI RNG position and the pending turn.
    pub fn snapshot(&self) -> Result<Vec<u8>, MatchError> {
        let snapshot = DriverSnapshot {
            state: self.engine.state().clone(),
            rng: self.rng.state(),
            pending: self.pending,
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Resume a match saved with `snapshot`. Counters start from zero.
    pub fn restore(config: MatchConfig, policy: P, bytes: &[u8]) -> Result<Self, MatchError> {
        let snapshot: DriverSnapshot = bincode::deserialize(bytes)?;
        Ok(Self {
            engine: MatchEngine::from_match(config, snapshot.state),
            policy,
            rng: GameRng::from_state(&snapshot.rng),
            pending: snapshot.pending,
            stats: DriverStats::new(),
        })
    }

    fn schedule(&mut self, now_ms: u64) {
        if self.engine.is_complete() {
            return;
        }
        self.pending = Some(ScheduledTurn {
            due_at_ms: now_ms.saturating_add(self.engine.config().ai_think_delay_ms),
            round: self.engine.current_round(),
        });
        self.stats.turns_scheduled += 1;
    }
}
