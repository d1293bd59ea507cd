//! Match event log.
//!
//! Every state transition appends one `MatchEvent`. The log is append-only,
//! carried inside the match (and its snapshots) and is what the presentation
//! layer or a replay tool reads to narrate the game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::RoundWinner;

use super::state::GameMode;

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEventKind {
    /// Roster built and hands dealt.
    MatchCreated {
        match_id: String,
        mode: GameMode,
        ranked: bool,
        players: Vec<PlayerId>,
    },

    /// A player received a hand.
    HandDealt {
        player: PlayerId,
        regular: usize,
        power_ups: usize,
    },

    /// A card was accepted as a player's play for the round.
    CardSubmitted {
        round: u32,
        player: PlayerId,
        card: Card,
    },

    /// A complete round was scored.
    RoundResolved {
        round: u32,
        winner: RoundWinner,
    },

    /// The last round was scored.
    MatchFinished {
        winner: RoundWinner,
    },
}

/// Event with its sequence number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub seq: u32,
    pub kind: MatchEventKind,
}

/// Append-only event log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<MatchEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, assigning the next sequence number.
    pub fn record(&mut self, kind: MatchEventKind) {
        let seq = self.events.len() as u32;
        self.events.push_back(MatchEvent { seq, kind });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MatchEvent> {
        self.events.last()
    }
}
