//! Identifiers for cards, players and teams.
//!
//! ## CardId
//!
//! Every card gets a `CardId` when it is created. Hands and plays are keyed
//! by id, so ids must never repeat within a process: they come from a single
//! atomic counter rather than from the match RNG.
//!
//! ## PlayerId
//!
//! Stable string identifiers. The roster uses a fixed set:
//! `player`, `ai1`, `ai_teammate`, `ai_opponent_1`, `ai_opponent_2`.
//!
//! ## Team
//!
//! Only present in 2v2. Serialized as its token (`team1` / `team2`).

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Allocate a fresh id. Never returns the same value twice in a process.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.raw())
    }
}

/// Stable player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a player ID from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The human seat.
    #[must_use]
    pub fn human() -> Self {
        Self::new("player")
    }

    /// The single synthetic opponent in 1v1.
    #[must_use]
    pub fn ai_opponent() -> Self {
        Self::new("ai1")
    }

    /// The synthetic teammate in 2v2.
    #[must_use]
    pub fn ai_teammate() -> Self {
        Self::new("ai_teammate")
    }

    /// The `n`-th (1-based) synthetic opponent in 2v2.
    #[must_use]
    pub fn ai_team_opponent(n: usize) -> Self {
        Self(format!("ai_opponent_{n}"))
    }

    /// Borrow the raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Team membership in 2v2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "team1")]
    One,
    #[serde(rename = "team2")]
    Two,
}

impl Team {
    /// Team number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// Wire token used in round results.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Team::One => "team1",
            Team::Two => "team2",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
