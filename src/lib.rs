//! # highcard
//!
//! Rules engine and ranked progression for HighCard, a round-based card
//! game played 1v1 or 2v2 against synthetic opponents.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: every shuffle, power-up draw, AI choice and
//!    opponent jitter comes from a seeded `GameRng` passed in by the caller.
//!    Same seed, same match.
//!
//! 2. **Explicit deck threading**: dealing returns the remaining deck,
//!    which the next deal consumes. There is no hidden shared deck.
//!
//! 3. **Loud contract violations**: an invalid submission or an early
//!    `advance_round` returns an error and leaves the match untouched.
//!
//! ## Architecture
//!
//! ```text
//! cards ──► game::MatchEngine ──► rules::resolve ──► RoundResult
//!                 │
//!          ai::MatchDriver (AI seats, thinking delay)
//!                 │ finished
//!                 ▼
//!     rating (Elo, tiers) ──► profile::ProfileStore
//! ```
//!
//! ## Modules
//!
//! - `core`: ids, RNG, configuration
//! - `cards`: cards, deck, hands and dealing
//! - `rules`: round resolution
//! - `game`: match state machine, event log, result summary
//! - `ai`: opponent policies and the match driver
//! - `rating`: MMR updates, tiers, placement, queue estimate
//! - `profile`: profile storage seam and result persistence

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod ai;
pub mod rating;
pub mod profile;

// Re-export commonly used types
pub use crate::core::{
    CardId, PlayerId, Team,
    GameRng, GameRngState,
    MatchConfig, RatingConfig, DECK_SIZE,
};

pub use crate::cards::{
    Card, CardKind, PowerUpKind, Rank, Suit,
    Deck, build_deck,
    Hand, Dealt, DealError, deal_hand, deal_hand_with,
};

pub use crate::rules::{
    PlayedCards, Participants, RoundWinner, TeamScores,
    effective_value, numeric_value, resolve,
};

pub use crate::game::{
    GameMode, Match, MatchEngine, MatchError, MatchEvent, MatchEventKind,
    MatchStatus, MatchSummary, Player, RankChange, RoundResult,
};

pub use crate::ai::{
    DriverStats, MatchDriver, OpponentPolicy, RandomRegularPolicy, RegularFirstPolicy,
};

pub use crate::rating::{
    RankRecord, RatingUpdate, TierDivision, TierName,
    estimated_queue_time, rating_delta, tier_from_mmr,
};

pub use crate::profile::{
    InMemoryProfileStore, MatchOutcome, ProfileError, ProfileStore, record_match_result,
};
