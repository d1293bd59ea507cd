//! Match lifecycle.
//!
//! ## Key Types
//!
//! - `MatchEngine`: creates a match, accepts plays, scores rounds
//! - `Match`: the full state of one match, serializable
//! - `MatchEvent`: one entry of the per-match event log
//! - `MatchSummary`: what the result screen needs once the match is over
//!
//! Each `Match` is owned by exactly one engine. Nothing is shared between
//! matches.

pub mod engine;
pub mod error;
pub mod events;
pub mod player;
pub mod roster;
pub mod state;
pub mod summary;

pub use engine::MatchEngine;
pub use error::MatchError;
pub use events::{EventLog, MatchEvent, MatchEventKind};
pub use player::Player;
pub use roster::{ai_name, seats, Seat, HIGH_RANKED_NAMES, REGULAR_NAMES};
pub use state::{GameMode, Match, MatchStatus, RoundResult};
pub use summary::{MatchStats, MatchSummary, PlayerLine, RankChange};
