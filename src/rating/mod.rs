//! Skill rating (MMR) and ranked progression.
//!
//! ## Key Types
//!
//! - `TierDivision`: coarse tier plus division, derived from MMR
//! - `RankRecord`: a player's stored rank in one mode
//! - `RatingUpdate`: the single, cached result of rating one match
//!
//! The model is pure: it computes values, the profile store persists them.

pub mod elo;
pub mod queue;
pub mod record;
pub mod tier;

pub use elo::{apply_delta, expected_score, rating_delta, rating_delta_with_k, synthetic_opponent_mmr};
pub use queue::estimated_queue_time;
pub use record::{rate_ranked_match, PlacementProgress, RankRecord, RatingUpdate};
pub use tier::{tier_from_mmr, TierDivision, TierName};
