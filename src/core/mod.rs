//! Core building blocks: identifiers, RNG, configuration.
//!
//! Nothing here knows about rounds or ratings; the game and rating
//! modules build on these types.

pub mod config;
pub mod ids;
pub mod rng;

pub use config::{MatchConfig, RatingConfig, DECK_SIZE};
pub use ids::{CardId, PlayerId, Team};
pub use rng::{GameRng, GameRngState};
