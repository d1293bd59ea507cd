//! Round rules: card values and round-winner determination.
//!
//! The match engine calls into this module but the resolver itself is
//! read-only; it never mutates hands or scores.

pub mod resolver;

pub use resolver::{
    apply_power_up, effective_value, numeric_value, resolve, resolve_individual, resolve_teams,
    team_scores, Participants, PlayedCards, RoundWinner, TeamScores,
};
