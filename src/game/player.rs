//! Players in a match.

use serde::{Deserialize, Serialize};

use crate::cards::Hand;
use crate::core::{PlayerId, Team};

/// A seat in a match: identity, running score and hand.
///
/// `team` is only set in 2v2 rosters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_ai: bool,
    pub team: Option<Team>,
    pub score: i32,
    pub rounds_won: u32,
    pub hand: Hand,
}

impl Player {
    /// Create a player with zero score and the given hand.
    pub fn new(id: PlayerId, name: impl Into<String>, is_ai: bool, team: Option<Team>, hand: Hand) -> Self {
        Self {
            id,
            name: name.into(),
            is_ai,
            team,
            score: 0,
            rounds_won: 0,
            hand,
        }
    }

    /// Does the player still hold a regular card?
    #[must_use]
    pub fn has_regular_card(&self) -> bool {
        self.hand.regular_cards().next().is_some()
    }
}
