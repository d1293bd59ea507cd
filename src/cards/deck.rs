//! The shared 52-card deck.
//!
//! A `Deck` is a stack: the top card is the last element. Hands are dealt
//! by popping from the top, so threading the remainder from one deal into
//! the next can never hand out the same card twice.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{GameRng, DECK_SIZE};

/// Ordered sequence of regular cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 (rank, suit) combinations exactly once, in suit-major order,
    /// each with a fresh card id.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::regular(rank, suit));
            }
        }
        Self { cards }
    }

    /// Wrap an explicit card sequence (top = last).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Pop `n` cards from the top, or `None` (deck untouched) if fewer remain.
    pub fn draw(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        let split = self.cards.len() - n;
        let mut drawn = self.cards.split_off(split);
        // Pop order: topmost card first.
        drawn.reverse();
        Some(drawn)
    }

    /// Fisher-Yates shuffle: walk from the last index down to 1, swapping
    /// each position with a uniformly chosen index in `[0, i]`.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range_usize(0..i + 1);
            self.cards.swap(i, j);
        }
    }
}

/// Build a freshly shuffled 52-card deck.
#[must_use]
pub fn build_deck(rng: &mut GameRng) -> Deck {
    let mut deck = Deck::standard();
    deck.shuffle(rng);
    deck
}
