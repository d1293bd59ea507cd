//! Hands and the hand dealer.
//!
//! A hand is 8 regular cards taken from the shared deck plus 2 freshly
//! generated power-ups. `deal_hand` consumes the deck and hands back the
//! remainder, which callers thread into the next deal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::card::{Card, PowerUpKind};
use super::deck::Deck;
use crate::core::{CardId, GameRng};

/// Default regular cards per hand.
pub const REGULAR_CARDS_PER_HAND: usize = 8;

/// Default power-ups per hand.
pub const POWER_UPS_PER_HAND: usize = 2;

/// Dealing failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck has {available} cards, {needed} needed for a hand")]
    InsufficientCards { needed: usize, available: usize },
}

/// A player's cards. Shrinks as cards are played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 10]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Remove a card by id, returning it.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Regular cards still held.
    pub fn regular_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_regular())
    }

    /// Power-up cards still held.
    pub fn power_ups(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_power_up())
    }
}

/// Result of one deal.
#[derive(Clone, Debug)]
pub struct Dealt {
    pub hand: Hand,
    /// What is left of the deck, to pass into the next deal.
    pub remaining: Deck,
}

/// Sample one power-up card, uniformly over the four kinds.
#[must_use]
pub fn random_power_up(rng: &mut GameRng) -> Card {
    let index = rng.gen_range_usize(0..PowerUpKind::ALL.len());
    Card::power_up(PowerUpKind::ALL[index])
}

/// Deal a standard 8 + 2 hand.
pub fn deal_hand(deck: Deck, rng: &mut GameRng) -> Result<Dealt, DealError> {
    deal_hand_with(deck, REGULAR_CARDS_PER_HAND, POWER_UPS_PER_HAND, rng)
}

/// Deal `regular` cards from the top of `deck` plus `power_ups` new power-ups.
///
/// Fails without consuming anything if the deck is too small.
pub fn deal_hand_with(
    mut deck: Deck,
    regular: usize,
    power_ups: usize,
    rng: &mut GameRng,
) -> Result<Dealt, DealError> {
    let available = deck.len();
    let drawn = deck.draw(regular).ok_or(DealError::InsufficientCards {
        needed: regular,
        available,
    })?;

    let mut hand = Hand::from_cards(drawn);
    for _ in 0..power_ups {
        hand.push(random_power_up(rng));
    }

    Ok(Dealt { hand, remaining: deck })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::build_deck;

    #[test]
    fn test_deal_hand_composition() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&mut rng);

        let Dealt { hand, remaining } = deal_hand(deck, &mut rng).unwrap();
        assert_eq!(hand.len(), 10);
        assert_eq!(hand.regular_cards().count(), 8);
        assert_eq!(hand.power_ups().count(), 2);
        assert_eq!(remaining.len(), 44);
    }

    #[test]
    fn test_deal_takes_from_top() {
        let mut rng = GameRng::new(1);
        let deck = build_deck(&mut rng);
        let top_eight: Vec<_> = deck.cards().iter().rev().take(8).map(|c| c.id).collect();

        let dealt = deal_hand(deck, &mut rng).unwrap();
        let dealt_ids: Vec<_> = dealt.hand.regular_cards().map(|c| c.id).collect();
        assert_eq!(dealt_ids, top_eight);
    }

    #[test]
    fn test_deal_insufficient() {
        let mut rng = GameRng::new(1);
        let deck = Deck::from_cards(Deck::standard().cards()[..7].to_vec());

        let err = deal_hand(deck, &mut rng).unwrap_err();
        assert_eq!(err, DealError::InsufficientCards { needed: 8, available: 7 });
    }

    #[test]
    fn test_power_ups_cover_all_kinds() {
        let mut rng = GameRng::new(5);
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..200 {
            seen.insert(random_power_up(&mut rng).power().unwrap());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_hand_remove_once() {
        let mut rng = GameRng::new(3);
        let dealt = deal_hand(build_deck(&mut rng), &mut rng).unwrap();
        let mut hand = dealt.hand;
        let id = hand.cards()[0].id;

        assert!(hand.contains(id));
        assert!(hand.remove(id).is_some());
        assert!(!hand.contains(id));
        assert!(hand.remove(id).is_none());
        assert_eq!(hand.len(), 9);
    }
}
