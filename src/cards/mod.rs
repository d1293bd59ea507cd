//! Card system: card model, deck construction, hand dealing.
//!
//! ## Key Types
//!
//! - `Card`: a regular (rank, suit) card or a power-up, with a unique id
//! - `Deck`: shuffled stack of the 52 regular cards
//! - `Hand`: cards a player holds
//! - `deal_hand`: deck in, hand and remaining deck out

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, CardKind, PowerUpKind, Rank, Suit};
pub use deck::{build_deck, Deck};
pub use hand::{deal_hand, deal_hand_with, random_power_up, DealError, Dealt, Hand};
