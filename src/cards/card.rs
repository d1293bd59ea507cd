//! Card model: regular cards and power-ups.
//!
//! A `Card` pairs a process-unique `CardId` with its `CardKind`. Cards are
//! immutable once created; hands and plays refer to them by id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::CardId;

/// Card suit. Carries no strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "♠")]
    Spades,
    #[serde(rename = "♥")]
    Hearts,
    #[serde(rename = "♦")]
    Diamonds,
    #[serde(rename = "♣")]
    Clubs,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "♠" | "s" | "S" => Ok(Suit::Spades),
            "♥" | "h" | "H" => Ok(Suit::Hearts),
            "♦" | "d" | "D" => Ok(Suit::Diamonds),
            "♣" | "c" | "C" => Ok(Suit::Clubs),
            _ => Err(format!("Invalid suit: {s}")),
        }
    }
}

/// Face value, ordered `2` < ... < `A`.
///
/// The discriminant is the numeric strength (2-14).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two = 2,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric strength: ordinal position + 2.
    #[must_use]
    pub const fn strength(self) -> i32 {
        self as i32
    }

    /// Display label (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(s) || (s == "T" && *r == Rank::Ten))
            .ok_or_else(|| format!("Invalid rank: {s}"))
    }
}

/// Power-up effect kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerUpKind {
    Boost,
    Double,
    Steal,
    Shield,
}

impl PowerUpKind {
    /// All kinds, sampled uniformly when generating hands.
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Boost,
        PowerUpKind::Double,
        PowerUpKind::Steal,
        PowerUpKind::Shield,
    ];

    /// Associated magnitude: BOOST +3, DOUBLE x2, others 1.
    #[must_use]
    pub const fn magnitude(self) -> i32 {
        match self {
            PowerUpKind::Boost => 3,
            PowerUpKind::Double => 2,
            PowerUpKind::Steal | PowerUpKind::Shield => 1,
        }
    }

    /// Upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PowerUpKind::Boost => "BOOST",
            PowerUpKind::Double => "DOUBLE",
            PowerUpKind::Steal => "STEAL",
            PowerUpKind::Shield => "SHIELD",
        }
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    #[serde(rename = "regular")]
    Regular { rank: Rank, suit: Suit },
    #[serde(rename = "powerup")]
    PowerUp { power: PowerUpKind },
}

/// A card with its unique id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

impl Card {
    /// Create a regular card with a fresh id.
    #[must_use]
    pub fn regular(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::next(),
            kind: CardKind::Regular { rank, suit },
        }
    }

    /// Create a power-up card with a fresh id.
    #[must_use]
    pub fn power_up(power: PowerUpKind) -> Self {
        Self {
            id: CardId::next(),
            kind: CardKind::PowerUp { power },
        }
    }

    #[must_use]
    pub fn is_regular(&self) -> bool {
        matches!(self.kind, CardKind::Regular { .. })
    }

    #[must_use]
    pub fn is_power_up(&self) -> bool {
        matches!(self.kind, CardKind::PowerUp { .. })
    }

    /// Rank, for regular cards.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        match self.kind {
            CardKind::Regular { rank, .. } => Some(rank),
            CardKind::PowerUp { .. } => None,
        }
    }

    /// Power-up kind, for power-up cards.
    #[must_use]
    pub fn power(&self) -> Option<PowerUpKind> {
        match self.kind {
            CardKind::PowerUp { power } => Some(power),
            CardKind::Regular { .. } => None,
        }
    }
}

impl fmt::Display for Card {
    /// `K♠`, `10♥`, `[BOOST]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Regular { rank, suit } => write!(f, "{rank}{suit}"),
            CardKind::PowerUp { power } => write!(f, "[{power}]"),
        }
    }
}
