//! Round resolution.
//!
//! Given one played card per participant, decide who took the round:
//!
//! - **Individual** (1v1): highest effective value wins; a shared maximum is a tie.
//! - **Teams** (2v2): each team sums its members' numeric values; the strictly
//!   greater sum wins, equal sums tie.
//!
//! Resolution is a pure function of its inputs. It never touches hands or scores.
//!
//! ## Power-ups
//!
//! In individual mode a power-up is valued as its modifier applied to a base
//! of 0: BOOST gives 3, DOUBLE gives 0, STEAL and SHIELD give 0. In team mode
//! power-ups contribute their numeric value, which is 0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, PowerUpKind};
use crate::core::{PlayerId, Team};

/// Cards played this round, by player.
pub type PlayedCards = FxHashMap<PlayerId, Card>;

/// Outcome of a round (or of a whole match).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundWinner {
    /// Nobody won.
    Tie,
    /// A single player won (1v1).
    Player(PlayerId),
    /// A team won (2v2).
    Team(Team),
}

impl RoundWinner {
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, RoundWinner::Tie)
    }

    /// Was the given player on the winning side?
    #[must_use]
    pub fn includes(&self, player: &PlayerId, team: Option<Team>) -> bool {
        match self {
            RoundWinner::Tie => false,
            RoundWinner::Player(id) => id == player,
            RoundWinner::Team(t) => team == Some(*t),
        }
    }

    /// Wire token: player id, `team1`/`team2`, or `None` for a tie.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            RoundWinner::Tie => None,
            RoundWinner::Player(id) => Some(id.as_str()),
            RoundWinner::Team(t) => Some(t.token()),
        }
    }
}

impl std::fmt::Display for RoundWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token().unwrap_or("tie"))
    }
}

/// Who takes part in a round and how they are grouped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participants {
    Individual(Vec<PlayerId>),
    Teams { team1: Vec<PlayerId>, team2: Vec<PlayerId> },
}

impl Participants {
    /// Total number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Participants::Individual(ids) => ids.len(),
            Participants::Teams { team1, team2 } => team1.len() + team2.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A round is complete when every participant has a play.
    #[must_use]
    pub fn all_played(&self, plays: &PlayedCards) -> bool {
        let has = |ids: &[PlayerId]| ids.iter().all(|id| plays.contains_key(id));
        match self {
            Participants::Individual(ids) => has(ids),
            Participants::Teams { team1, team2 } => has(team1) && has(team2),
        }
    }
}

/// Numeric strength: 2-14 for regular cards, 0 for power-ups.
#[must_use]
pub fn numeric_value(card: &Card) -> i32 {
    match card.kind {
        CardKind::Regular { rank, .. } => rank.strength(),
        CardKind::PowerUp { .. } => 0,
    }
}

/// Apply a power-up modifier to a base value.
#[must_use]
pub fn apply_power_up(base: i32, power: PowerUpKind) -> i32 {
    match power {
        PowerUpKind::Boost => base + power.magnitude(),
        PowerUpKind::Double => base * power.magnitude(),
        // No effect defined.
        PowerUpKind::Steal | PowerUpKind::Shield => base,
    }
}

/// Value used to compare cards in individual mode.
#[must_use]
pub fn effective_value(card: &Card) -> i32 {
    match card.kind {
        CardKind::Regular { rank, .. } => rank.strength(),
        CardKind::PowerUp { power } => apply_power_up(0, power),
    }
}

/// Pick the player with the highest effective value.
///
/// Participants without a play are ignored. A maximum shared by two or more
/// players, or no plays at all, is a tie.
#[must_use]
pub fn resolve_individual(plays: &PlayedCards, participants: &[PlayerId]) -> RoundWinner {
    let mut best: Option<(&PlayerId, i32)> = None;
    let mut shared = false;

    for id in participants {
        let Some(card) = plays.get(id) else {
            continue;
        };
        let value = effective_value(card);
        match best {
            Some((_, top)) if value < top => {}
            Some((_, top)) if value == top => shared = true,
            _ => {
                best = Some((id, value));
                shared = false;
            }
        }
    }

    match best {
        Some((id, _)) if !shared => RoundWinner::Player(id.clone()),
        _ => RoundWinner::Tie,
    }
}

/// Summed numeric values per team for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScores {
    pub team1: i32,
    pub team2: i32,
}

impl TeamScores {
    /// Team with the strictly greater sum.
    #[must_use]
    pub fn winner(&self) -> RoundWinner {
        use std::cmp::Ordering;
        match self.team1.cmp(&self.team2) {
            Ordering::Greater => RoundWinner::Team(Team::One),
            Ordering::Less => RoundWinner::Team(Team::Two),
            Ordering::Equal => RoundWinner::Tie,
        }
    }
}

/// Sum each team's numeric values. Missing plays count as 0.
#[must_use]
pub fn team_scores(plays: &PlayedCards, team1: &[PlayerId], team2: &[PlayerId]) -> TeamScores {
    let sum = |ids: &[PlayerId]| -> i32 {
        ids.iter()
            .filter_map(|id| plays.get(id))
            .map(numeric_value)
            .sum()
    };
    TeamScores {
        team1: sum(team1),
        team2: sum(team2),
    }
}

/// Resolve a 2v2 round.
#[must_use]
pub fn resolve_teams(plays: &PlayedCards, team1: &[PlayerId], team2: &[PlayerId]) -> RoundWinner {
    team_scores(plays, team1, team2).winner()
}

/// Resolve a round for any grouping.
#[must_use]
pub fn resolve(plays: &PlayedCards, participants: &Participants) -> RoundWinner {
    match participants {
        Participants::Individual(ids) => resolve_individual(plays, ids),
        Participants::Teams { team1, team2 } => resolve_teams(plays, team1, team2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn plays(entries: &[(&str, Card)]) -> PlayedCards {
        entries
            .iter()
            .map(|(id, card)| (PlayerId::from(*id), *card))
            .collect()
    }

    fn ids(raw: &[&str]) -> Vec<PlayerId> {
        raw.iter().map(|s| PlayerId::from(*s)).collect()
    }

    #[test]
    fn test_values() {
        let king = Card::regular(Rank::King, Suit::Spades);
        assert_eq!(numeric_value(&king), 13);
        assert_eq!(effective_value(&king), 13);

        let boost = Card::power_up(PowerUpKind::Boost);
        let double = Card::power_up(PowerUpKind::Double);
        let steal = Card::power_up(PowerUpKind::Steal);
        let shield = Card::power_up(PowerUpKind::Shield);

        assert_eq!(numeric_value(&boost), 0);
        assert_eq!(effective_value(&boost), 3);
        assert_eq!(effective_value(&double), 0);
        assert_eq!(effective_value(&steal), 0);
        assert_eq!(effective_value(&shield), 0);
    }

    #[test]
    fn test_apply_power_up() {
        assert_eq!(apply_power_up(10, PowerUpKind::Boost), 13);
        assert_eq!(apply_power_up(10, PowerUpKind::Double), 20);
        assert_eq!(apply_power_up(10, PowerUpKind::Steal), 10);
        assert_eq!(apply_power_up(10, PowerUpKind::Shield), 10);
    }

    #[test]
    fn test_individual_higher_wins() {
        let p = plays(&[
            ("a", Card::regular(Rank::King, Suit::Spades)),
            ("b", Card::regular(Rank::Two, Suit::Hearts)),
        ]);
        assert_eq!(
            resolve_individual(&p, &ids(&["a", "b"])),
            RoundWinner::Player(PlayerId::from("a"))
        );
        // Order of participants does not matter.
        assert_eq!(
            resolve_individual(&p, &ids(&["b", "a"])),
            RoundWinner::Player(PlayerId::from("a"))
        );
    }

    #[test]
    fn test_individual_equal_ranks_tie() {
        let p = plays(&[
            ("a", Card::regular(Rank::Seven, Suit::Spades)),
            ("b", Card::regular(Rank::Seven, Suit::Hearts)),
        ]);
        assert_eq!(resolve_individual(&p, &ids(&["a", "b"])), RoundWinner::Tie);
    }

    #[test]
    fn test_individual_power_ups() {
        // Two zero-valued power-ups tie.
        let p = plays(&[
            ("a", Card::power_up(PowerUpKind::Double)),
            ("b", Card::power_up(PowerUpKind::Shield)),
        ]);
        assert_eq!(resolve_individual(&p, &ids(&["a", "b"])), RoundWinner::Tie);

        // BOOST (3) beats a regular 2, loses to a regular 4.
        let p = plays(&[
            ("a", Card::power_up(PowerUpKind::Boost)),
            ("b", Card::regular(Rank::Two, Suit::Clubs)),
        ]);
        assert_eq!(resolve_individual(&p, &ids(&["a", "b"])), RoundWinner::Player("a".into()));

        let p = plays(&[
            ("a", Card::power_up(PowerUpKind::Boost)),
            ("b", Card::regular(Rank::Four, Suit::Clubs)),
        ]);
        assert_eq!(resolve_individual(&p, &ids(&["a", "b"])), RoundWinner::Player("b".into()));
    }

    #[test]
    fn test_individual_tie_beaten_later() {
        let p = plays(&[
            ("a", Card::regular(Rank::Five, Suit::Spades)),
            ("b", Card::regular(Rank::Five, Suit::Hearts)),
            ("c", Card::regular(Rank::Nine, Suit::Hearts)),
        ]);
        assert_eq!(resolve_individual(&p, &ids(&["a", "b", "c"])), RoundWinner::Player("c".into()));
    }

    #[test]
    fn test_individual_no_plays() {
        let p = PlayedCards::default();
        assert_eq!(resolve_individual(&p, &ids(&["a", "b"])), RoundWinner::Tie);
    }

    #[test]
    fn test_team_sum_wins() {
        let p = plays(&[
            ("p", Card::regular(Rank::Ace, Suit::Spades)),
            ("t", Card::regular(Rank::Five, Suit::Hearts)),
            ("o1", Card::regular(Rank::Nine, Suit::Diamonds)),
            ("o2", Card::regular(Rank::Nine, Suit::Clubs)),
        ]);
        let team1 = ids(&["p", "t"]);
        let team2 = ids(&["o1", "o2"]);

        assert_eq!(team_scores(&p, &team1, &team2), TeamScores { team1: 19, team2: 18 });
        assert_eq!(resolve_teams(&p, &team1, &team2), RoundWinner::Team(Team::One));
    }

    #[test]
    fn test_team_power_ups_count_zero() {
        let p = plays(&[
            ("p", Card::power_up(PowerUpKind::Boost)),
            ("t", Card::regular(Rank::Three, Suit::Hearts)),
            ("o1", Card::regular(Rank::Two, Suit::Diamonds)),
            ("o2", Card::regular(Rank::Two, Suit::Clubs)),
        ]);
        let team1 = ids(&["p", "t"]);
        let team2 = ids(&["o1", "o2"]);
        assert_eq!(team_scores(&p, &team1, &team2), TeamScores { team1: 3, team2: 4 });
        assert_eq!(resolve_teams(&p, &team1, &team2), RoundWinner::Team(Team::Two));
    }

    #[test]
    fn test_team_equal_sums_tie() {
        let p = plays(&[
            ("p", Card::regular(Rank::Ten, Suit::Spades)),
            ("t", Card::regular(Rank::Four, Suit::Hearts)),
            ("o1", Card::regular(Rank::Seven, Suit::Diamonds)),
            ("o2", Card::regular(Rank::Seven, Suit::Clubs)),
        ]);
        assert_eq!(resolve_teams(&p, &ids(&["p", "t"]), &ids(&["o1", "o2"])), RoundWinner::Tie);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let p = plays(&[
            ("a", Card::regular(Rank::Jack, Suit::Spades)),
            ("b", Card::regular(Rank::Queen, Suit::Hearts)),
        ]);
        let participants = Participants::Individual(ids(&["a", "b"]));
        let first = resolve(&p, &participants);
        for _ in 0..10 {
            assert_eq!(resolve(&p, &participants), first);
        }
    }

    #[test]
    fn test_all_played() {
        let participants = Participants::Teams {
            team1: ids(&["p", "t"]),
            team2: ids(&["o1", "o2"]),
        };
        let mut p = plays(&[
            ("p", Card::regular(Rank::Ten, Suit::Spades)),
            ("t", Card::regular(Rank::Four, Suit::Hearts)),
            ("o1", Card::regular(Rank::Seven, Suit::Diamonds)),
        ]);
        assert!(!participants.all_played(&p));
        p.insert("o2".into(), Card::regular(Rank::Two, Suit::Clubs));
        assert!(participants.all_played(&p));
        assert_eq!(participants.len(), 4);
    }

    #[test]
    fn test_winner_helpers() {
        let w = RoundWinner::Team(Team::Two);
        assert!(w.includes(&"x".into(), Some(Team::Two)));
        assert!(!w.includes(&"x".into(), Some(Team::One)));
        assert!(!w.includes(&"x".into(), None));
        assert_eq!(w.token(), Some("team2"));

        let p = RoundWinner::Player("ai1".into());
        assert!(p.includes(&"ai1".into(), None));
        assert_eq!(p.to_string(), "ai1");

        assert!(RoundWinner::Tie.is_tie());
        assert_eq!(RoundWinner::Tie.token(), None);
    }
}
