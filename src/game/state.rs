//! Match state.
//!
//! `Match` is the whole in-memory game: roster, round counter, the plays of
//! the current round, the round log and the event log. It is owned by a
//! single `MatchEngine` and handed to the presentation layer by reference.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{PlayerId, Team};
use crate::rules::{Participants, PlayedCards, RoundWinner};

use super::events::EventLog;
use super::player::Player;

/// Game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "1v1")]
    OneVsOne,
    #[serde(rename = "2v2")]
    TwoVsTwo,
}

impl GameMode {
    /// Roster size.
    #[must_use]
    pub const fn player_count(self) -> usize {
        match self {
            GameMode::OneVsOne => 2,
            GameMode::TwoVsTwo => 4,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::OneVsOne => "1v1",
            GameMode::TwoVsTwo => "2v2",
        }
    }

    #[must_use]
    pub const fn is_team_mode(self) -> bool {
        matches!(self, GameMode::TwoVsTwo)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1v1" => Ok(GameMode::OneVsOne),
            "2v2" => Ok(GameMode::TwoVsTwo),
            _ => Err(format!("Invalid game mode: {s}")),
        }
    }
}

/// Match lifecycle. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Playing,
    Finished,
}

/// Scored outcome of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub winner: RoundWinner,
    /// Score change per player, in roster order.
    pub deltas: Vec<(PlayerId, i32)>,
}

impl RoundResult {
    /// Score change for one player.
    #[must_use]
    pub fn delta_for(&self, player: &PlayerId) -> Option<i32> {
        self.deltas.iter().find(|(id, _)| id == player).map(|(_, d)| *d)
    }
}

/// Full match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub mode: GameMode,
    pub ranked: bool,
    /// Roster, human first.
    pub players: Vec<Player>,
    /// 1-based; one past `max_rounds` once finished.
    pub current_round: u32,
    pub max_rounds: u32,
    /// Plays of the current round. Cleared when the round advances.
    pub played: PlayedCards,
    pub results: Vector<RoundResult>,
    pub status: MatchStatus,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: u64,
    pub events: EventLog,
}

impl Match {
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    /// The human seat (first non-AI player).
    #[must_use]
    pub fn human(&self) -> Option<&Player> {
        self.players.iter().find(|p| !p.is_ai)
    }

    /// Members of a team, in roster order.
    #[must_use]
    pub fn team_members(&self, team: Team) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.team == Some(team))
            .map(|p| p.id.clone())
            .collect()
    }

    /// Round participants grouped for the resolver.
    #[must_use]
    pub fn participants(&self) -> Participants {
        if self.mode.is_team_mode() {
            Participants::Teams {
                team1: self.team_members(Team::One),
                team2: self.team_members(Team::Two),
            }
        } else {
            Participants::Individual(self.players.iter().map(|p| p.id.clone()).collect())
        }
    }

    /// Has this player played in the current round?
    #[must_use]
    pub fn has_played(&self, id: &PlayerId) -> bool {
        self.played.contains_key(id)
    }

    /// Sum of member scores for a team.
    #[must_use]
    pub fn team_score(&self, team: Team) -> i32 {
        self.players
            .iter()
            .filter(|p| p.team == Some(team))
            .map(|p| p.score)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_basics() {
        assert_eq!(GameMode::OneVsOne.player_count(), 2);
        assert_eq!(GameMode::TwoVsTwo.player_count(), 4);
        assert_eq!("2v2".parse::<GameMode>(), Ok(GameMode::TwoVsTwo));
        assert!("3v3".parse::<GameMode>().is_err());
        assert_eq!(serde_json::to_string(&GameMode::OneVsOne).unwrap(), "\"1v1\"");
        assert!(GameMode::TwoVsTwo.is_team_mode());
        assert!(!GameMode::OneVsOne.is_team_mode());
    }

    #[test]
    fn test_round_result_delta() {
        let result = RoundResult {
            round: 1,
            winner: RoundWinner::Player(PlayerId::human()),
            deltas: vec![(PlayerId::human(), 2), (PlayerId::ai_opponent(), -1)],
        };
        assert_eq!(result.delta_for(&PlayerId::human()), Some(2));
        assert_eq!(result.delta_for(&PlayerId::ai_opponent()), Some(-1));
        assert_eq!(result.delta_for(&PlayerId::ai_teammate()), None);
    }
}
