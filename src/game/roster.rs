//! Roster construction and synthetic opponent names.
//!
//! - 1v1: the human plus one AI (`ai1`).
//! - 2v2: the human and an AI teammate on team 1, two AI opponents on team 2.
//!
//! Each AI seat carries a reference MMR used only to pick a name pool.

use crate::core::{GameRng, PlayerId, Team};

use super::state::GameMode;

/// Names for ordinary synthetic opponents.
pub const REGULAR_NAMES: [&str; 15] = [
    "CyberNinja", "QuantumBot", "DataMancer", "CodeBreaker", "SyntaxKing",
    "ByteBeast", "PixelPilot", "LogicLord", "CipherSage", "BinaryBard",
    "TechTitan", "DigitalDuke", "NetNomad", "CryptoChamp", "VirtualViper",
];

/// Names for synthetic opponents above the high-ranked threshold.
pub const HIGH_RANKED_NAMES: [&str; 15] = [
    "AlgoMaster", "QuantumQueen", "CodeColossus", "DataDeity", "SyntaxSovereign",
    "ByteEmperor", "PixelPharaoh", "LogicLegend", "CipherCzar", "BinaryBoss",
    "TechTyrant", "DigitalDynasty", "NetNinja", "CryptoKing", "VirtualVanguard",
];

/// One seat before hands are dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub id: PlayerId,
    pub is_ai: bool,
    pub team: Option<Team>,
    /// Reference MMR for AI naming. `None` for the human.
    pub reference_mmr: Option<u32>,
}

impl Seat {
    fn human(team: Option<Team>) -> Self {
        Self {
            id: PlayerId::human(),
            is_ai: false,
            team,
            reference_mmr: None,
        }
    }

    fn ai(id: PlayerId, team: Option<Team>, reference_mmr: u32) -> Self {
        Self {
            id,
            is_ai: true,
            team,
            reference_mmr: Some(reference_mmr),
        }
    }
}

/// Seats for a mode, human first.
#[must_use]
pub fn seats(mode: GameMode) -> Vec<Seat> {
    match mode {
        GameMode::OneVsOne => vec![
            Seat::human(None),
            Seat::ai(PlayerId::ai_opponent(), None, 600),
        ],
        GameMode::TwoVsTwo => vec![
            Seat::human(Some(Team::One)),
            Seat::ai(PlayerId::ai_teammate(), Some(Team::One), 500),
            Seat::ai(PlayerId::ai_team_opponent(1), Some(Team::Two), 550),
            Seat::ai(PlayerId::ai_team_opponent(2), Some(Team::Two), 600),
        ],
    }
}

/// Pick a display name for an AI with the given reference MMR.
#[must_use]
pub fn ai_name(reference_mmr: u32, high_ranked_threshold: u32, rng: &mut GameRng) -> &'static str {
    let pool: &[&'static str] = if reference_mmr > high_ranked_threshold {
        &HIGH_RANKED_NAMES
    } else {
        &REGULAR_NAMES
    };
    pool[rng.gen_range_usize(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_vs_one_seats() {
        let seats = seats(GameMode::OneVsOne);
        assert_eq!(seats.len(), 2);
        assert_eq!(seats[0].id, PlayerId::human());
        assert!(!seats[0].is_ai);
        assert_eq!(seats[1].id.as_str(), "ai1");
        assert!(seats.iter().all(|s| s.team.is_none()));
    }

    #[test]
    fn test_two_vs_two_seats() {
        let seats = seats(GameMode::TwoVsTwo);
        let ids: Vec<_> = seats.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["player", "ai_teammate", "ai_opponent_1", "ai_opponent_2"]);

        let teams: Vec<_> = seats.iter().map(|s| s.team).collect();
        assert_eq!(teams, vec![Some(Team::One), Some(Team::One), Some(Team::Two), Some(Team::Two)]);
    }

    #[test]
    fn test_name_pools() {
        let mut rng = GameRng::new(11);
        for _ in 0..50 {
            assert!(REGULAR_NAMES.contains(&ai_name(600, 600, &mut rng)));
            assert!(HIGH_RANKED_NAMES.contains(&ai_name(601, 600, &mut rng)));
        }
    }
}
