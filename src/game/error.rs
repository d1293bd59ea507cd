use thiserror::Error;

use crate::cards::DealError;
use crate::core::{CardId, PlayerId};

/// Match engine errors.
///
/// Every variant is returned before any state is touched.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("player {0} is not in this match")]
    PlayerNotFound(PlayerId),

    #[error("player {player} already played in round {round}")]
    AlreadyPlayed { player: PlayerId, round: u32 },

    #[error("{card} is not in the hand of player {player}")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("round {round} is incomplete: {played} of {expected} cards played")]
    RoundIncomplete { round: u32, played: usize, expected: usize },

    #[error("the match is already finished")]
    MatchFinished,

    #[error("the match is still in progress")]
    MatchInProgress,

    #[error("roster needs {needed} regular cards, the deck holds {available}")]
    InsufficientCards { needed: usize, available: usize },

    #[error(transparent)]
    Deal(#[from] DealError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}
