//! Card choice for synthetic players.

use crate::core::{CardId, GameRng};
use crate::game::Player;

/// Chooses the card an AI player submits this round.
pub trait OpponentPolicy: Send + Sync {
    /// Pick a card from `player`'s hand.
    ///
    /// Returns `None` if the policy has nothing it is willing to play.
    fn choose_card(&self, player: &Player, rng: &mut GameRng) -> Option<CardId>;
}

/// Uniform over the Regular cards in hand. Never plays a power-up.
#[derive(Clone, Debug, Default)]
pub struct RandomRegularPolicy;

impl OpponentPolicy for RandomRegularPolicy {
    fn choose_card(&self, player: &Player, rng: &mut GameRng) -> Option<CardId> {
        let regular: Vec<CardId> = player.hand.regular_cards().map(|c| c.id).collect();
        if regular.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..regular.len());
        Some(regular[idx])
    }
}

/// Uniform over Regular cards, then uniform over power-ups once no Regular
/// card is left.
///
/// With 8 Regular cards and 10 rounds an AI seat runs dry in round 9;
/// this policy lets such a match finish.
#[derive(Clone, Debug, Default)]
pub struct RegularFirstPolicy;

impl OpponentPolicy for RegularFirstPolicy {
    fn choose_card(&self, player: &Player, rng: &mut GameRng) -> Option<CardId> {
        RandomRegularPolicy.choose_card(player, rng).or_else(|| {
            let power_ups: Vec<CardId> = player.hand.power_ups().map(|c| c.id).collect();
            rng.choose(&power_ups).copied()
        })
    }
}
