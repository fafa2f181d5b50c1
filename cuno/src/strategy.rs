//! Move selection for computer-controlled players.

use strum::IntoEnumIterator;

use crate::card::{Card, CardColor};
use crate::turn::TurnAction;
use crate::uno::Uno;

pub trait Strategy {
    /// Picks an action for the player whose turn it is.
    fn choose_action(&self, game: &Uno) -> TurnAction;
}

/// Plays the first legal card in hand order, otherwise draws.
///
/// Drawing during a pending chain takes the whole penalty.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn choose_action(&self, game: &Uno) -> TurnAction {
        let player = game.get_current_turn_player();

        let Some((slot, card)) = player.listing().find(|(_, card)| game.is_playable(card)) else {
            return TurnAction::Draw;
        };

        let color = card
            .is_wild()
            .then(|| Self::choose_color(&player.hand, slot));

        TurnAction::Play { slot, color }
    }
}

impl GreedyStrategy {
    /// Most frequent color among the cards kept after playing `played_slot`.
    /// Ties go to the earlier color in canonical order.
    fn choose_color(hand: &[Card], played_slot: usize) -> CardColor {
        let remaining = hand
            .iter()
            .enumerate()
            .filter(|(index, _)| index + 1 != played_slot)
            .filter_map(|(_, card)| card.color())
            .collect::<Vec<_>>();

        CardColor::iter()
            .rev()
            .max_by_key(|color| remaining.iter().filter(|x| *x == color).count())
            .unwrap_or(CardColor::Red)
    }
}
