use crate::card::{Card, CardColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Draw one card and pass, or take the whole pending-draw penalty.
    Draw,
    /// Play the card at a 1-based hand slot. `color` is only read for wilds.
    Play { slot: usize, color: Option<CardColor> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral(Card),
    Skip(Card),
    Reverse(Card),
    /// A draw card started or extended a chain; holds the pending total.
    DrawChain(Card, usize),
    Wild(CardColor),
    WildDrawFour(CardColor, usize),
    SelfDraw,
    /// The pending penalty was taken; holds the number of cards drawn.
    PenaltyDrawn(usize),
    SlotOutOfRange,
    IllegalCard(Card),
    ColorRequired,
}

impl TurnActionResult {
    /// Rejected actions leave the game untouched and the same player to act.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            TurnActionResult::SlotOutOfRange
                | TurnActionResult::IllegalCard(_)
                | TurnActionResult::ColorRequired
        )
    }
}
