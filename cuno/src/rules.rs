use crate::{
    card::{Card, CardColor, CardKind, ColoredCard},
    constants::{DRAW_TWO_PENALTY, WILD_DRAW_FOUR_PENALTY},
};

/// The card that opened a pending-draw chain. Only the same kind continues it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    DrawTwo,
    WildDrawFour,
}

impl DrawKind {
    pub fn penalty(&self) -> usize {
        match self {
            DrawKind::DrawTwo => DRAW_TWO_PENALTY,
            DrawKind::WildDrawFour => WILD_DRAW_FOUR_PENALTY,
        }
    }

    pub fn card_kind(&self) -> CardKind {
        match self {
            DrawKind::DrawTwo => CardKind::DrawTwo,
            DrawKind::WildDrawFour => CardKind::WildDrawFour,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDraw {
    pub kind: DrawKind,
    pub count: usize,
}

impl PendingDraw {
    pub fn start(kind: DrawKind) -> Self {
        Self {
            kind,
            count: kind.penalty(),
        }
    }

    pub fn extend(&mut self) {
        self.count += self.kind.penalty();
    }
}

/// Whether `candidate` may be played on `top`.
///
/// While a chain is pending only a card of the chain's kind is legal. Otherwise
/// wilds are always legal, a wild on top demands the forced color (any color when
/// none is forced), and colored cards match by color, by rank, or by action kind.
pub fn can_play(
    top: &Card,
    candidate: &Card,
    forced_color: Option<CardColor>,
    pending: Option<PendingDraw>,
) -> bool {
    if let Some(chain) = pending.filter(|chain| chain.count > 0) {
        return candidate.kind() == chain.kind.card_kind();
    }

    match (top, candidate) {
        (_, Card::Wild | Card::WildDrawFour) => true,
        (Card::Wild | Card::WildDrawFour, Card::Colored(color, _)) => {
            forced_color.map_or(true, |forced| forced == *color)
        }
        (Card::Colored(top_color, top_card), Card::Colored(color, card)) => {
            if top_color == color {
                return true;
            }
            match (top_card, card) {
                (ColoredCard::Number(top_number), ColoredCard::Number(number)) => {
                    top_number == number
                }
                (ColoredCard::Skip, ColoredCard::Skip)
                | (ColoredCard::Reverse, ColoredCard::Reverse)
                | (ColoredCard::DrawTwo, ColoredCard::DrawTwo) => true,
                _ => false,
            }
        }
    }
}
