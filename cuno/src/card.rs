use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

/// Flat discriminator over every card, used where only the card's role matters.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum CardKind {
    Number,
    Skip,
    Reverse,
    #[strum(serialize = "Draw Two")]
    DrawTwo,
    Wild,
    #[strum(serialize = "Wild Draw Four")]
    WildDrawFour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Colored(_, ColoredCard::Number(_)) => CardKind::Number,
            Card::Colored(_, ColoredCard::Skip) => CardKind::Skip,
            Card::Colored(_, ColoredCard::Reverse) => CardKind::Reverse,
            Card::Colored(_, ColoredCard::DrawTwo) => CardKind::DrawTwo,
            Card::Wild => CardKind::Wild,
            Card::WildDrawFour => CardKind::WildDrawFour,
        }
    }

    /// `None` for wild cards.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    /// `None` for everything but number cards.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Card::Colored(_, ColoredCard::Number(number)) => Some(*number),
            _ => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDrawFour)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => {
                write!(f, "{} {}", color, {
                    match card {
                        ColoredCard::Number(number) => number.to_string(),
                        ColoredCard::Skip => "Skip".to_string(),
                        ColoredCard::Reverse => "Reverse".to_string(),
                        ColoredCard::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}
