use cuno::{
    player::Player,
    turn::TurnActionResult,
    uno::{PlayTurnResult, Uno},
};

pub fn top_card_line(game: &Uno) -> String {
    match game.get_forced_color() {
        Some(color) => format!("Top card: {} (color: {color})", game.get_top_card()),
        None => format!("Top card: {}", game.get_top_card()),
    }
}

pub fn hand_listing(player: &Player) -> Vec<String> {
    player
        .listing()
        .map(|(slot, card)| format!("{slot}. {card}"))
        .collect()
}

pub fn turn_prompt(game: &Uno) -> String {
    match game.get_pending_draw() {
        Some(chain) => {
            let kind = chain.kind.card_kind();
            format!(
                "You must play a {kind} card or draw {} cards.\nEnter the number of a {kind} card to play, or 0 to draw: ",
                chain.count
            )
        }
        None => "Enter the card number to play or 0 to draw a card: ".to_string(),
    }
}

pub fn invalid_choice(player: &Player) -> String {
    format!(
        "Invalid move! Choose a number between 0 and {}.",
        player.cards_count()
    )
}

/// Lines announcing what happened during a turn.
pub fn describe(game: &Uno, result: &PlayTurnResult) -> Vec<String> {
    let player = &game.players()[result.player];
    let name = player.name();
    let mut lines = Vec::new();

    let summary = match &result.turn_action_result {
        TurnActionResult::Neutral(card) | TurnActionResult::Skip(card) => {
            format!("{name} played {card}.")
        }
        TurnActionResult::Reverse(card) => {
            format!("{name} played {card}. Play direction is reversed.")
        }
        TurnActionResult::DrawChain(card, count) => {
            format!("{name} played {card}. {count} cards are waiting to be drawn.")
        }
        TurnActionResult::Wild(color) => format!("{name} played Wild and chose {color}."),
        TurnActionResult::WildDrawFour(color, count) => format!(
            "{name} played Wild Draw Four and chose {color}. {count} cards are waiting to be drawn."
        ),
        TurnActionResult::SelfDraw => match player.hand.last() {
            Some(card) if player.is_human() => format!("{name} drew {card}."),
            _ => format!("{name} drew a card."),
        },
        TurnActionResult::PenaltyDrawn(count) => format!("{name} drew {count} cards."),
        TurnActionResult::SlotOutOfRange => invalid_choice(player),
        TurnActionResult::IllegalCard(card) => match game.get_pending_draw() {
            Some(chain) => format!(
                "Invalid move! You must play a {} card or draw.",
                chain.kind.card_kind()
            ),
            None => format!("Invalid move! {card} doesn't match the top card."),
        },
        TurnActionResult::ColorRequired => {
            "Invalid move! A color must be chosen for a wild card.".to_string()
        }
    };
    lines.push(summary);

    if let Some(skipped) = result.skipped {
        lines.push(format!("Skipping {}'s turn.", game.players()[skipped].name()));
    }

    if result.won {
        lines.push(format!("{name} wins!"));
    }

    lines
}
