use std::io::{BufRead, Write};

use color_eyre::{eyre::WrapErr, Result};
use cuno::{
    error::parse_player_count,
    strategy::Strategy,
    turn::TurnAction,
    uno::{GameState, Uno},
};
use tracing::debug;

use crate::{console::Console, render, settings::Settings};

const DEFAULT_NAME: &str = "Player";

/// Asks for the table size and the human's name, then plays one game to the end.
pub fn start<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
    strategy: &impl Strategy,
) -> Result<usize> {
    let answer = console.ask("Enter the number of players (2 to 10): ")?;
    let player_count = parse_player_count(&answer).wrap_err("Invalid number of players!")?;

    let name = console.ask("Enter your name: ")?;
    let name = if name.is_empty() { DEFAULT_NAME } else { name.as_str() };

    let mut game = Uno::with_human(name, player_count, settings.rules, &mut settings.rng())?;

    play(&mut game, console, strategy)
}

/// Runs turns until someone empties their hand and returns the winner's index.
pub fn play<R: BufRead, W: Write>(
    game: &mut Uno,
    console: &mut Console<R, W>,
    strategy: &impl Strategy,
) -> Result<usize> {
    loop {
        if let GameState::GameOver { winner } = game.state() {
            return Ok(winner);
        }

        if let Some(skipped) = game.skip_pending_turn() {
            console.say(format!("Skipping {}'s turn.", game.players()[skipped].name()))?;
            continue;
        }

        let action = if game.get_current_turn_player().is_human() {
            match human_turn(game, console)? {
                Some(action) => action,
                None => continue,
            }
        } else {
            let action = strategy.choose_action(game);
            debug!(
                player = game.get_current_turn_player().name(),
                action = ?action,
                "Computer chose"
            );
            action
        };

        let result = game.play_turn(action)?;
        for line in render::describe(game, &result) {
            console.say(line)?;
        }
    }
}

/// Shows the table to the human and reads their choice. `None` means the
/// answer was not a number and the turn should be asked again.
fn human_turn<R: BufRead, W: Write>(
    game: &Uno,
    console: &mut Console<R, W>,
) -> Result<Option<TurnAction>> {
    let player = game.get_current_turn_player();

    console.say(render::top_card_line(game))?;
    if let Some(chain) = game.get_pending_draw() {
        console.say(format!("PENDING TO DRAW: {} cards!", chain.count))?;
    }
    console.say(format!("{}'s turn.", player.name()))?;
    console.say("Your hand:")?;
    for line in render::hand_listing(player) {
        console.say(line)?;
    }

    let answer = console.ask(&render::turn_prompt(game))?;
    let Ok(slot) = answer.parse::<usize>() else {
        console.say(render::invalid_choice(player))?;
        return Ok(None);
    };

    if slot == 0 {
        return Ok(Some(TurnAction::Draw));
    }

    let color = match player.card_at(slot) {
        Some(card) if card.is_wild() && game.is_playable(card) => Some(console.ask_color()?),
        _ => None,
    };

    Ok(Some(TurnAction::Play { slot, color }))
}
