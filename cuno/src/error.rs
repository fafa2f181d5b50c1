use thiserror::Error;

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players, at least {} are needed", MIN_PLAYERS)]
    NotEnoughPlayers,
    #[error("Too many players, at most {} can play", MAX_PLAYERS)]
    TooManyPlayers,
    #[error("Invalid number of players: {0:?}")]
    InvalidPlayerCount(String),
    #[error("The deck is empty, no more cards can be drawn")]
    DeckExhausted,
    #[error("The game is already over")]
    GameOver,
    #[error("The active player must be skipped before anyone acts")]
    SkipPending,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;

pub fn validate_player_count(count: usize) -> Result<()> {
    if count < MIN_PLAYERS {
        return Err(UnoError::NotEnoughPlayers);
    }
    if count > MAX_PLAYERS {
        return Err(UnoError::TooManyPlayers);
    }
    Ok(())
}

/// Parses a player count typed by a person and checks it against the table limits.
pub fn parse_player_count(input: &str) -> Result<usize> {
    let count = input
        .trim()
        .parse::<usize>()
        .map_err(|_| UnoError::InvalidPlayerCount(input.trim().to_string()))?;
    validate_player_count(count)?;
    Ok(count)
}
