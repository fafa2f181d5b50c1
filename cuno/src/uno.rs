use rand::Rng;
use tracing::{debug, info};

use crate::card::{Card, CardColor, ColoredCard};
use crate::config::{ForcedColorAfterPenalty, RuleConfig};
use crate::constants::STARTING_HAND_SIZE;
use crate::deck::Deck;
use crate::error::{validate_player_count, Result, UnoError};
use crate::player::{Controller, Player};
use crate::rules::{can_play, DrawKind, PendingDraw};
use crate::turn::{TurnAction, TurnActionResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingInput { player: usize },
    GameOver { winner: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    /// Index of the player who acted.
    pub player: usize,
    pub turn_action_result: TurnActionResult,
    /// Player passed over while handing the turn on, if any.
    pub skipped: Option<usize>,
    pub won: bool,
}

#[derive(Debug)]
pub struct Uno {
    deck: Deck,
    players: Vec<Player>,
    top_card: Card,
    current_turn_player_index: usize,
    player_order_reversed: bool,
    skip_next_player: bool,
    pending_draw: Option<PendingDraw>,
    forced_color: Option<CardColor>,
    winner: Option<usize>,
    rules: RuleConfig,
}

impl Uno {
    /// Seats one human named `human_name` and fills the table with computer players.
    pub fn with_human<R: Rng + ?Sized>(
        human_name: &str,
        player_count: usize,
        rules: RuleConfig,
        rng: &mut R,
    ) -> Result<Self> {
        validate_player_count(player_count)?;

        let seats = (0..player_count)
            .map(|seat| {
                if seat == 0 {
                    (human_name.to_string(), Controller::Human)
                } else {
                    (format!("AI {seat}"), Controller::Computer)
                }
            })
            .collect();

        Self::new(seats, rules, rng)
    }

    pub fn new<R: Rng + ?Sized>(
        seats: Vec<(String, Controller)>,
        rules: RuleConfig,
        rng: &mut R,
    ) -> Result<Self> {
        validate_player_count(seats.len())?;

        let mut deck = Deck::shuffled(rng);
        let mut players = seats
            .into_iter()
            .map(|(name, controller)| {
                Player::new(name, controller, Vec::with_capacity(STARTING_HAND_SIZE))
            })
            .collect::<Vec<_>>();

        for _ in 0..STARTING_HAND_SIZE {
            for player in players.iter_mut() {
                player.add_card(deck.draw()?);
            }
        }

        let top_card = deck.draw_starting_card()?;

        let mut uno = Uno {
            deck,
            players,
            top_card,
            current_turn_player_index: 0,
            player_order_reversed: false,
            skip_next_player: false,
            pending_draw: None,
            forced_color: None,
            winner: None,
            rules,
        };
        uno.apply_starting_card();

        info!(
            players = uno.players.len(),
            top_card = %uno.top_card,
            "Game started"
        );

        Ok(uno)
    }

    /// Builds a game from an exact table layout. Nothing is shuffled and the top
    /// card has no opening effect.
    pub fn from_parts(
        players: Vec<Player>,
        deck: Deck,
        top_card: Card,
        rules: RuleConfig,
    ) -> Result<Self> {
        validate_player_count(players.len())?;

        Ok(Uno {
            deck,
            players,
            top_card,
            current_turn_player_index: 0,
            player_order_reversed: false,
            skip_next_player: false,
            pending_draw: None,
            forced_color: None,
            winner: None,
            rules,
        })
    }

    /// Passes over the active player if a skip is waiting for them.
    pub fn skip_pending_turn(&mut self) -> Option<usize> {
        if self.winner.is_some() || !self.skip_next_player {
            return None;
        }

        self.skip_next_player = false;
        let skipped = self.current_turn_player_index;
        debug!(player = self.players[skipped].name(), "Turn skipped");
        self.move_turn_n_players_ahead(1);

        Some(skipped)
    }

    pub fn play_turn(&mut self, turn_action: TurnAction) -> Result<PlayTurnResult> {
        if self.winner.is_some() {
            return Err(UnoError::GameOver);
        }
        if self.skip_next_player {
            return Err(UnoError::SkipPending);
        }

        let player_index = self.current_turn_player_index;

        let turn_action_result = match turn_action {
            TurnAction::Draw => self.perform_draw()?,
            TurnAction::Play { slot, color } => self.perform_play(slot, color),
        };

        if turn_action_result.is_rejected() {
            debug!(
                player = self.players[player_index].name(),
                result = ?turn_action_result,
                "Turn action rejected"
            );
            return Ok(PlayTurnResult {
                player: player_index,
                turn_action_result,
                skipped: None,
                won: false,
            });
        }

        let won = self.players[player_index].cards_count() == 0;
        let skipped = if won {
            self.winner = Some(player_index);
            info!(winner = self.players[player_index].name(), "Game over");
            None
        } else {
            self.advance_turn()
        };

        Ok(PlayTurnResult {
            player: player_index,
            turn_action_result,
            skipped,
            won,
        })
    }

    pub fn state(&self) -> GameState {
        match self.winner {
            Some(winner) => GameState::GameOver { winner },
            None => GameState::AwaitingInput {
                player: self.current_turn_player_index,
            },
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_current_turn_player_index(&self) -> usize {
        self.current_turn_player_index
    }

    pub fn get_current_turn_player(&self) -> &Player {
        &self.players[self.current_turn_player_index]
    }

    pub fn get_next_turn_player_index(&self) -> usize {
        self.nth_turn_player_index(1)
    }

    pub fn get_top_card(&self) -> &Card {
        &self.top_card
    }

    pub fn get_forced_color(&self) -> Option<CardColor> {
        self.forced_color
    }

    pub fn get_pending_draw(&self) -> Option<PendingDraw> {
        self.pending_draw
    }

    pub fn is_order_reversed(&self) -> bool {
        self.player_order_reversed
    }

    pub fn is_skip_pending(&self) -> bool {
        self.skip_next_player
    }

    pub fn deck_count(&self) -> usize {
        self.deck.cards_count()
    }

    /// Whether `card` may go on the discard pile right now.
    pub fn is_playable(&self, card: &Card) -> bool {
        can_play(&self.top_card, card, self.forced_color, self.pending_draw)
    }

    fn apply_starting_card(&mut self) {
        match self.top_card {
            Card::Colored(_, ColoredCard::DrawTwo) => {
                self.pending_draw = Some(PendingDraw::start(DrawKind::DrawTwo));
            }
            Card::Colored(_, ColoredCard::Skip) => self.skip_next_player = true,
            Card::Colored(_, ColoredCard::Reverse) => {
                self.player_order_reversed = !self.player_order_reversed;
            }
            _ => {}
        }
    }

    fn perform_draw(&mut self) -> Result<TurnActionResult> {
        let player_index = self.current_turn_player_index;

        match self.pending_draw.take() {
            Some(chain) if chain.count > 0 => {
                self.draw_cards_to_player(player_index, chain.count)?;
                if self.rules.forced_color_after_penalty == ForcedColorAfterPenalty::Clear {
                    self.forced_color = None;
                }
                debug!(
                    player = self.players[player_index].name(),
                    count = chain.count,
                    "Pending draw taken"
                );
                Ok(TurnActionResult::PenaltyDrawn(chain.count))
            }
            _ => {
                self.draw_cards_to_player(player_index, 1)?;
                debug!(player = self.players[player_index].name(), "Drew a card");
                Ok(TurnActionResult::SelfDraw)
            }
        }
    }

    fn perform_play(&mut self, slot: usize, color: Option<CardColor>) -> TurnActionResult {
        let player_index = self.current_turn_player_index;

        let Some(card) = self.players[player_index].card_at(slot).copied() else {
            return TurnActionResult::SlotOutOfRange;
        };

        if !self.is_playable(&card) {
            return TurnActionResult::IllegalCard(card);
        }

        let forced_color = match (card.is_wild(), color) {
            (true, None) => return TurnActionResult::ColorRequired,
            (true, Some(color)) => Some(color),
            (false, _) => None,
        };

        self.players[player_index].remove_card(slot);
        self.top_card = card;
        self.forced_color = forced_color;
        debug!(
            player = self.players[player_index].name(),
            card = %card,
            "Card played"
        );

        match (card, forced_color) {
            (Card::Colored(_, ColoredCard::Number(_)), _) => TurnActionResult::Neutral(card),
            (Card::Colored(_, ColoredCard::Skip), _) => {
                self.skip_next_player = true;
                TurnActionResult::Skip(card)
            }
            (Card::Colored(_, ColoredCard::Reverse), _) => {
                self.player_order_reversed = !self.player_order_reversed;
                TurnActionResult::Reverse(card)
            }
            (Card::Colored(_, ColoredCard::DrawTwo), _) => {
                TurnActionResult::DrawChain(card, self.push_draw_chain(DrawKind::DrawTwo))
            }
            (Card::Wild, Some(color)) => TurnActionResult::Wild(color),
            (Card::WildDrawFour, Some(color)) => {
                TurnActionResult::WildDrawFour(color, self.push_draw_chain(DrawKind::WildDrawFour))
            }
            (Card::Wild | Card::WildDrawFour, None) => unreachable!(),
        }
    }

    /// Starts a chain of `kind` or extends the running one, returning the pending total.
    fn push_draw_chain(&mut self, kind: DrawKind) -> usize {
        let chain = match self.pending_draw {
            Some(mut chain) if chain.kind == kind && chain.count > 0 => {
                chain.extend();
                chain
            }
            _ => PendingDraw::start(kind),
        };
        self.pending_draw = Some(chain);
        debug!(kind = ?kind, count = chain.count, "Draw chain pending");
        chain.count
    }

    fn draw_cards_to_player(&mut self, player_index: usize, count: usize) -> Result<()> {
        let cards = self.deck.draw_cards(count)?;

        let player = &mut self.players[player_index];
        for card in cards {
            player.add_card(card);
        }

        Ok(())
    }

    /// Hands the turn on, passing over a player with a pending skip.
    fn advance_turn(&mut self) -> Option<usize> {
        self.move_turn_n_players_ahead(1);

        let mut skipped = None;
        while self.skip_next_player {
            self.skip_next_player = false;
            skipped = Some(self.current_turn_player_index);
            debug!(
                player = self.players[self.current_turn_player_index].name(),
                "Turn skipped"
            );
            self.move_turn_n_players_ahead(1);
        }

        skipped
    }

    fn nth_turn_player_index(&self, n: usize) -> usize {
        let len = self.players.len();
        let n = n % len;
        if self.player_order_reversed {
            (self.current_turn_player_index + len - n) % len
        } else {
            (self.current_turn_player_index + n) % len
        }
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        for _ in 0..n {
            self.current_turn_player_index = if self.player_order_reversed {
                if self.current_turn_player_index == 0 {
                    self.players.len() - 1
                } else {
                    self.current_turn_player_index - 1
                }
            } else if self.current_turn_player_index == self.players.len() - 1 {
                0
            } else {
                self.current_turn_player_index + 1
            };
        }
    }
}
