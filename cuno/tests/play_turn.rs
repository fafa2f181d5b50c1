use cuno::{
    card::{Card, CardColor, ColoredCard},
    config::{ForcedColorAfterPenalty, RuleConfig},
    deck::Deck,
    error::UnoError,
    player::{Controller, Player},
    rules::{DrawKind, PendingDraw},
    turn::{TurnAction, TurnActionResult},
    uno::{GameState, PlayTurnResult, Uno},
};
use rand::{rngs::StdRng, SeedableRng};

fn number(color: CardColor, number: u8) -> Card {
    Card::Colored(color, ColoredCard::Number(number))
}

fn action(color: CardColor, card: ColoredCard) -> Card {
    Card::Colored(color, card)
}

fn create_table_with_rules(hands: Vec<Vec<Card>>, top_card: Card, rules: RuleConfig) -> Uno {
    let players = hands
        .into_iter()
        .enumerate()
        .map(|(i, hand)| Player::new(format!("Player {}", i + 1), Controller::Computer, hand))
        .collect();

    Uno::from_parts(players, Deck::new(), top_card, rules).unwrap()
}

fn create_table(hands: Vec<Vec<Card>>, top_card: Card) -> Uno {
    create_table_with_rules(hands, top_card, RuleConfig::default())
}

fn filler() -> Vec<Card> {
    vec![number(CardColor::Green, 8), number(CardColor::Green, 9)]
}

fn play(slot: usize) -> TurnAction {
    TurnAction::Play { slot, color: None }
}

#[test]
fn play_turn_works_if_card_is_legal() {
    let mut uno = create_table(
        vec![
            vec![number(CardColor::Red, 1), number(CardColor::Blue, 2)],
            filler(),
        ],
        number(CardColor::Red, 5),
    );

    let turn_action_result = uno.play_turn(play(1)).unwrap();

    assert_eq!(
        turn_action_result,
        PlayTurnResult {
            player: 0,
            turn_action_result: TurnActionResult::Neutral(number(CardColor::Red, 1)),
            skipped: None,
            won: false
        }
    );
    assert_eq!(uno.get_top_card(), &number(CardColor::Red, 1));
    assert_eq!(uno.get_player(0).unwrap().hand, vec![number(CardColor::Blue, 2)]);
    assert_eq!(uno.get_current_turn_player_index(), 1);
}

#[test]
fn play_turn_rejects_slot_out_of_range() {
    let hand = vec![number(CardColor::Red, 1), number(CardColor::Blue, 2)];
    let mut uno = create_table(vec![hand.clone(), filler()], number(CardColor::Red, 5));

    for slot in [3, 99] {
        let result = uno.play_turn(play(slot)).unwrap();

        assert_eq!(result.turn_action_result, TurnActionResult::SlotOutOfRange);
        assert!(!result.won);
        assert_eq!(uno.get_top_card(), &number(CardColor::Red, 5));
        assert_eq!(uno.get_player(0).unwrap().hand, hand);
        assert_eq!(uno.get_current_turn_player_index(), 0);
    }
}

#[test]
fn play_turn_rejects_illegal_card() {
    let hand = vec![number(CardColor::Blue, 2)];
    let mut uno = create_table(vec![hand.clone(), filler()], number(CardColor::Red, 5));

    let result = uno.play_turn(play(1)).unwrap();

    assert_eq!(
        result.turn_action_result,
        TurnActionResult::IllegalCard(number(CardColor::Blue, 2))
    );
    assert_eq!(uno.get_top_card(), &number(CardColor::Red, 5));
    assert_eq!(uno.get_player(0).unwrap().hand, hand);
    assert_eq!(uno.get_current_turn_player_index(), 0);
}

#[test]
fn play_turn_skips_player_exactly_once() {
    let mut uno = create_table(
        vec![
            vec![action(CardColor::Red, ColoredCard::Skip), number(CardColor::Blue, 1)],
            filler(),
            vec![number(CardColor::Red, 3), number(CardColor::Red, 4)],
            filler(),
        ],
        number(CardColor::Red, 5),
    );

    let result = uno.play_turn(play(1)).unwrap();

    assert_eq!(
        result,
        PlayTurnResult {
            player: 0,
            turn_action_result: TurnActionResult::Skip(action(CardColor::Red, ColoredCard::Skip)),
            skipped: Some(1),
            won: false
        }
    );
    assert_eq!(uno.get_current_turn_player_index(), 2);
    assert!(!uno.is_skip_pending());

    let result = uno.play_turn(play(1)).unwrap();

    assert_eq!(result.player, 2);
    assert_eq!(result.skipped, None);
    assert_eq!(uno.get_current_turn_player_index(), 3);
}

#[test]
fn skip_with_two_players_returns_turn() {
    let mut uno = create_table(
        vec![
            vec![action(CardColor::Red, ColoredCard::Skip), number(CardColor::Blue, 1)],
            filler(),
        ],
        number(CardColor::Red, 5),
    );

    let result = uno.play_turn(play(1)).unwrap();

    assert_eq!(result.skipped, Some(1));
    assert_eq!(uno.get_current_turn_player_index(), 0);
}

#[test]
fn play_turn_performs_reverse_properly() {
    let mut uno = create_table(
        vec![
            vec![
                action(CardColor::Green, ColoredCard::Reverse),
                number(CardColor::Blue, 1),
            ],
            filler(),
            filler(),
            vec![number(CardColor::Green, 1), number(CardColor::Green, 2)],
        ],
        number(CardColor::Green, 5),
    );

    let result = uno.play_turn(play(1)).unwrap();

    assert_eq!(
        result.turn_action_result,
        TurnActionResult::Reverse(action(CardColor::Green, ColoredCard::Reverse))
    );
    assert!(uno.is_order_reversed());
    assert_eq!(uno.get_current_turn_player_index(), 3);
    assert_eq!(uno.get_next_turn_player_index(), 2);

    uno.play_turn(play(1)).unwrap();
    assert_eq!(uno.get_current_turn_player_index(), 2);
}

#[test]
fn declining_draw_two_chain_draws_pending_cards() {
    let mut uno = create_table(
        vec![
            vec![
                action(CardColor::Red, ColoredCard::DrawTwo),
                number(CardColor::Blue, 1),
            ],
            vec![number(CardColor::Red, 1), number(CardColor::Yellow, 2)],
            filler(),
        ],
        number(CardColor::Red, 5),
    );

    let result = uno.play_turn(play(1)).unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::DrawChain(action(CardColor::Red, ColoredCard::DrawTwo), 2)
    );
    assert_eq!(
        uno.get_pending_draw(),
        Some(PendingDraw {
            kind: DrawKind::DrawTwo,
            count: 2
        })
    );

    // A matching color is not enough while the chain is pending.
    let result = uno.play_turn(play(1)).unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::IllegalCard(number(CardColor::Red, 1))
    );

    let deck_before = uno.deck_count();
    let result = uno.play_turn(TurnAction::Draw).unwrap();

    assert_eq!(
        result,
        PlayTurnResult {
            player: 1,
            turn_action_result: TurnActionResult::PenaltyDrawn(2),
            skipped: None,
            won: false
        }
    );
    assert_eq!(uno.get_player(1).unwrap().cards_count(), 4);
    assert_eq!(uno.deck_count(), deck_before - 2);
    assert_eq!(uno.get_pending_draw(), None);
    assert_eq!(uno.get_current_turn_player_index(), 2);
}

#[test]
fn draw_two_chain_accumulates() {
    let mut uno = create_table(
        vec![
            vec![
                action(CardColor::Red, ColoredCard::DrawTwo),
                number(CardColor::Blue, 1),
            ],
            vec![
                number(CardColor::Red, 1),
                action(CardColor::Blue, ColoredCard::DrawTwo),
            ],
            filler(),
        ],
        number(CardColor::Red, 5),
    );

    uno.play_turn(play(1)).unwrap();
    let result = uno.play_turn(play(2)).unwrap();

    assert_eq!(
        result.turn_action_result,
        TurnActionResult::DrawChain(action(CardColor::Blue, ColoredCard::DrawTwo), 4)
    );

    let result = uno.play_turn(TurnAction::Draw).unwrap();
    assert_eq!(result.turn_action_result, TurnActionResult::PenaltyDrawn(4));
    assert_eq!(uno.get_player(2).unwrap().cards_count(), 6);
}

#[test]
fn wild_requires_color_and_forces_it() {
    let mut uno = create_table(
        vec![
            vec![Card::Wild, number(CardColor::Blue, 1)],
            vec![number(CardColor::Red, 5), number(CardColor::Yellow, 2)],
        ],
        number(CardColor::Red, 5),
    );

    let result = uno.play_turn(play(1)).unwrap();
    assert_eq!(result.turn_action_result, TurnActionResult::ColorRequired);
    assert_eq!(uno.get_player(0).unwrap().cards_count(), 2);

    let result = uno
        .play_turn(TurnAction::Play {
            slot: 1,
            color: Some(CardColor::Yellow),
        })
        .unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::Wild(CardColor::Yellow)
    );
    assert_eq!(uno.get_top_card(), &Card::Wild);
    assert_eq!(uno.get_forced_color(), Some(CardColor::Yellow));

    // Red 5 matched the old top card but not the forced color.
    let result = uno.play_turn(play(1)).unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::IllegalCard(number(CardColor::Red, 5))
    );

    let result = uno.play_turn(play(2)).unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::Neutral(number(CardColor::Yellow, 2))
    );
    assert_eq!(uno.get_forced_color(), None);
}

#[test]
fn declining_wild_draw_four_keeps_forced_color_by_default() {
    let mut uno = create_table(
        vec![
            vec![Card::WildDrawFour, number(CardColor::Blue, 1)],
            vec![number(CardColor::Red, 5), number(CardColor::Yellow, 2)],
        ],
        number(CardColor::Red, 5),
    );

    let result = uno
        .play_turn(TurnAction::Play {
            slot: 1,
            color: Some(CardColor::Blue),
        })
        .unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::WildDrawFour(CardColor::Blue, 4)
    );

    let result = uno.play_turn(TurnAction::Draw).unwrap();
    assert_eq!(result.turn_action_result, TurnActionResult::PenaltyDrawn(4));
    assert_eq!(uno.get_player(1).unwrap().cards_count(), 6);
    assert_eq!(uno.get_forced_color(), Some(CardColor::Blue));
    assert_eq!(uno.get_current_turn_player_index(), 0);

    let result = uno.play_turn(play(1)).unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::Neutral(number(CardColor::Blue, 1))
    );
}

#[test]
fn declining_wild_draw_four_can_clear_forced_color() {
    let rules = RuleConfig {
        forced_color_after_penalty: ForcedColorAfterPenalty::Clear,
    };
    let mut uno = create_table_with_rules(
        vec![
            vec![Card::WildDrawFour, number(CardColor::Green, 1)],
            filler(),
        ],
        number(CardColor::Red, 5),
        rules,
    );

    uno.play_turn(TurnAction::Play {
        slot: 1,
        color: Some(CardColor::Blue),
    })
    .unwrap();
    uno.play_turn(TurnAction::Draw).unwrap();

    assert_eq!(uno.get_forced_color(), None);
    assert!(uno.is_playable(&number(CardColor::Green, 1)));
}

#[test]
fn wild_draw_four_chain_continues_with_wild_draw_four_only() {
    let mut uno = create_table(
        vec![
            vec![Card::WildDrawFour, number(CardColor::Blue, 1)],
            vec![Card::Wild, Card::WildDrawFour, number(CardColor::Blue, 2)],
            filler(),
        ],
        number(CardColor::Red, 5),
    );

    uno.play_turn(TurnAction::Play {
        slot: 1,
        color: Some(CardColor::Blue),
    })
    .unwrap();

    let result = uno
        .play_turn(TurnAction::Play {
            slot: 1,
            color: Some(CardColor::Green),
        })
        .unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::IllegalCard(Card::Wild)
    );

    let result = uno.play_turn(play(3)).unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::IllegalCard(number(CardColor::Blue, 2))
    );

    let result = uno
        .play_turn(TurnAction::Play {
            slot: 2,
            color: Some(CardColor::Green),
        })
        .unwrap();
    assert_eq!(
        result.turn_action_result,
        TurnActionResult::WildDrawFour(CardColor::Green, 8)
    );
    assert_eq!(uno.get_forced_color(), Some(CardColor::Green));

    let result = uno.play_turn(TurnAction::Draw).unwrap();
    assert_eq!(result.turn_action_result, TurnActionResult::PenaltyDrawn(8));
    assert_eq!(uno.get_player(2).unwrap().cards_count(), 10);
}

#[test]
fn drawing_without_chain_draws_one_and_passes() {
    let mut uno = create_table(
        vec![vec![number(CardColor::Blue, 1)], filler()],
        number(CardColor::Red, 5),
    );

    let result = uno.play_turn(TurnAction::Draw).unwrap();

    assert_eq!(result.turn_action_result, TurnActionResult::SelfDraw);
    assert_eq!(uno.get_player(0).unwrap().cards_count(), 2);
    assert_eq!(uno.get_current_turn_player_index(), 1);
}

#[test]
fn drawing_from_empty_deck_is_fatal() {
    let players = vec![
        Player::new(
            "Player 1".to_string(),
            Controller::Computer,
            vec![number(CardColor::Blue, 1)],
        ),
        Player::new("Player 2".to_string(), Controller::Computer, filler()),
    ];
    let mut uno = Uno::from_parts(
        players,
        Deck::from_cards(Vec::new()),
        number(CardColor::Red, 5),
        RuleConfig::default(),
    )
    .unwrap();

    assert_eq!(uno.play_turn(TurnAction::Draw), Err(UnoError::DeckExhausted));
}

#[test]
fn turn_winning_works_properly() {
    let mut uno = create_table(
        vec![
            vec![number(CardColor::Red, 5)],
            vec![number(CardColor::Red, 5), number(CardColor::Blue, 3)],
        ],
        number(CardColor::Red, 5),
    );

    let result = uno.play_turn(play(1)).unwrap();

    assert_eq!(
        result,
        PlayTurnResult {
            player: 0,
            turn_action_result: TurnActionResult::Neutral(number(CardColor::Red, 5)),
            skipped: None,
            won: true
        }
    );
    assert_eq!(uno.get_player(0).unwrap().cards_count(), 0);
    assert_eq!(uno.state(), GameState::GameOver { winner: 0 });
    assert_eq!(uno.play_turn(play(1)), Err(UnoError::GameOver));
    assert_eq!(uno.get_player(1).unwrap().cards_count(), 2);
}

#[test]
fn winning_with_skip_ends_game_without_advancing() {
    let mut uno = create_table(
        vec![vec![action(CardColor::Red, ColoredCard::Skip)], filler(), filler()],
        number(CardColor::Red, 5),
    );

    let result = uno.play_turn(play(1)).unwrap();

    assert!(result.won);
    assert_eq!(result.skipped, None);
    assert_eq!(uno.state(), GameState::GameOver { winner: 0 });
    assert_eq!(uno.skip_pending_turn(), None);
}

#[test]
fn opening_skip_passes_over_first_player() {
    let seats = (0..3)
        .map(|i| (format!("Player {}", i + 1), Controller::Computer))
        .collect::<Vec<_>>();

    let mut uno = (0..1_000)
        .map(|seed| {
            Uno::new(
                seats.clone(),
                RuleConfig::default(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap()
        })
        .find(|uno| matches!(uno.get_top_card(), Card::Colored(_, ColoredCard::Skip)))
        .expect("Some seed opens with a Skip.");

    let hand_before = uno.get_player(0).unwrap().hand.clone();

    assert_eq!(uno.play_turn(TurnAction::Draw), Err(UnoError::SkipPending));
    assert_eq!(uno.get_player(0).unwrap().hand, hand_before);
    assert_eq!(uno.get_current_turn_player_index(), 0);

    assert_eq!(uno.skip_pending_turn(), Some(0));
    assert_eq!(uno.skip_pending_turn(), None);

    let result = uno.play_turn(TurnAction::Draw).unwrap();

    assert_eq!(result.player, 1);
    assert_eq!(result.skipped, None);
    assert_eq!(uno.get_current_turn_player_index(), 2);
}
