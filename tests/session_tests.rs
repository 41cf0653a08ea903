//! Session tests: star rewards, the shop, power-ups and AI scheduling.

use std::time::Duration;

use crazy_eights::core::{
    Card, CardId, GameConfig, GameEvent, GameState, Rank, Rejected, Seat, ShopConfig, Status,
    Suit,
};
use crazy_eights::session::{GameSession, Snapshot};
use crazy_eights::shop::PowerUp;

const AI_DELAY: Duration = Duration::from_millis(1000);

fn card(raw: u32, rank: Rank, suit: Suit) -> Card {
    Card::new(CardId(raw), rank, suit)
}

/// Every prize is free so tests can stock the inventory.
fn free_shop() -> ShopConfig {
    ShopConfig {
        extra_cards_cost: 0,
        star_guarantee_cost: 0,
        discard_cost: 0,
        instant_win_cost: 0,
    }
}

/// Build a session with test logging routed through the harness.
fn build(config: GameConfig) -> GameSession {
    let _ = env_logger::builder().is_test(true).try_init();
    GameSession::new(config).unwrap()
}

fn session() -> GameSession {
    build(GameConfig::default().with_seed(21).with_shop(free_shop()))
}

/// Player on 2♥ K♠ Q♦; AI to move holding 9♥ and 3♣ on a 5♥.
fn ai_to_move() -> GameState {
    GameState::from_piles(
        (20..30).map(|i| card(i, Rank::Two, Suit::Clubs)).collect(),
        vec![card(0, Rank::Five, Suit::Hearts)],
        vec![
            card(1, Rank::Two, Suit::Hearts),
            card(2, Rank::King, Suit::Spades),
            card(3, Rank::Queen, Suit::Diamonds),
        ],
        vec![card(4, Rank::Nine, Suit::Hearts), card(5, Rank::Three, Suit::Clubs)],
    )
    .with_turn(Seat::Ai)
}

/// AI to move with a single legal card left.
fn ai_about_to_win() -> GameState {
    GameState::from_piles(
        vec![card(10, Rank::Queen, Suit::Clubs)],
        vec![card(0, Rank::Five, Suit::Hearts)],
        vec![card(1, Rank::King, Suit::Spades)],
        vec![card(2, Rank::Nine, Suit::Hearts)],
    )
    .with_turn(Seat::Ai)
}

fn player_about_to_win() -> GameState {
    GameState::from_piles(
        vec![card(10, Rank::Queen, Suit::Clubs)],
        vec![card(0, Rank::Five, Suit::Hearts)],
        vec![card(1, Rank::Jack, Suit::Hearts)],
        vec![card(2, Rank::Nine, Suit::Spades)],
    )
}

#[test]
fn test_scenario_b_player_win_grants_two() {
    let mut session = session().with_round(player_about_to_win());

    session.play_card(CardId(1)).unwrap();

    assert_eq!(session.state().status(), Status::PlayerWon);
    assert_eq!(session.stars(), 2);
}

#[test]
fn test_ai_win_grants_one() {
    let mut session = session().with_round(ai_about_to_win());

    let events = session.advance(AI_DELAY);

    assert_eq!(session.state().status(), Status::AiWon);
    assert_eq!(session.stars(), 1);
    assert!(events.contains(&GameEvent::StarsGranted {
        amount: 1,
        balance: 1
    }));
}

/// Holding a star guarantee, every round end pays two.
#[test]
fn test_star_guarantee_every_round() {
    let mut session = session();
    session.redeem(PowerUp::StarGuarantee).unwrap();

    let mut session = session.with_round(ai_about_to_win());
    session.advance(AI_DELAY);
    assert_eq!(session.state().status(), Status::AiWon);
    assert_eq!(session.stars(), 2);

    let mut session = session.with_round(player_about_to_win());
    session.play_card(CardId(1)).unwrap();
    assert_eq!(session.stars(), 4);

    // Passive: never spent
    assert_eq!(session.use_item(PowerUp::StarGuarantee), Err(Rejected::NotActivatable));
    assert_eq!(session.inventory().count(PowerUp::StarGuarantee), 1);
}

/// Instant win on a live round: empty hand, player wins, +2, one fewer p4.
#[test]
fn test_scenario_e_instant_win() {
    let mut session = session();
    session.redeem(PowerUp::InstantWin).unwrap();
    session.redeem(PowerUp::InstantWin).unwrap();
    let before = session.stars();

    let events = session.use_item(PowerUp::InstantWin).unwrap();

    let state = session.state();
    assert_eq!(state.hand_size(Seat::Player), 0);
    assert_eq!(state.status(), Status::PlayerWon);
    assert_eq!(session.stars(), before + 2);
    assert_eq!(session.inventory().count(PowerUp::InstantWin), 1);
    assert_eq!(events[0], GameEvent::PowerUpUsed {
        item: PowerUp::InstantWin
    });

    // Every card is still accounted for
    assert_eq!(
        state.deck_size() + state.discard_size() + state.hand_size(Seat::Ai),
        52
    );

    // Only once per round, and never after it ends
    assert_eq!(session.use_item(PowerUp::InstantWin), Err(Rejected::WrongStatus));
    assert_eq!(session.inventory().count(PowerUp::InstantWin), 1);
    assert_eq!(session.stars(), before + 2);
}

#[test]
fn test_extra_cards_on_player_turn() {
    let mut session = session();
    session.redeem(PowerUp::ExtraCards).unwrap();
    let deck = session.state().deck_size();

    session.use_item(PowerUp::ExtraCards).unwrap();

    assert_eq!(session.state().hand_size(Seat::Ai), 13);
    assert_eq!(session.state().deck_size(), deck - 5);
    assert_eq!(session.state().current_turn(), Seat::Player);
    assert_eq!(session.inventory().count(PowerUp::ExtraCards), 0);
    assert_eq!(session.use_item(PowerUp::ExtraCards), Err(Rejected::EmptyInventory));
}

#[test]
fn test_discard_removes_front_cards() {
    let mut session = session();
    session.redeem(PowerUp::Discard).unwrap();
    let hand: Vec<CardId> = session.state().hand(Seat::Player).map(|c| c.id).collect();
    let top = session.state().top_discard();

    session.use_item(PowerUp::Discard).unwrap();

    let after: Vec<CardId> = session.state().hand(Seat::Player).map(|c| c.id).collect();
    assert_eq!(after, hand[2..].to_vec());
    assert_eq!(session.state().top_discard(), top);
    assert_eq!(session.state().status(), Status::Playing);
    assert_eq!(session.stars(), 0);
}

#[test]
fn test_discard_win_pays_once() {
    let mut session = session();
    session.redeem(PowerUp::Discard).unwrap();
    let mut session = session.with_round(GameState::from_piles(
        vec![card(10, Rank::Queen, Suit::Clubs)],
        vec![card(0, Rank::Five, Suit::Hearts)],
        vec![card(1, Rank::King, Suit::Spades), card(2, Rank::Two, Suit::Clubs)],
        vec![card(3, Rank::Nine, Suit::Spades)],
    ));

    let events = session.use_item(PowerUp::Discard).unwrap();

    assert_eq!(session.state().status(), Status::PlayerWon);
    assert_eq!(session.stars(), 2);
    let grants = events
        .iter()
        .filter(|e| matches!(e, GameEvent::StarsGranted { .. }))
        .count();
    assert_eq!(grants, 1);
}

#[test]
fn test_power_ups_ignore_turn_but_need_playing() {
    let mut session = session();
    session.redeem(PowerUp::ExtraCards).unwrap();
    session.redeem(PowerUp::ExtraCards).unwrap();

    // AI's turn: still usable
    let mut session = session.with_round(ai_to_move());
    session.use_item(PowerUp::ExtraCards).unwrap();
    assert_eq!(session.state().hand_size(Seat::Ai), 7);

    // Waiting for a suit: refused
    let mut session = session.with_round(GameState::from_piles(
        Vec::new(),
        vec![card(0, Rank::Five, Suit::Hearts)],
        vec![card(1, Rank::Eight, Suit::Spades), card(2, Rank::King, Suit::Spades)],
        vec![card(3, Rank::Nine, Suit::Spades)],
    ));
    session.play_card(CardId(1)).unwrap();
    assert_eq!(session.state().status(), Status::WaitingForSuit);
    assert_eq!(session.use_item(PowerUp::ExtraCards), Err(Rejected::WrongStatus));
    assert_eq!(session.inventory().count(PowerUp::ExtraCards), 1);
}

#[test]
fn test_redeem_needs_funds() {
    let config = GameConfig::default().with_seed(3);
    let mut session = build(config).with_round(player_about_to_win());
    session.play_card(CardId(1)).unwrap();
    assert_eq!(session.stars(), 2);

    assert_eq!(session.redeem(PowerUp::ExtraCards), Err(Rejected::InsufficientFunds));
    assert_eq!(session.stars(), 2);
    assert_eq!(session.inventory().count(PowerUp::ExtraCards), 0);

    let mut session = session.with_round(player_about_to_win());
    session.play_card(CardId(1)).unwrap();
    let events = session.redeem(PowerUp::ExtraCards).unwrap();

    assert_eq!(session.stars(), 1);
    assert_eq!(session.inventory().count(PowerUp::ExtraCards), 1);
    assert_eq!(
        events[0],
        GameEvent::Redeemed {
            item: PowerUp::ExtraCards,
            cost: 3
        }
    );
}

#[test]
fn test_winning_eight_pays_after_suit() {
    let mut session = session().with_round(GameState::from_piles(
        vec![card(10, Rank::Queen, Suit::Clubs)],
        vec![card(0, Rank::Five, Suit::Hearts)],
        vec![card(1, Rank::Eight, Suit::Spades)],
        vec![card(2, Rank::Nine, Suit::Diamonds)],
    ));

    session.play_card(CardId(1)).unwrap();
    assert_eq!(session.state().status(), Status::WaitingForSuit);
    assert_eq!(session.stars(), 0);
    assert_eq!(session.pending_ai_move(), None);

    session.choose_suit(Suit::Hearts).unwrap();
    assert_eq!(session.state().status(), Status::PlayerWon);
    assert_eq!(session.stars(), 2);
}

// === Scheduling ===

#[test]
fn test_ai_moves_after_delay() {
    let mut session = session().with_round(ai_to_move());
    let version = session.version();
    assert_eq!(session.pending_ai_move().map(|p| p.version), Some(version));

    assert!(session.advance(Duration::from_millis(999)).is_empty());
    assert_eq!(session.state().current_turn(), Seat::Ai);

    let events = session.advance(Duration::from_millis(1));

    // Greedy plays the first legal non-8: the 9♥
    assert_eq!(
        events[0],
        GameEvent::CardPlayed {
            seat: Seat::Ai,
            card: CardId(4)
        }
    );
    assert_eq!(session.state().current_turn(), Seat::Player);
    assert_eq!(session.pending_ai_move(), None);
    assert!(session.version() > version);
}

#[test]
fn test_interleaved_mutation_rearms() {
    let mut session = session();
    session.redeem(PowerUp::ExtraCards).unwrap();
    let mut session = session.with_round(ai_to_move());
    let armed = session.pending_ai_move().unwrap();

    session.advance(Duration::from_millis(600));
    session.use_item(PowerUp::ExtraCards).unwrap();

    let rearmed = session.pending_ai_move().unwrap();
    assert!(rearmed.version > armed.version);
    assert_eq!(rearmed.due, session.scheduler().now() + AI_DELAY);

    // The original deadline passes without a move
    assert!(session.advance(Duration::from_millis(400)).is_empty());
    assert_eq!(session.state().current_turn(), Seat::Ai);

    assert!(!session.advance(Duration::from_millis(600)).is_empty());
    assert_eq!(session.state().current_turn(), Seat::Player);
}

#[test]
fn test_new_round_cancels_pending_move() {
    let mut session = session().with_round(ai_to_move());
    assert!(session.pending_ai_move().is_some());

    session.new_round().unwrap();

    assert_eq!(session.pending_ai_move(), None);
    assert!(session.advance(AI_DELAY * 3).is_empty());
    assert_eq!(session.state().current_turn(), Seat::Player);
    assert_eq!(session.state().hand_size(Seat::Player), 8);
    assert_eq!(session.round(), 2);
}

#[test]
fn test_no_move_without_ai_turn() {
    let mut session = session();

    assert_eq!(session.pending_ai_move(), None);
    assert!(session.advance(AI_DELAY * 10).is_empty());
    assert_eq!(session.state().history().len(), 0);
}

#[test]
fn test_same_seed_same_rounds() {
    let config = GameConfig::default().with_seed(99);
    let mut a = build(config.clone());
    let mut b = build(config);

    for _ in 0..3 {
        let hand_a: Vec<Card> = a.state().hand(Seat::Player).collect();
        let hand_b: Vec<Card> = b.state().hand(Seat::Player).collect();
        assert_eq!(hand_a, hand_b);
        a.new_round().unwrap();
        b.new_round().unwrap();
    }
}

#[test]
fn test_snapshot_round_trip() {
    let mut session = session();
    session.redeem(PowerUp::Discard).unwrap();
    session.draw_card().unwrap();

    let snapshot = session.snapshot();

    assert_eq!(snapshot.version, session.version());
    assert_eq!(snapshot.player_hand.len(), 9);
    assert_eq!(snapshot.ai_hand_size, 8);
    assert_eq!(snapshot.current_turn, Seat::Ai);
    assert_eq!(snapshot.message, "AI is thinking...");
    assert!(snapshot.inventory.contains(&(PowerUp::Discard, 1)));
    for entry in &snapshot.player_hand {
        assert_eq!(entry.playable, session.is_card_playable(&entry.card));
    }

    let bytes = snapshot.encode().unwrap();
    assert_eq!(Snapshot::decode(&bytes).unwrap(), snapshot);

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_config_from_json() {
    let config = GameConfig::from_json(
        r#"{ "seed": 5, "ai_delay_ms": 250, "shop": { "instant_win_cost": 1 } }"#,
    )
    .unwrap();

    assert_eq!(config.hand_size, 8);
    assert_eq!(config.shop.instant_win_cost, 1);
    assert_eq!(config.shop.discard_cost, 4);

    let session = build(config);
    assert_eq!(session.catalog().cost(PowerUp::InstantWin), 1);
    assert_eq!(session.scheduler().delay(), Duration::from_millis(250));
}
