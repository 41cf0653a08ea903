//! Full rounds of self-play: random human seat against the greedy AI.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crazy_eights::core::{Action, GameConfig, GameRng, Seat, Status};
use crazy_eights::policy::{AiPolicy, RandomPolicy};
use crazy_eights::rules::{CrazyEights, RulesEngine};
use crazy_eights::session::GameSession;

const MAX_MOVES: usize = 500;

fn engine_round(seed: u64) -> Status {
    let mut engine = CrazyEights::new(GameConfig::default()).unwrap();
    let mut human = RandomPolicy::new(seed);
    let mut state = engine.init_game(&mut GameRng::new(seed)).unwrap();

    for _ in 0..MAX_MOVES {
        let seat = match state.status() {
            Status::Playing => state.current_turn(),
            Status::WaitingForSuit => Seat::Player,
            Status::PlayerWon | Status::AiWon => break,
        };
        let action = match seat {
            Seat::Player => human.choose_action(&state, seat),
            Seat::Ai => engine.choose_action(&state, seat),
        };
        let _ = engine.apply_action(&mut state, seat, action);
    }
    state.status()
}

fn session_round(seed: u64) -> u32 {
    let config = GameConfig::default().with_seed(seed).with_ai_delay_ms(0);
    let mut session = GameSession::new(config).unwrap();
    let mut human = RandomPolicy::new(seed);

    for _ in 0..MAX_MOVES {
        let state = session.state();
        match state.status() {
            Status::PlayerWon | Status::AiWon => break,
            Status::Playing if state.current_turn() == Seat::Ai => {
                session.advance(Duration::ZERO);
            }
            _ => {
                let _ = match human.choose_action(state, Seat::Player) {
                    Action::Play(id) => session.play_card(id),
                    Action::Draw => session.draw_card(),
                    Action::ChooseSuit(suit) => session.choose_suit(suit),
                };
            }
        }
    }
    session.stars()
}

fn bench_self_play(c: &mut Criterion) {
    c.bench_function("engine_round", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(engine_round(seed))
        })
    });

    c.bench_function("session_round", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(session_round(seed))
        })
    });

    c.bench_function("state_clone", |b| {
        let engine = CrazyEights::new(GameConfig::default()).unwrap();
        let state = engine.init_game(&mut GameRng::new(7)).unwrap();
        b.iter(|| black_box(state.clone()))
    });
}

criterion_group!(benches, bench_self_play);
criterion_main!(benches);
