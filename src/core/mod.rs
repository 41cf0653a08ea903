//! Core types: cards, seats, state, actions, RNG, configuration.
//!
//! These are the value types every other module builds on. Ranks and suits
//! are closed enums; the card universe itself is chosen by `GameConfig`.

pub mod action;
pub mod card;
pub mod config;
pub mod rng;
pub mod seat;
pub mod state;

pub use action::{Action, ActionRecord, Events, GameEvent, Rejected};
pub use card::{Card, CardId, ParseSuitError, Rank, Suit};
pub use config::{ConfigError, GameConfig, RewardConfig, ShopConfig};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap};
pub use state::{GameState, Status};
