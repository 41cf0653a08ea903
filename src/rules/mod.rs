//! Game engine: legality and the round's transitions.
//!
//! - `legality`: pure queries (`current_suit`, `is_card_playable`)
//! - `engine`: `RulesEngine` and the `CrazyEights` implementation

pub mod engine;
pub mod legality;

pub use engine::{CrazyEights, RulesEngine};
pub use legality::{current_suit, is_card_playable, playable_cards};
