//! Deck builder.
//!
//! - `create_deck`: one shuffled card per rank x suit
//! - `deal`: the 8/8/1 opening deal into a fresh `GameState`

pub mod deck;

pub use deck::{create_deck, deal};
