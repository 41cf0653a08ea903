//! Reward/shop controller pieces.
//!
//! - `PowerUp`, `Catalog`: what can be bought and for how much
//! - `Wallet`, `Inventory`: session-lifetime balances
//! - `round_reward`, `apply_power_up`: the rules that touch a round

mod effects;
mod inventory;
mod power_up;

pub use effects::{apply_power_up, round_reward};
pub use inventory::{Inventory, Wallet};
pub use power_up::{Catalog, PowerUp, UnknownPowerUp};
