//! Session layer: the single-writer aggregate over a round, the star
//! wallet and the inventory, plus AI move scheduling.
//!
//! Hosts with several threads should wrap a `GameSession` in one mutex.

mod game_session;
mod scheduler;
mod snapshot;

pub use game_session::GameSession;
pub use scheduler::{AiScheduler, PendingMove};
pub use snapshot::{status_message, HandCard, Snapshot, SnapshotError};
