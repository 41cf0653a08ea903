//! Delayed AI moves on a logical clock.
//!
//! The host drives time with `advance`; nothing here sleeps or spawns.
//! A pending move remembers the session version it was armed at, and the
//! session refuses to fire it once that version is stale.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

/// An AI move waiting for its delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    /// Session version when the move was armed.
    pub version: u64,
    /// Clock time at which the move may fire.
    pub due: Duration,
}

/// Holds at most one pending AI move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiScheduler {
    now: Duration,
    delay: Duration,
    pending: Option<PendingMove>,
}

impl AiScheduler {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// Schedule a move one delay from now, replacing any pending one.
    pub fn arm(&mut self, version: u64) -> PendingMove {
        let pending = PendingMove {
            version,
            due: self.now + self.delay,
        };
        debug!("ai move armed at v{} due {:?}", version, pending.due);
        self.pending = Some(pending);
        pending
    }

    pub fn cancel(&mut self) -> Option<PendingMove> {
        let cancelled = self.pending.take();
        if let Some(pending) = cancelled {
            debug!("ai move for v{} cancelled", pending.version);
        }
        cancelled
    }

    /// Move the clock forward. Returns the pending move if it came due.
    pub fn advance(&mut self, dt: Duration) -> Option<PendingMove> {
        self.now += dt;
        match self.pending {
            Some(pending) if pending.due <= self.now => self.pending.take(),
            _ => None,
        }
    }
}
