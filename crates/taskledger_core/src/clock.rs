//! Timestamp sources for task lifecycle events.
//!
//! # Responsibility
//! - Provide the `created_at` / `deleted_at` values stamped by the store.
//! - Allow deterministic time in tests without touching the system clock.

use crate::model::task::Timestamp;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" for the task store.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time in epoch milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A clock set before 1970 reads as the epoch instead of failing.
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0);
        Timestamp::from_epoch_ms(millis)
    }
}

/// Manually driven clock.
///
/// Clones share the same reading, so a test can keep one handle and move
/// the other into a store.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, epoch_ms: i64) {
        self.now_ms.set(epoch_ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_epoch_ms(self.now_ms.get())
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};

    #[test]
    fn manual_clock_handles_share_reading() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now().epoch_ms(), 1_250);
        handle.set(10);
        assert_eq!(clock.now().epoch_ms(), 10);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now().epoch_ms() > 0);
    }
}
