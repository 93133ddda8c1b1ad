//! Change notification contract between the store and its readers.

use crate::model::task::{AddedRecord, DeletedRecord, Task, TaskId};
use serde::Serialize;

/// One state-changing store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "change", content = "id", rename_all = "snake_case")]
pub enum StoreChange {
    Added(TaskId),
    Deleted(TaskId),
    Purged(TaskId),
}

impl StoreChange {
    pub fn task_id(self) -> TaskId {
        match self {
            Self::Added(id) | Self::Deleted(id) | Self::Purged(id) => id,
        }
    }
}

/// Borrowed, read-only view over all three collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSnapshot<'a> {
    /// Pending tasks, oldest first.
    pub active: &'a [Task],
    /// Every task ever created, oldest first.
    pub added: &'a [AddedRecord],
    /// Deleted tasks not yet purged, oldest deletion first.
    pub deleted: &'a [DeletedRecord],
}

impl StoreSnapshot<'_> {
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            active: self.active.len(),
            added: self.added.len(),
            deleted: self.deleted.len(),
        }
    }
}

/// Collection sizes, mostly for logging and status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoreCounts {
    pub active: usize,
    pub added: usize,
    pub deleted: usize,
}

/// Receives one callback per state-changing operation.
///
/// Never called for no-op operations. The snapshot already reflects the
/// change.
pub trait StoreObserver {
    fn on_change(&mut self, change: &StoreChange, snapshot: &StoreSnapshot<'_>);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreChange, &StoreSnapshot<'_>),
{
    fn on_change(&mut self, change: &StoreChange, snapshot: &StoreSnapshot<'_>) {
        self(change, snapshot);
    }
}
