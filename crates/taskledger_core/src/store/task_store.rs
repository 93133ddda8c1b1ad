//! Task lifecycle store.
//!
//! # Responsibility
//! - Single source of truth for the active set, added log and deleted log.
//! - Move tasks between collections according to the lifecycle rules.
//!
//! # Invariants
//! - Every created task has exactly one `AddedRecord`; the added log never
//!   shrinks and its entries are never mutated.
//! - A `TaskId` is never present in both the active set and the deleted log.
//! - Delete is a move: the task leaves the active set and exactly one
//!   `DeletedRecord` with the same id is appended.
//! - Purged ids never reappear in the active set or deleted log.
//! - Operations never fail; invalid input is a logged no-op.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{
    AddedRecord, DeletedRecord, IdAllocator, Task, TaskId, TaskValidationError,
};
use crate::store::observer::{StoreChange, StoreCounts, StoreObserver, StoreSnapshot};
use log::{debug, info};
use std::fmt::{Debug, Formatter};

/// Owned lifecycle state for one session.
pub struct TaskStore<C: Clock = SystemClock> {
    clock: C,
    ids: IdAllocator,
    active: Vec<Task>,
    added: Vec<AddedRecord>,
    deleted: Vec<DeletedRecord>,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl TaskStore<SystemClock> {
    /// Creates an empty store stamped by wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty store using the provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            ids: IdAllocator::new(),
            active: Vec::new(),
            added: Vec::new(),
            deleted: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Records a new task from raw user text.
    ///
    /// # Contract
    /// - Blank text (after trimming) is a no-op and returns `None`.
    /// - Otherwise the task is appended to the active set and an equal
    ///   `AddedRecord` to the added log, and the task is returned.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        // Peek first so blank input never consumes an id.
        let id = self.ids.peek();
        let task = match Task::new(id, text, self.clock.now()) {
            Ok(task) => task,
            Err(TaskValidationError::EmptyText) => {
                debug!("event=task_add module=store status=noop reason=empty_text");
                return None;
            }
        };
        self.ids.allocate();

        self.added.push(AddedRecord::from(&task));
        self.active.push(task.clone());
        info!(
            "event=task_add module=store status=ok id={} text_len={}",
            id,
            task.text.chars().count()
        );
        self.notify(StoreChange::Added(id));
        Some(task)
    }

    /// Moves an active task into the deleted log.
    ///
    /// Unknown ids (never created, already deleted or purged) are a no-op
    /// returning `None`. On success returns the appended `DeletedRecord`.
    pub fn delete(&mut self, id: TaskId) -> Option<DeletedRecord> {
        let Some(index) = self.active.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=store status=noop reason=not_active id={id}");
            return None;
        };

        let record = self.active.remove(index).into_deleted(self.clock.now());
        self.deleted.push(record.clone());
        info!("event=task_delete module=store status=ok id={id}");
        self.notify(StoreChange::Deleted(id));
        Some(record)
    }

    /// Permanently removes a deleted-log entry.
    ///
    /// Unknown ids are a no-op returning `None`. On success returns the
    /// destroyed record.
    pub fn purge(&mut self, id: TaskId) -> Option<DeletedRecord> {
        let Some(index) = self.deleted.iter().position(|record| record.id == id) else {
            debug!("event=task_purge module=store status=noop reason=not_deleted id={id}");
            return None;
        };

        let record = self.deleted.remove(index);
        info!("event=task_purge module=store status=ok id={id}");
        self.notify(StoreChange::Purged(id));
        Some(record)
    }

    /// Registers an observer called after every state-changing operation.
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Pending tasks in insertion order.
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Every task ever created, in creation order.
    pub fn added(&self) -> &[AddedRecord] {
        &self.added
    }

    /// Deleted, not yet purged tasks in deletion order.
    pub fn deleted(&self) -> &[DeletedRecord] {
        &self.deleted
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            active: &self.active,
            added: &self.added,
            deleted: &self.deleted,
        }
    }

    pub fn counts(&self) -> StoreCounts {
        self.snapshot().counts()
    }

    pub fn contains_active(&self, id: TaskId) -> bool {
        self.active.iter().any(|task| task.id == id)
    }

    pub fn contains_deleted(&self, id: TaskId) -> bool {
        self.deleted.iter().any(|record| record.id == id)
    }

    fn notify(&mut self, change: StoreChange) {
        let snapshot = StoreSnapshot {
            active: &self.active,
            added: &self.added,
            deleted: &self.deleted,
        };
        for observer in &mut self.observers {
            observer.on_change(&change, &snapshot);
        }
    }
}

impl<C: Clock> Debug for TaskStore<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("next_id", &self.ids.peek())
            .field("active", &self.active.len())
            .field("added", &self.added.len())
            .field("deleted", &self.deleted.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
