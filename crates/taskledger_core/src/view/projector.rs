//! View projector.
//!
//! # Responsibility
//! - Resolve the selected view into an ordered sequence of display entries.
//! - Supply the per-view placeholder shown when that sequence is empty.
//!
//! # Invariants
//! - Projection is pure: it only borrows a `StoreSnapshot`.
//! - `Projection::entries` is recomputed on every call; nothing is cached.
//! - Entries keep the underlying collection's insertion order.

use crate::model::task::{AddedRecord, DeletedRecord, Task, TaskId, Timestamp};
use crate::store::observer::StoreSnapshot;
use crate::view::selector::View;
use serde::Serialize;
use std::iter::FusedIterator;
use std::slice;

/// Placeholder for an empty active view.
pub const EMPTY_ACTIVE_MESSAGE: &str = "No active tasks";
/// Placeholder for an empty added view.
pub const EMPTY_ADDED_MESSAGE: &str = "No items added yet";
/// Placeholder for an empty deleted view.
pub const EMPTY_DELETED_MESSAGE: &str = "No items deleted yet";

/// Returns the placeholder message for `view`.
pub fn empty_message_for(view: View) -> &'static str {
    match view {
        View::Active => EMPTY_ACTIVE_MESSAGE,
        View::Added => EMPTY_ADDED_MESSAGE,
        View::Deleted => EMPTY_DELETED_MESSAGE,
    }
}

/// Projects `snapshot` through `view`.
pub fn project(snapshot: StoreSnapshot<'_>, view: View) -> Projection<'_> {
    Projection { view, snapshot }
}

/// Intent an entry offers to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryAction {
    /// Move the task to the deleted log.
    Delete,
    /// Remove the deleted record permanently.
    PurgeForever,
    /// Read-only history entry.
    None,
}

/// One displayed row, borrowing its record from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ViewEntry<'a> {
    Active(&'a Task),
    Added(&'a AddedRecord),
    Deleted(&'a DeletedRecord),
}

impl<'a> ViewEntry<'a> {
    pub fn id(&self) -> TaskId {
        match self {
            Self::Active(task) => task.id,
            Self::Added(record) => record.id,
            Self::Deleted(record) => record.id,
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Self::Active(task) => &task.text,
            Self::Added(record) => &record.text,
            Self::Deleted(record) => &record.text,
        }
    }

    /// Creation time for active/added rows, deletion time for deleted rows.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Active(task) => task.created_at,
            Self::Added(record) => record.created_at,
            Self::Deleted(record) => record.deleted_at,
        }
    }

    /// Caption that precedes the formatted timestamp.
    pub fn timestamp_label(&self) -> &'static str {
        match self {
            Self::Active(_) | Self::Added(_) => "Added on",
            Self::Deleted(_) => "Deleted on",
        }
    }

    pub fn action(&self) -> EntryAction {
        match self {
            Self::Active(_) => EntryAction::Delete,
            Self::Added(_) => EntryAction::None,
            Self::Deleted(_) => EntryAction::PurgeForever,
        }
    }
}

/// Resolved display list for one view.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    view: View,
    snapshot: StoreSnapshot<'a>,
}

impl<'a> Projection<'a> {
    pub fn view(&self) -> View {
        self.view
    }

    /// Returns a fresh iterator over the entries, oldest first.
    pub fn entries(&self) -> Entries<'a> {
        let inner = match self.view {
            View::Active => EntriesInner::Active(self.snapshot.active.iter()),
            View::Added => EntriesInner::Added(self.snapshot.added.iter()),
            View::Deleted => EntriesInner::Deleted(self.snapshot.deleted.iter()),
        };
        Entries { inner }
    }

    pub fn len(&self) -> usize {
        match self.view {
            View::Active => self.snapshot.active.len(),
            View::Added => self.snapshot.added.len(),
            View::Deleted => self.snapshot.deleted.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Placeholder to show instead of entries; `None` when there are entries.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then(|| empty_message_for(self.view))
    }
}

/// Iterator returned by `Projection::entries`.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

#[derive(Debug, Clone)]
enum EntriesInner<'a> {
    Active(slice::Iter<'a, Task>),
    Added(slice::Iter<'a, AddedRecord>),
    Deleted(slice::Iter<'a, DeletedRecord>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = ViewEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Active(iter) => iter.next().map(ViewEntry::Active),
            EntriesInner::Added(iter) => iter.next().map(ViewEntry::Added),
            EntriesInner::Deleted(iter) => iter.next().map(ViewEntry::Deleted),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Active(iter) => iter.size_hint(),
            EntriesInner::Added(iter) => iter.size_hint(),
            EntriesInner::Deleted(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

#[cfg(test)]
mod tests {
    use super::{empty_message_for, project, EntryAction};
    use crate::clock::ManualClock;
    use crate::store::task_store::TaskStore;
    use crate::view::selector::View;

    #[test]
    fn empty_store_yields_placeholder_per_view() {
        let store = TaskStore::with_clock(ManualClock::new(0));
        for view in View::ALL {
            let projection = project(store.snapshot(), view);
            assert_eq!(projection.entries().count(), 0);
            assert_eq!(projection.empty_message(), Some(empty_message_for(view)));
        }
    }

    #[test]
    fn entries_restart_on_every_call() {
        let mut store = TaskStore::with_clock(ManualClock::new(0));
        store.add("a");
        store.add("b");

        let projection = project(store.snapshot(), View::Active);
        let mut first = projection.entries();
        first.next();
        assert_eq!(first.len(), 1);
        assert_eq!(projection.entries().len(), 2);
    }

    #[test]
    fn deleted_entries_use_deletion_time_and_purge_action() {
        let clock = ManualClock::new(10);
        let mut store = TaskStore::with_clock(clock.clone());
        let task = store.add("a").unwrap();
        clock.set(99);
        store.delete(task.id);

        let projection = project(store.snapshot(), View::Deleted);
        let entry = projection.entries().next().unwrap();
        assert_eq!(entry.timestamp().epoch_ms(), 99);
        assert_eq!(entry.timestamp_label(), "Deleted on");
        assert_eq!(entry.action(), EntryAction::PurgeForever);
        assert_eq!(projection.empty_message(), None);
    }
}
