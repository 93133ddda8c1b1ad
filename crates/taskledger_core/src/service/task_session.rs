//! Task session use-case service.
//!
//! # Responsibility
//! - Own one task store and one view selector for a user session.
//! - Map presentation intents onto store and selector operations.
//! - Project the selected view for rendering.
//!
//! # Invariants
//! - Every intent completes synchronously before the next one is accepted
//!   (all mutations take `&mut self`).
//! - No intent ever fails; ignored input reports `IntentOutcome::NoOp`.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{DeletedRecord, Task, TaskId};
use crate::service::intent::{Intent, IntentOutcome};
use crate::store::observer::StoreObserver;
use crate::store::task_store::TaskStore;
use crate::view::projector::{project, Projection};
use crate::view::selector::{View, ViewSelector};
use log::debug;

/// Boundary object handed to the presentation layer.
#[derive(Debug)]
pub struct TaskSession<C: Clock = SystemClock> {
    store: TaskStore<C>,
    selector: ViewSelector,
}

impl TaskSession<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskSession<C> {
    /// Creates an empty session on the active view.
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: TaskStore::with_clock(clock),
            selector: ViewSelector::new(),
        }
    }

    /// Handles a form submission.
    pub fn submit_text(&mut self, text: &str) -> Option<Task> {
        self.store.add(text)
    }

    /// Handles "Delete" on an active task.
    pub fn request_delete(&mut self, id: TaskId) -> Option<DeletedRecord> {
        self.store.delete(id)
    }

    /// Handles "Delete Forever" on a deleted record.
    pub fn request_purge(&mut self, id: TaskId) -> Option<DeletedRecord> {
        self.store.purge(id)
    }

    /// Switches the visible view and returns the previous one.
    pub fn select_view(&mut self, view: View) -> View {
        let previous = self.selector.select(view);
        debug!("event=view_select module=session status=ok from={previous} to={view}");
        previous
    }

    /// Applies one intent given as data.
    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::SubmitText { text } => self
                .submit_text(&text)
                .map_or(IntentOutcome::NoOp, |task| IntentOutcome::Added { task }),
            Intent::RequestDelete { id } => self
                .request_delete(id)
                .map_or(IntentOutcome::NoOp, |record| IntentOutcome::Deleted { record }),
            Intent::RequestPurge { id } => self
                .request_purge(id)
                .map_or(IntentOutcome::NoOp, |record| IntentOutcome::Purged { record }),
            Intent::SelectView { view } => {
                let previous = self.select_view(view);
                IntentOutcome::ViewSelected {
                    previous,
                    current: view,
                }
            }
        }
    }

    /// Projects the currently selected view.
    pub fn render(&self) -> Projection<'_> {
        project(self.store.snapshot(), self.selector.current())
    }

    pub fn current_view(&self) -> View {
        self.selector.current()
    }

    /// Read access to the three collections.
    pub fn store(&self) -> &TaskStore<C> {
        &self.store
    }

    /// Registers a store observer, e.g. to trigger a re-render.
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.store.subscribe(observer);
    }
}
