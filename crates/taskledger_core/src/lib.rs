//! Core domain logic for TaskLedger.
//! This crate is the single source of truth for task lifecycle invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    AddedRecord, DeletedRecord, IdAllocator, Task, TaskId, TaskValidationError, Timestamp,
};
pub use service::intent::{Intent, IntentOutcome};
pub use service::task_session::TaskSession;
pub use store::observer::{StoreChange, StoreCounts, StoreObserver, StoreSnapshot};
pub use store::task_store::TaskStore;
pub use view::projector::{
    empty_message_for, project, Entries, EntryAction, Projection, ViewEntry,
    EMPTY_ACTIVE_MESSAGE, EMPTY_ADDED_MESSAGE, EMPTY_DELETED_MESSAGE,
};
pub use view::selector::{View, ViewParseError, ViewSelector};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
