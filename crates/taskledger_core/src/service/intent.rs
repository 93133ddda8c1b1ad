//! User intents forwarded by the presentation layer, and their outcomes.

use crate::model::task::{DeletedRecord, Task, TaskId};
use crate::view::selector::View;
use serde::{Deserialize, Serialize};

/// One user action.
///
/// Serialized with an `intent` tag, e.g.
/// `{"intent":"request_delete","id":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Form submission with raw, untrimmed text.
    SubmitText { text: String },
    /// "Delete" clicked on an active task.
    RequestDelete { id: TaskId },
    /// "Delete Forever" clicked on a deleted record.
    RequestPurge { id: TaskId },
    /// View tab clicked.
    SelectView { view: View },
}

/// Result of applying one intent.
///
/// `NoOp` covers every ignored input: blank text and unknown ids alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IntentOutcome {
    Added { task: Task },
    Deleted { record: DeletedRecord },
    Purged { record: DeletedRecord },
    ViewSelected { previous: View, current: View },
    NoOp,
}

impl IntentOutcome {
    /// Whether the intent changed any state.
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}
