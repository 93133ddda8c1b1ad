//! Task domain model.
//!
//! # Responsibility
//! - Define the live `Task` record owned by the active set.
//! - Define the immutable `AddedRecord` and `DeletedRecord` history snapshots.
//! - Allocate monotonically increasing task identifiers.
//!
//! # Invariants
//! - `TaskId` values only grow within one allocator and are never reused.
//! - `Task::text` is trimmed and non-empty, including after deserialization.
//! - `Timestamp` is opaque to core; formatting is left to presentation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable identifier for one task and all of its history snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    ///
    /// Used by presentation layers that received the id back from a
    /// rendered entry.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse::<u64>().map(Self)
    }
}

/// Session-local source of task identifiers.
///
/// Starts at `1` and increments once per allocation, so two tasks created
/// within the same clock tick still get distinct ids.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next unused identifier.
    pub fn allocate(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Returns the identifier the next `allocate` call will produce.
    pub fn peek(&self) -> TaskId {
        TaskId(self.next)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_epoch_ms(value: i64) -> Self {
        Self(value)
    }

    pub const fn epoch_ms(self) -> i64 {
        self.0
    }
}

/// Validation errors for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text was empty after trimming whitespace.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Pending task held by the active set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskFields")]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, non-empty user text.
    pub text: String,
    pub created_at: Timestamp,
}

impl Task {
    /// Builds a task from raw user input.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyText` when `text` is blank.
    pub fn new(
        id: TaskId,
        text: &str,
        created_at: Timestamp,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: text.trim().to_string(),
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the text invariant.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Consumes the task and stamps it with its deletion time.
    pub fn into_deleted(self, deleted_at: Timestamp) -> DeletedRecord {
        DeletedRecord {
            id: self.id,
            text: self.text,
            created_at: self.created_at,
            deleted_at,
        }
    }
}

#[derive(Deserialize)]
struct TaskFields {
    id: TaskId,
    text: String,
    created_at: Timestamp,
}

impl TryFrom<TaskFields> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskFields) -> Result<Self, Self::Error> {
        Self::new(value.id, &value.text, value.created_at)
    }
}

/// Creation-time snapshot kept by the added log for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedRecord {
    pub id: TaskId,
    pub text: String,
    pub created_at: Timestamp,
}

impl From<&Task> for AddedRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            created_at: task.created_at,
        }
    }
}

/// Deletion-time snapshot kept by the deleted log until purged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRecord {
    pub id: TaskId,
    pub text: String,
    pub created_at: Timestamp,
    pub deleted_at: Timestamp,
}
