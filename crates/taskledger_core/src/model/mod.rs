//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and the two history snapshots derived from it.
//! - Own identifier allocation for one session.
//!
//! # Invariants
//! - Every record is identified by a `TaskId` that is never reused.
//! - Task text is trimmed and never empty.

pub mod task;
