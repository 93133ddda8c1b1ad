//! In-memory task lifecycle storage.
//!
//! # Responsibility
//! - Hold the active set, added log and deleted log for one session.
//! - Apply add/delete/purge as atomic, never-failing mutations.
//! - Publish change notifications to registered observers.

pub mod observer;
pub mod task_store;
