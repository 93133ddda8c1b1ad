//! Core use-case services.
//!
//! # Responsibility
//! - Expose the intent-level boundary the presentation layer talks to.
//! - Keep presentation code decoupled from store and view internals.

pub mod intent;
pub mod task_session;
