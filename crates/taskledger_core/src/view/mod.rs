//! Read-side view state and projection.
//!
//! # Responsibility
//! - Track which collection is visible (`selector`).
//! - Derive the ordered display entries for that collection (`projector`).
//!
//! # Invariants
//! - Nothing in this module mutates the task store.

pub mod projector;
pub mod selector;
