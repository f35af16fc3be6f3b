//! Read-only note data consumed by the timeline.
//!
//! # Responsibility
//! - Define the note record shape supplied by the page's note source.
//! - Provide ordered, indexed access over the full note sequence.
//!
//! # Invariants
//! - Notes are immutable once loaded; identity is the index in the sequence.
//! - The sequence is fully available before the first batch renders.

pub mod note;
