//! Incremental note timeline.
//!
//! # Responsibility
//! - Render notes in fixed-size batches into the host container.
//! - Reveal cards once they enter the viewport.
//! - Load the next batch when the end-of-content sentinel nears the viewport.
//! - Skip staging entirely when the user prefers reduced motion.
//!
//! # Invariants
//! - `shown` is monotonic and bounded by the note count.
//! - At most one sentinel exists, always as the container's last child.
//! - At most one sentinel subscription is pending at any time.
//! - A card is marked visible at most once.

pub mod controller;
