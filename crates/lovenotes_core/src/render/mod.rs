//! Markup production for timeline cards.
//!
//! # Responsibility
//! - Escape untrusted note text before it is embedded into markup.
//! - Build the per-note card projection and track how many notes are shown.
//!
//! # Invariants
//! - Every text field of a card is escaped exactly once.
//! - `RenderState::shown` never decreases and never exceeds the note count.

pub mod card;
pub mod escape;
pub mod state;
