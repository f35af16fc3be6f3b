//! Standalone page widgets independent of the timeline.
//!
//! # Responsibility
//! - Love timer: calendar-aware elapsed time since a fixed start instant.
//! - Sound toggle: flip background audio playback on click.
//!
//! # Invariants
//! - A missing display or audio element turns every widget call into a no-op.

pub mod love_timer;
pub mod sound;

/// Writable text target such as an element's text content.
pub trait TextDisplay {
    fn set_text(&mut self, text: &str);
}

impl TextDisplay for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
