//! Core behavior of the love-notes page.
//! Everything here is host-agnostic; browsers and native drivers plug in
//! through the traits in [`host`] and [`widget`].

pub mod config;
pub mod host;
#[cfg(feature = "file-logging")]
pub mod logging;
pub mod model;
pub mod render;
pub mod timeline;
pub mod widget;

pub use config::{ConfigError, ElementIds, PageConfig, TimelineConfig};
pub use host::geometry::{MarginLength, ObserverConfig, Rect, RootMargin};
pub use host::memory::{MemoryElementId, MemorySurface};
pub use host::polling::PollingProximity;
pub use host::{ObserverRole, ProximityEntry, ProximitySource, TimelineSurface};
#[cfg(feature = "file-logging")]
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteSource, NoteSourceError};
pub use render::card::NoteCard;
pub use render::escape::escape_html;
pub use timeline::controller::Timeline;
pub use widget::love_timer::{LoveElapsed, LoveTimer, LOVE_TIMER_INTERVAL_MS};
pub use widget::sound::{AudioPlayer, PlaybackError, SoundToggle};
pub use widget::TextDisplay;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
