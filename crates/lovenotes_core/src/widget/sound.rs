//! Background audio toggle.

use crate::widget::TextDisplay;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MUTED_GLYPH: &str = "🔇";
pub const PLAYING_GLYPH: &str = "🔊";

/// Why playback did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The host refused to start playback, e.g. an autoplay policy.
    Rejected(String),
}

impl Display for PlaybackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "playback rejected: {reason}"),
        }
    }
}

impl Error for PlaybackError {}

/// Playback control of a single audio element.
pub trait AudioPlayer {
    fn pause(&mut self);
    fn play(&mut self) -> Result<(), PlaybackError>;
}

/// Click-driven playing/muted flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundToggle {
    playing: bool,
}

impl SoundToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn glyph(&self) -> &'static str {
        if self.playing {
            PLAYING_GLYPH
        } else {
            MUTED_GLYPH
        }
    }

    /// Handles one click and returns the new state.
    ///
    /// The state flips even when playback fails to start. Without an audio
    /// element the click is ignored.
    pub fn toggle<A, D>(&mut self, player: Option<&mut A>, glyph: Option<&mut D>) -> bool
    where
        A: AudioPlayer,
        D: TextDisplay,
    {
        let Some(player) = player else {
            return self.playing;
        };

        if self.playing {
            player.pause();
        } else if let Err(err) = player.play() {
            debug!("event=sound_play module=sound status=ignored error={err}");
        }
        self.playing = !self.playing;

        if let Some(glyph) = glyph {
            glyph.set_text(self.glyph());
        }
        self.playing
    }
}
