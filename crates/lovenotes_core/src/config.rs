//! Page configuration.
//!
//! # Responsibility
//! - Hold tunables for batching, the love timer start instant and the element
//!   ids the host looks up.
//! - Validate configuration once, before any widget starts.
//!
//! # Invariants
//! - `batch_size >= 1`.
//! - `love_start` parses as `YYYY-MM-DDTHH:MM:SS` local wall-clock time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_BATCH_SIZE: usize = 4;
pub const DEFAULT_LOVE_START: &str = "2023-03-01T00:00:00";
pub const LOVE_START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Configuration validation failures.
#[derive(Debug)]
pub enum ConfigError {
    ZeroBatchSize,
    InvalidLoveStart { value: String, reason: String },
    EmptyElementId(&'static str),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroBatchSize => write!(f, "batch_size must be at least 1"),
            Self::InvalidLoveStart { value, reason } => {
                write!(f, "invalid love_start `{value}`: {reason}")
            }
            Self::EmptyElementId(field) => write!(f, "element id `{field}` cannot be empty"),
            Self::Parse(err) => write!(f, "invalid page config json: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Batching tunables for the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Notes appended per batch render.
    pub batch_size: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(())
    }
}

/// Stable ids of the page elements the widgets attach to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub timeline: String,
    pub love_timer: String,
    pub sound_toggle: String,
    pub audio: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            timeline: "timeline".to_string(),
            love_timer: "loveTimer".to_string(),
            sound_toggle: "soundToggle".to_string(),
            audio: "bgAudio".to_string(),
        }
    }
}

/// Full page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub timeline: TimelineConfig,
    pub love_start: String,
    pub element_ids: ElementIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            love_start: DEFAULT_LOVE_START.to_string(),
            element_ids: ElementIds::default(),
        }
    }
}

impl PageConfig {
    /// Parses and validates configuration JSON. Missing fields use defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timeline.validate()?;
        self.love_start_instant()?;
        let ids = [
            ("timeline", self.element_ids.timeline.as_str()),
            ("love_timer", self.element_ids.love_timer.as_str()),
            ("sound_toggle", self.element_ids.sound_toggle.as_str()),
            ("audio", self.element_ids.audio.as_str()),
        ];
        for (field, value) in ids {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyElementId(field));
            }
        }
        Ok(())
    }

    /// Parsed love timer start instant.
    pub fn love_start_instant(&self) -> Result<NaiveDateTime, ConfigError> {
        parse_love_start(self.love_start.as_str())
    }
}

pub fn parse_love_start(value: &str) -> Result<NaiveDateTime, ConfigError> {
    NaiveDateTime::parse_from_str(value.trim(), LOVE_START_FORMAT).map_err(|err| {
        ConfigError::InvalidLoveStart {
            value: value.to_string(),
            reason: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, PageConfig, DEFAULT_BATCH_SIZE};

    #[test]
    fn empty_object_uses_defaults() {
        let config = PageConfig::from_json_str("{}").expect("defaults should validate");
        assert_eq!(config.timeline.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.element_ids.timeline, "timeline");
        assert_eq!(
            config.love_start_instant().unwrap().to_string(),
            "2023-03-01 00:00:00"
        );
    }

    #[test]
    fn zero_batch_is_rejected() {
        let err = PageConfig::from_json_str(r#"{"timeline": {"batch_size": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBatchSize));
    }

    #[test]
    fn malformed_start_and_blank_ids_are_rejected() {
        let err = PageConfig::from_json_str(r#"{"love_start": "yesterday"}"#).unwrap_err();
        assert!(err.to_string().contains("yesterday"));

        let err =
            PageConfig::from_json_str(r#"{"element_ids": {"audio": "  "}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyElementId("audio")));
    }
}
