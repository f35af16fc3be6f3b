//! Note record and ordered note source.
//!
//! # Responsibility
//! - Define the `{title, description, date?}` record rendered per timeline card.
//! - Load the whole sequence at once from JSON text or a JSON file.
//!
//! # Invariants
//! - `NoteSource` order is the render order.
//! - A missing or `null` date deserializes to `None`.
//! - A missing or `null` title or description deserializes to `""`.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Free-form date label shown under the description.
    #[serde(default)]
    pub date: Option<String>,
}

impl Note {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: None,
        }
    }

    /// Builder-style date setter used by fixtures and static sources.
    pub fn dated(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failure to load a note source.
#[derive(Debug)]
pub enum NoteSourceError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for NoteSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read note source: {err}"),
            Self::Parse(err) => write!(f, "invalid note source json: {err}"),
        }
    }
}

impl Error for NoteSourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for NoteSourceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for NoteSourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Ordered, pre-loaded note sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteSource {
    notes: Vec<Note>,
}

impl NoteSource {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Parses a JSON array of note objects.
    pub fn from_json_str(json: &str) -> Result<Self, NoteSourceError> {
        let notes: Vec<Note> = serde_json::from_str(json)?;
        Ok(Self::new(notes))
    }

    /// Reads and parses a JSON array of note objects from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NoteSourceError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(raw.as_str())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }
}

impl From<Vec<Note>> for NoteSource {
    fn from(value: Vec<Note>) -> Self {
        Self::new(value)
    }
}
