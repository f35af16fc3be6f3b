//! Display projection of one note.

use crate::model::note::Note;
use crate::render::escape::{escape_html, escape_optional};

/// Element tag used for note cards.
pub const NOTE_TAG: &str = "article";
/// Class flag shared by every note card.
pub const NOTE_CLASS: &str = "note";
/// Class flag added once a card has been revealed.
pub const VISIBLE_CLASS: &str = "visible";
/// Id given to the infinite-scroll sentinel element.
pub const SENTINEL_ID: &str = "scrollSentinel";

/// Escaped, ready-to-mount content of one note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    /// 1-based position in the note source.
    pub number: usize,
    pub title: String,
    pub description: String,
    /// Empty when the note has no date.
    pub date: String,
}

impl NoteCard {
    /// Builds the card for the note at zero-based `index`.
    pub fn from_note(index: usize, note: &Note) -> Self {
        Self {
            number: index + 1,
            title: escape_html(note.title.as_str()),
            description: escape_html(note.description.as_str()),
            date: escape_optional(note.date.as_deref()),
        }
    }

    /// Inner markup of the card element.
    pub fn inner_html(&self) -> String {
        format!(
            "<div class=\"note-number\">#{}</div><h2>{}</h2><p>{}</p><small>{}</small>",
            self.number, self.title, self.description, self.date
        )
    }

    /// Full element markup, including the wrapping card element.
    ///
    /// `visible` controls whether the reveal class flag is emitted.
    pub fn outer_html(&self, visible: bool) -> String {
        let class = if visible {
            format!("{NOTE_CLASS} {VISIBLE_CLASS}")
        } else {
            NOTE_CLASS.to_string()
        };
        format!(
            "<{NOTE_TAG} class=\"{class}\" tabindex=\"0\">{}</{NOTE_TAG}>",
            self.inner_html()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::NoteCard;
    use crate::model::note::Note;

    #[test]
    fn card_escapes_fields_and_numbers_from_one() {
        let note = Note::new("<3 & you", "we <did> it").dated("2023");
        let card = NoteCard::from_note(4, &note);

        assert_eq!(card.number, 5);
        assert_eq!(card.title, "&lt;3 &amp; you");
        assert_eq!(
            card.inner_html(),
            "<div class=\"note-number\">#5</div><h2>&lt;3 &amp; you</h2>\
             <p>we &lt;did&gt; it</p><small>2023</small>"
        );
    }

    #[test]
    fn missing_date_renders_empty_small() {
        let card = NoteCard::from_note(0, &Note::new("t", "d"));
        assert!(card.inner_html().ends_with("<small></small>"));
        assert!(card.outer_html(true).starts_with("<article class=\"note visible\""));
        assert!(card.outer_html(false).starts_with("<article class=\"note\" tabindex=\"0\">"));
    }
}
