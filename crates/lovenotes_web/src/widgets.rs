//! DOM adapters for the love timer and the sound toggle.

use chrono::NaiveDateTime;
use lovenotes_core::{AudioPlayer, PlaybackError, TextDisplay};
use log::debug;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlAudioElement};

/// Text content of a DOM element.
pub struct ElementText(pub Element);

impl TextDisplay for ElementText {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Background audio element.
pub struct DomAudio(pub HtmlAudioElement);

impl AudioPlayer for DomAudio {
    fn pause(&mut self) {
        if let Err(err) = self.0.pause() {
            debug!("event=sound_pause module=widgets status=error error={err:?}");
        }
    }

    /// Starts playback. A rejected play promise is awaited off-band and dropped.
    fn play(&mut self) -> Result<(), PlaybackError> {
        let promise = self
            .0
            .play()
            .map_err(|err| PlaybackError::Rejected(format!("{err:?}")))?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                debug!("event=sound_play module=widgets status=rejected error={err:?}");
            }
        });
        Ok(())
    }
}

/// Current local wall-clock time from the JS clock.
pub fn local_now() -> Option<NaiveDateTime> {
    let now = js_sys::Date::new_0();
    chrono::NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )?
    .and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
}
