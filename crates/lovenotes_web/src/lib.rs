//! Browser bindings for the love-notes page.
//!
//! # Responsibility
//! - Wire `lovenotes_core` to real DOM nodes, `IntersectionObserver`,
//!   `setInterval`, `matchMedia` and the background audio element.
//! - Expose one `mount` entry point to the page script.
//!
//! # Invariants
//! - Missing page elements never raise; the affected widget stays inert.
//! - Only malformed note or config JSON is reported back to the caller.

mod dom;
mod observer;
mod widgets;

use lovenotes_core::{
    LoveTimer, NoteSource, PageConfig, SoundToggle, Timeline, LOVE_TIMER_INTERVAL_MS,
};
use log::{info, Level};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAudioElement, Window};

use crate::dom::DomSurface;
use crate::observer::{DomProximity, TimelineSlot};
use crate::widgets::{local_now, DomAudio, ElementText};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

static CONSOLE_INIT: Once = Once::new();

/// Everything that must outlive `mount`.
struct Page {
    _timeline: Rc<TimelineSlot>,
    _timer_tick: Option<Closure<dyn FnMut()>>,
    _sound_click: Option<Closure<dyn FnMut()>>,
    _ready: Option<Closure<dyn FnMut()>>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Mounts the page widgets.
///
/// `notes_json` is the JSON array of `{title, description, date?}` records;
/// `config_json` optionally overrides batch size, love timer start and ids.
#[wasm_bindgen(js_name = mount)]
pub fn mount(notes_json: &str, config_json: Option<String>) -> Result<(), JsError> {
    init_console();
    if PAGE.with(|page| page.borrow().is_some()) {
        return Err(JsError::new("page already mounted"));
    }

    let notes = NoteSource::from_json_str(notes_json).map_err(|err| JsError::new(&err.to_string()))?;
    let config = match config_json {
        Some(raw) => PageConfig::from_json_str(raw.as_str()),
        None => Ok(PageConfig::default()),
    }
    .map_err(|err| JsError::new(&err.to_string()))?;
    let love_start = config
        .love_start_instant()
        .map_err(|err| JsError::new(&err.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
    let document = window.document().ok_or_else(|| JsError::new("no document"))?;

    let slot: Rc<TimelineSlot> = Rc::new(RefCell::new(None));
    let timeline = Timeline::new(
        notes,
        config.timeline,
        DomSurface::new(document.clone(), config.element_ids.timeline.as_str()),
        DomProximity::new(Rc::downgrade(&slot)),
    )
    .map_err(|err| JsError::new(&err.to_string()))?;
    *slot.borrow_mut() = Some(timeline);

    let ready = start_when_ready(&window, &document, Rc::clone(&slot));
    let timer_tick = start_love_timer(&window, &document, &config, LoveTimer::new(love_start));
    let sound_click = bind_sound_toggle(&document, &config);

    PAGE.with(|page| {
        *page.borrow_mut() = Some(Page {
            _timeline: slot,
            _timer_tick: timer_tick,
            _sound_click: sound_click,
            _ready: ready,
        });
    });
    info!("event=page_mount module=web status=ok");
    Ok(())
}

/// Routes panics and `log` records to the browser console.
fn init_console() {
    CONSOLE_INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        };
        // Another logger may already be installed by the embedding page.
        let _ = console_log::init_with_level(level);
    });
}

/// Starts the timeline now, or on `DOMContentLoaded` while the document loads.
fn start_when_ready(
    window: &Window,
    document: &Document,
    slot: Rc<TimelineSlot>,
) -> Option<Closure<dyn FnMut()>> {
    let reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    let start = move || {
        if let Some(timeline) = slot.borrow_mut().as_mut() {
            timeline.start(reduced_motion);
        }
    };

    if document.ready_state() != "loading" {
        start();
        return None;
    }
    let mut start = Some(start);
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Some(start) = start.take() {
            start();
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .ok()?;
    Some(on_ready)
}

/// Renders the timer once immediately, then every second.
fn start_love_timer(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    timer: LoveTimer,
) -> Option<Closure<dyn FnMut()>> {
    let display = document.get_element_by_id(config.element_ids.love_timer.as_str())?;
    let mut display = ElementText(display);
    let mut tick = move || {
        if let Some(now) = local_now() {
            timer.tick(now, Some(&mut display));
        }
    };
    tick();

    let tick = Closure::<dyn FnMut()>::new(tick);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            LOVE_TIMER_INTERVAL_MS as i32,
        )
        .ok()?;
    Some(tick)
}

fn bind_sound_toggle(document: &Document, config: &PageConfig) -> Option<Closure<dyn FnMut()>> {
    let button = document.get_element_by_id(config.element_ids.sound_toggle.as_str())?;
    let audio = document
        .get_element_by_id(config.element_ids.audio.as_str())
        .and_then(|element| element.dyn_into::<HtmlAudioElement>().ok())
        .map(DomAudio);
    let mut glyph = ElementText(button.clone());
    let mut audio = audio;
    let mut toggle = SoundToggle::new();

    let on_click = Closure::<dyn FnMut()>::new(move || {
        toggle.toggle(audio.as_mut(), Some(&mut glyph));
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .ok()?;
    Some(on_click)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use lovenotes_core::render::card::{NoteCard, SENTINEL_ID, VISIBLE_CLASS};
    use lovenotes_core::{
        Note, NoteSource, ObserverRole, ProximitySource, Timeline, TimelineConfig, TimelineSurface,
    };
    use std::rc::Weak;
    use wasm_bindgen_test::*;
    use web_sys::{Document, Element};

    use crate::dom::DomSurface;
    use crate::observer::DomProximity;
    use crate::widgets::local_now;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("test runs in a browser")
    }

    fn mount_container(id: &str) -> Element {
        let document = document();
        let container = document.create_element("section").unwrap();
        container.set_id(id);
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    #[wasm_bindgen_test]
    fn missing_container_turns_surface_calls_into_no_ops() {
        let mut surface = DomSurface::new(document(), "no-such-timeline");
        let card = NoteCard::from_note(0, &Note::new("a", "b"));

        assert!(!surface.has_container());
        assert!(surface.append_note(&card).is_none());
        assert!(surface.append_sentinel().is_none());
        assert!(surface.note_elements().is_empty());
    }

    #[wasm_bindgen_test]
    fn visibility_flag_goes_through_class_list() {
        let container = mount_container("timeline-visibility");
        let mut surface = DomSurface::new(document(), "timeline-visibility");
        let element = surface
            .append_note(&NoteCard::from_note(0, &Note::new("a", "b")))
            .unwrap();

        assert!(!surface.is_visible(&element));
        surface.mark_visible(&element);
        assert!(surface.is_visible(&element));
        assert!(element.class_list().contains(VISIBLE_CLASS));
        assert_eq!(surface.note_elements(), vec![element]);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn sentinel_stays_the_last_child_across_batches() {
        let container = mount_container("timeline-sentinel");
        let notes = NoteSource::new((0..10).map(|i| Note::new(format!("t{i}"), "d")).collect());
        let mut timeline = Timeline::new(
            notes,
            TimelineConfig { batch_size: 4 },
            DomSurface::new(document(), "timeline-sentinel"),
            DomProximity::new(Weak::new()),
        )
        .unwrap();

        timeline.start(false);
        assert_eq!(
            container.last_element_child().map(|e| e.id()),
            Some(SENTINEL_ID.to_string())
        );

        timeline.render_batch();
        let sentinels = container.query_selector_all(&format!("#{SENTINEL_ID}")).unwrap();
        assert_eq!(sentinels.length(), 1);
        assert_eq!(
            container.last_element_child().map(|e| e.id()),
            Some(SENTINEL_ID.to_string())
        );
        assert_eq!(timeline.surface().note_elements().len(), 8);

        timeline.render_batch();
        assert!(container.query_selector(&format!("#{SENTINEL_ID}")).unwrap().is_none());
        container.remove();
    }

    #[wasm_bindgen_test]
    fn connect_replaces_the_previous_observer() {
        let mut proximity = DomProximity::new(Weak::new());
        assert!(proximity.observer(ObserverRole::Sentinel).is_none());

        proximity.connect(ObserverRole::Sentinel);
        let first = proximity.observer(ObserverRole::Sentinel).cloned().unwrap();
        proximity.connect(ObserverRole::Sentinel);
        let second = proximity.observer(ObserverRole::Sentinel).cloned().unwrap();
        assert_ne!(first, second);

        proximity.disconnect(ObserverRole::Sentinel);
        assert!(proximity.observer(ObserverRole::Sentinel).is_none());
        assert!(proximity.observer(ObserverRole::Reveal).is_none());
    }

    #[wasm_bindgen_test]
    fn local_clock_is_readable() {
        assert!(local_now().is_some());
    }
}
