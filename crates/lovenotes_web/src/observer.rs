//! `IntersectionObserver`-backed proximity source.
//!
//! One callback per role lives as long as the source; `connect` only swaps
//! the observer object, so a callback is never dropped while it runs.

use lovenotes_core::{ObserverRole, ProximityEntry, ProximitySource, Timeline};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::DomSurface;

pub type WebTimeline = Timeline<DomSurface, DomProximity>;
pub type TimelineSlot = RefCell<Option<WebTimeline>>;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct DomProximity {
    reveal_callback: ObserverCallback,
    sentinel_callback: ObserverCallback,
    reveal: Option<IntersectionObserver>,
    sentinel: Option<IntersectionObserver>,
}

impl DomProximity {
    /// Builds a source whose callbacks forward entries to the timeline in `slot`.
    pub fn new(slot: Weak<TimelineSlot>) -> Self {
        Self {
            reveal_callback: callback(slot.clone(), ObserverRole::Reveal),
            sentinel_callback: callback(slot, ObserverRole::Sentinel),
            reveal: None,
            sentinel: None,
        }
    }

    pub(crate) fn observer(&self, role: ObserverRole) -> Option<&IntersectionObserver> {
        match role {
            ObserverRole::Reveal => self.reveal.as_ref(),
            ObserverRole::Sentinel => self.sentinel.as_ref(),
        }
    }

    fn slot_mut(&mut self, role: ObserverRole) -> &mut Option<IntersectionObserver> {
        match role {
            ObserverRole::Reveal => &mut self.reveal,
            ObserverRole::Sentinel => &mut self.sentinel,
        }
    }
}

impl ProximitySource<Element> for DomProximity {
    fn connect(&mut self, role: ObserverRole) {
        self.disconnect(role);

        let config = role.config();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(config.root_margin.to_css().as_str());

        let function: &JsValue = match role {
            ObserverRole::Reveal => self.reveal_callback.as_ref(),
            ObserverRole::Sentinel => self.sentinel_callback.as_ref(),
        };
        match IntersectionObserver::new_with_options(function.unchecked_ref(), &init) {
            Ok(observer) => *self.slot_mut(role) = Some(observer),
            Err(err) => warn!(
                "event=observer_connect module=observer status=error role={} error={err:?}",
                role.as_str()
            ),
        }
    }

    fn observe(&mut self, role: ObserverRole, target: &Element) {
        if let Some(observer) = self.observer(role) {
            observer.observe(target);
        }
    }

    fn unobserve(&mut self, role: ObserverRole, target: &Element) {
        if let Some(observer) = self.observer(role) {
            observer.unobserve(target);
        }
    }

    fn disconnect(&mut self, role: ObserverRole) {
        if let Some(observer) = self.slot_mut(role).take() {
            observer.disconnect();
        }
    }
}

impl Drop for DomProximity {
    fn drop(&mut self) {
        // Observers must stop before their callbacks are freed.
        self.disconnect(ObserverRole::Reveal);
        self.disconnect(ObserverRole::Sentinel);
    }
}

fn callback(slot: Weak<TimelineSlot>, role: ObserverRole) -> ObserverCallback {
    Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        dispatch(&slot, role, entries);
    })
}

fn dispatch(slot: &Weak<TimelineSlot>, role: ObserverRole, entries: js_sys::Array) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let entries = entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| ProximityEntry {
            target: entry.target(),
            is_intersecting: entry.is_intersecting(),
        })
        .collect::<Vec<_>>();

    let Ok(mut guard) = slot.try_borrow_mut() else {
        debug!(
            "event=observer_dispatch module=observer status=busy role={}",
            role.as_str()
        );
        return;
    };
    let Some(timeline) = guard.as_mut() else {
        return;
    };
    match role {
        ObserverRole::Reveal => {
            timeline.handle_reveal(&entries);
        }
        ObserverRole::Sentinel => {
            timeline.handle_sentinel(&entries);
        }
    }
}
