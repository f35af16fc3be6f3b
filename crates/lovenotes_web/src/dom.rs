//! DOM-backed timeline container.

use lovenotes_core::render::card::{NoteCard, NOTE_CLASS, NOTE_TAG, SENTINEL_ID, VISIBLE_CLASS};
use lovenotes_core::TimelineSurface;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Timeline container looked up by id; absent containers make every call a no-op.
pub struct DomSurface {
    document: Document,
    container: Option<Element>,
}

impl DomSurface {
    pub fn new(document: Document, container_id: &str) -> Self {
        let container = document.get_element_by_id(container_id);
        if container.is_none() {
            debug!("event=surface_init module=dom status=missing id={container_id}");
        }
        Self {
            document,
            container,
        }
    }

    fn append(&self, element: Element) -> Option<Element> {
        let container = self.container.as_ref()?;
        match container.append_child(&element) {
            Ok(_) => Some(element),
            Err(err) => {
                debug!("event=append module=dom status=error error={err:?}");
                None
            }
        }
    }
}

impl TimelineSurface for DomSurface {
    type Element = Element;

    fn has_container(&self) -> bool {
        self.container.is_some()
    }

    fn append_note(&mut self, card: &NoteCard) -> Option<Element> {
        self.container.as_ref()?;
        let element = self.document.create_element(NOTE_TAG).ok()?;
        element.set_class_name(NOTE_CLASS);
        element.set_attribute("tabindex", "0").ok()?;
        element.set_inner_html(card.inner_html().as_str());
        self.append(element)
    }

    fn append_sentinel(&mut self) -> Option<Element> {
        self.container.as_ref()?;
        let element = self.document.create_element("div").ok()?;
        element.set_id(SENTINEL_ID);
        self.append(element)
    }

    fn remove(&mut self, element: &Element) {
        element.remove();
    }

    fn mark_visible(&mut self, element: &Element) {
        if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
            debug!("event=mark_visible module=dom status=error error={err:?}");
        }
    }

    fn is_visible(&self, element: &Element) -> bool {
        element.class_list().contains(VISIBLE_CLASS)
    }

    fn note_elements(&self) -> Vec<Element> {
        let Some(container) = self.container.as_ref() else {
            return Vec::new();
        };
        let selector = format!(".{NOTE_CLASS}");
        let Ok(nodes) = container.query_selector_all(selector.as_str()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}
