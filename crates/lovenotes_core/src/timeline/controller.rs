//! Timeline controller owning all render state.

use crate::config::{ConfigError, TimelineConfig};
use crate::host::{ObserverRole, ProximityEntry, ProximitySource, TimelineSurface};
use crate::model::note::NoteSource;
use crate::render::card::NoteCard;
use crate::render::state::RenderState;
use log::{debug, info};

/// Batch renderer, reveal animator and infinite-scroll controller in one
/// explicit state object.
pub struct Timeline<S, P>
where
    S: TimelineSurface,
    P: ProximitySource<S::Element>,
{
    notes: NoteSource,
    config: TimelineConfig,
    state: RenderState,
    surface: S,
    proximity: P,
    reveal_connected: bool,
    sentinel: Option<S::Element>,
}

impl<S, P> Timeline<S, P>
where
    S: TimelineSurface,
    P: ProximitySource<S::Element>,
{
    /// Creates an idle timeline. Nothing is mounted until [`Timeline::start`].
    pub fn new(
        notes: NoteSource,
        config: TimelineConfig,
        surface: S,
        proximity: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = RenderState::new(notes.len());
        Ok(Self {
            notes,
            config,
            state,
            surface,
            proximity,
            reveal_connected: false,
            sentinel: None,
        })
    }

    /// Page-ready entry point.
    ///
    /// Connects the reveal observer, renders the first batch (which arms the
    /// sentinel) and, under reduced motion, renders and reveals everything.
    pub fn start(&mut self, reduced_motion: bool) {
        info!(
            "event=timeline_start module=timeline status=ok total={} batch={} reduced_motion={}",
            self.state.total(),
            self.config.batch_size,
            reduced_motion
        );
        self.setup_reveal();
        self.render_batch();
        if reduced_motion {
            self.reveal_all_immediately();
        }
    }

    /// Appends the next batch of cards and returns how many were added.
    ///
    /// No-op when the container is missing or every note is already shown.
    pub fn render_batch(&mut self) -> usize {
        if !self.surface.has_container() {
            debug!("event=render_batch module=timeline status=skipped reason=no_container");
            return 0;
        }
        if self.state.is_exhausted() {
            return 0;
        }

        // Cards must land before the sentinel, never after it.
        self.disarm_infinite_scroll();

        let batch = self.state.take_batch(self.config.batch_size);
        let added = batch.len();
        for index in batch {
            if let Some(note) = self.notes.get(index) {
                let card = NoteCard::from_note(index, note);
                if self.surface.append_note(&card).is_none() {
                    debug!(
                        "event=append_note module=timeline status=skipped number={}",
                        card.number
                    );
                }
            }
        }
        debug!(
            "event=render_batch module=timeline status=ok added={} shown={} total={}",
            added,
            self.state.shown(),
            self.state.total()
        );

        self.observe_new_notes();
        if !self.state.is_exhausted() {
            self.arm_infinite_scroll();
        }
        added
    }

    /// (Re)creates the reveal observer.
    pub fn setup_reveal(&mut self) {
        if self.reveal_connected {
            self.proximity.disconnect(ObserverRole::Reveal);
        }
        self.proximity.connect(ObserverRole::Reveal);
        self.reveal_connected = true;
    }

    /// Subscribes every not-yet-visible card to the reveal observer.
    pub fn observe_new_notes(&mut self) {
        if !self.reveal_connected {
            return;
        }
        for element in self.surface.note_elements() {
            if !self.surface.is_visible(&element) {
                self.proximity.observe(ObserverRole::Reveal, &element);
            }
        }
    }

    /// Places a fresh sentinel at the end of the container and subscribes it.
    ///
    /// Any previous sentinel and its subscription are torn down first.
    pub fn arm_infinite_scroll(&mut self) {
        self.disarm_infinite_scroll();
        if !self.surface.has_container() {
            return;
        }
        let Some(sentinel) = self.surface.append_sentinel() else {
            return;
        };
        self.proximity.connect(ObserverRole::Sentinel);
        self.proximity.observe(ObserverRole::Sentinel, &sentinel);
        self.sentinel = Some(sentinel);
    }

    fn disarm_infinite_scroll(&mut self) {
        if let Some(sentinel) = self.sentinel.take() {
            self.proximity.unobserve(ObserverRole::Sentinel, &sentinel);
            self.surface.remove(&sentinel);
        }
        self.proximity.disconnect(ObserverRole::Sentinel);
    }

    /// Handles reveal-observer entries; returns how many cards became visible.
    pub fn handle_reveal(&mut self, entries: &[ProximityEntry<S::Element>]) -> usize {
        let mut revealed = 0;
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if !self.surface.is_visible(&entry.target) {
                self.surface.mark_visible(&entry.target);
                revealed += 1;
            }
            self.proximity.unobserve(ObserverRole::Reveal, &entry.target);
        }
        revealed
    }

    /// Handles sentinel-observer entries; returns whether a batch was loaded.
    ///
    /// Entries for anything but the live sentinel are stale and ignored.
    pub fn handle_sentinel(&mut self, entries: &[ProximityEntry<S::Element>]) -> bool {
        let fired = entries.iter().any(|entry| {
            entry.is_intersecting && self.sentinel.as_ref() == Some(&entry.target)
        });
        if !fired {
            return false;
        }
        self.disarm_infinite_scroll();
        self.render_batch();
        true
    }

    /// Renders every remaining note and marks all cards visible at once.
    pub fn reveal_all_immediately(&mut self) {
        while !self.state.is_exhausted() {
            if self.render_batch() == 0 {
                break;
            }
        }
        for element in self.surface.note_elements() {
            self.surface.mark_visible(&element);
            self.proximity.unobserve(ObserverRole::Reveal, &element);
        }
        info!(
            "event=reveal_all module=timeline status=ok shown={} total={}",
            self.state.shown(),
            self.state.total()
        );
    }

    pub fn shown(&self) -> usize {
        self.state.shown()
    }

    pub fn total(&self) -> usize {
        self.state.total()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// Live sentinel element, if armed.
    pub fn sentinel(&self) -> Option<&S::Element> {
        self.sentinel.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn proximity(&self) -> &P {
        &self.proximity
    }
}
