#![allow(dead_code)]

use lovenotes_core::{
    MemoryElementId, MemorySurface, Note, NoteSource, ObserverRole, PollingProximity, Rect,
    Timeline, TimelineConfig,
};

pub type MemoryTimeline = Timeline<MemorySurface, PollingProximity<MemoryElementId>>;

pub const VIEWPORT_WIDTH: f64 = 640.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;

pub fn notes(count: usize) -> NoteSource {
    NoteSource::new(
        (0..count)
            .map(|i| Note::new(format!("note {i}"), format!("body {i}")).dated(format!("day {i}")))
            .collect(),
    )
}

pub fn timeline(count: usize, batch_size: usize) -> MemoryTimeline {
    Timeline::new(
        notes(count),
        TimelineConfig { batch_size },
        MemorySurface::new("timeline").with_card_height(200.0, 20.0),
        PollingProximity::new(),
    )
    .unwrap()
}

pub fn viewport_at(scroll_y: f64) -> Rect {
    Rect::new(0.0, scroll_y, VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
}

/// Delivers pending reveal and sentinel notifications for one scroll position.
pub fn scroll_to(timeline: &mut MemoryTimeline, scroll_y: f64) {
    let viewport = viewport_at(scroll_y);
    let reveal = timeline
        .proximity()
        .poll(ObserverRole::Reveal, viewport, |e| timeline.surface().rect_of(e));
    timeline.handle_reveal(&reveal);

    let sentinel = timeline
        .proximity()
        .poll(ObserverRole::Sentinel, viewport, |e| timeline.surface().rect_of(e));
    timeline.handle_sentinel(&sentinel);
}
