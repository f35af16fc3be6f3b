//! Host seams between the timeline and its display environment.
//!
//! # Responsibility
//! - Abstract the container the timeline mounts cards into.
//! - Abstract viewport-proximity notifications as subscribe/unsubscribe calls
//!   plus host-delivered entries.
//!
//! # Invariants
//! - `ProximitySource::connect` replaces any prior observer of the same role.
//! - Hosts deliver entries from a single logical thread, never reentrantly.

pub mod geometry;
pub mod memory;
pub mod polling;

use crate::host::geometry::{MarginLength, ObserverConfig, RootMargin};
use crate::render::card::NoteCard;

/// Minimum visible fraction before a card is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.14;
/// Bottom-edge inset of the reveal trigger zone, in percent of viewport height.
pub const REVEAL_BOTTOM_INSET_PERCENT: f64 = -6.0;
/// Lookahead distance at which the sentinel loads the next batch.
pub const SENTINEL_LOOKAHEAD_PX: f64 = 200.0;

/// Which observer a subscription belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObserverRole {
    /// One-shot reveal of note cards.
    Reveal,
    /// End-of-content sentinel for infinite scroll.
    Sentinel,
}

impl ObserverRole {
    pub fn config(self) -> ObserverConfig {
        match self {
            Self::Reveal => ObserverConfig {
                threshold: REVEAL_THRESHOLD,
                root_margin: RootMargin {
                    bottom: MarginLength::Percent(REVEAL_BOTTOM_INSET_PERCENT),
                    ..RootMargin::ZERO
                },
            },
            Self::Sentinel => ObserverConfig {
                threshold: 0.0,
                root_margin: RootMargin::uniform(MarginLength::Px(SENTINEL_LOOKAHEAD_PX)),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::Sentinel => "sentinel",
        }
    }
}

/// One proximity notification for an observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

impl<E> ProximityEntry<E> {
    pub fn intersecting(target: E) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }
}

/// Mount point for timeline cards.
///
/// Every mutation is a silent no-op when the container is absent.
pub trait TimelineSurface {
    type Element: Clone + PartialEq;

    fn has_container(&self) -> bool;
    /// Appends one card as the last child. `None` when nothing was mounted.
    fn append_note(&mut self, card: &NoteCard) -> Option<Self::Element>;
    /// Appends an empty sentinel marker as the last child.
    fn append_sentinel(&mut self) -> Option<Self::Element>;
    fn remove(&mut self, element: &Self::Element);
    fn mark_visible(&mut self, element: &Self::Element);
    fn is_visible(&self, element: &Self::Element) -> bool;
    /// Mounted note cards in document order.
    fn note_elements(&self) -> Vec<Self::Element>;
}

/// Viewport-proximity subscriptions keyed by observer role.
pub trait ProximitySource<E> {
    /// Creates a fresh observer for `role`, tearing down the previous one.
    fn connect(&mut self, role: ObserverRole);
    fn observe(&mut self, role: ObserverRole, target: &E);
    fn unobserve(&mut self, role: ObserverRole, target: &E);
    /// Drops every subscription of `role`. Idempotent.
    fn disconnect(&mut self, role: ObserverRole);
}
