//! In-memory timeline container with a fixed vertical card layout.

use crate::host::geometry::Rect;
use crate::host::TimelineSurface;
use crate::render::card::{NoteCard, SENTINEL_ID};

/// Default height of one card, in logical pixels.
pub const DEFAULT_CARD_HEIGHT: f64 = 240.0;
/// Default vertical gap between cards.
pub const DEFAULT_CARD_GAP: f64 = 24.0;
const DEFAULT_WIDTH: f64 = 640.0;

/// Handle to one node of a `MemorySurface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemoryElementId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
enum MemoryNodeKind {
    Note { card: NoteCard, visible: bool },
    Sentinel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryNode {
    id: MemoryElementId,
    kind: MemoryNodeKind,
}

/// Container double that lays cards out top to bottom.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    container_present: bool,
    container_id: String,
    children: Vec<MemoryNode>,
    next_id: u64,
    card_height: f64,
    card_gap: f64,
}

impl MemorySurface {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_present: true,
            container_id: container_id.into(),
            children: Vec::new(),
            next_id: 0,
            card_height: DEFAULT_CARD_HEIGHT,
            card_gap: DEFAULT_CARD_GAP,
        }
    }

    /// A page whose mount point is missing.
    pub fn without_container() -> Self {
        Self {
            container_present: false,
            ..Self::new("")
        }
    }

    pub fn with_card_height(mut self, height: f64, gap: f64) -> Self {
        self.card_height = height;
        self.card_gap = gap;
        self
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn sentinel_count(&self) -> usize {
        self.children
            .iter()
            .filter(|node| node.kind == MemoryNodeKind::Sentinel)
            .count()
    }

    /// Whether the last child is a sentinel.
    pub fn ends_with_sentinel(&self) -> bool {
        self.children
            .last()
            .is_some_and(|node| node.kind == MemoryNodeKind::Sentinel)
    }

    pub fn visible_count(&self) -> usize {
        self.children
            .iter()
            .filter(|node| matches!(node.kind, MemoryNodeKind::Note { visible: true, .. }))
            .count()
    }

    /// Mounted cards in document order.
    pub fn cards(&self) -> Vec<&NoteCard> {
        self.children
            .iter()
            .filter_map(|node| match &node.kind {
                MemoryNodeKind::Note { card, .. } => Some(card),
                MemoryNodeKind::Sentinel => None,
            })
            .collect()
    }

    /// Layout box of a mounted node. Sentinels have zero height.
    pub fn rect_of(&self, element: &MemoryElementId) -> Option<Rect> {
        let mut y = 0.0;
        for node in &self.children {
            let height = match node.kind {
                MemoryNodeKind::Note { .. } => self.card_height,
                MemoryNodeKind::Sentinel => 0.0,
            };
            if node.id == *element {
                return Some(Rect::new(0.0, y, DEFAULT_WIDTH, height));
            }
            if height > 0.0 {
                y += height + self.card_gap;
            }
        }
        None
    }

    /// Total scrollable height of the mounted content.
    pub fn content_height(&self) -> f64 {
        let cards = self.cards().len() as f64;
        if cards == 0.0 {
            return 0.0;
        }
        cards * self.card_height + (cards - 1.0) * self.card_gap
    }

    /// Serializes the container and its children as markup.
    pub fn to_html(&self) -> String {
        if !self.container_present {
            return String::new();
        }
        let mut html = format!("<section id=\"{}\">\n", self.container_id);
        for node in &self.children {
            match &node.kind {
                MemoryNodeKind::Note { card, visible } => {
                    html.push_str("  ");
                    html.push_str(card.outer_html(*visible).as_str());
                }
                MemoryNodeKind::Sentinel => {
                    html.push_str(format!("  <div id=\"{SENTINEL_ID}\"></div>").as_str());
                }
            }
            html.push('\n');
        }
        html.push_str("</section>\n");
        html
    }

    fn push(&mut self, kind: MemoryNodeKind) -> Option<MemoryElementId> {
        if !self.container_present {
            return None;
        }
        let id = MemoryElementId(self.next_id);
        self.next_id += 1;
        self.children.push(MemoryNode { id, kind });
        Some(id)
    }

    fn node_mut(&mut self, element: &MemoryElementId) -> Option<&mut MemoryNode> {
        self.children.iter_mut().find(|node| node.id == *element)
    }
}

impl TimelineSurface for MemorySurface {
    type Element = MemoryElementId;

    fn has_container(&self) -> bool {
        self.container_present
    }

    fn append_note(&mut self, card: &NoteCard) -> Option<Self::Element> {
        self.push(MemoryNodeKind::Note {
            card: card.clone(),
            visible: false,
        })
    }

    fn append_sentinel(&mut self) -> Option<Self::Element> {
        self.push(MemoryNodeKind::Sentinel)
    }

    fn remove(&mut self, element: &Self::Element) {
        self.children.retain(|node| node.id != *element);
    }

    fn mark_visible(&mut self, element: &Self::Element) {
        if let Some(MemoryNode {
            kind: MemoryNodeKind::Note { visible, .. },
            ..
        }) = self.node_mut(element)
        {
            *visible = true;
        }
    }

    fn is_visible(&self, element: &Self::Element) -> bool {
        self.children.iter().any(|node| {
            node.id == *element && matches!(node.kind, MemoryNodeKind::Note { visible: true, .. })
        })
    }

    fn note_elements(&self) -> Vec<Self::Element> {
        self.children
            .iter()
            .filter(|node| matches!(node.kind, MemoryNodeKind::Note { .. }))
            .map(|node| node.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySurface;
    use crate::host::TimelineSurface;
    use crate::model::note::Note;
    use crate::render::card::NoteCard;

    #[test]
    fn layout_stacks_cards_and_places_sentinel_at_the_end() {
        let mut surface = MemorySurface::new("timeline").with_card_height(100.0, 10.0);
        let first = surface
            .append_note(&NoteCard::from_note(0, &Note::new("a", "b")))
            .expect("container present");
        let second = surface
            .append_note(&NoteCard::from_note(1, &Note::new("c", "d")))
            .expect("container present");
        let sentinel = surface.append_sentinel().expect("container present");

        assert_eq!(surface.rect_of(&first).map(|r| r.y), Some(0.0));
        assert_eq!(surface.rect_of(&second).map(|r| r.y), Some(110.0));
        assert_eq!(surface.rect_of(&sentinel).map(|r| (r.y, r.height)), Some((220.0, 0.0)));
        assert!(surface.ends_with_sentinel());
        assert_eq!(surface.content_height(), 210.0);
    }

    #[test]
    fn missing_container_ignores_mutations() {
        let mut surface = MemorySurface::without_container();
        assert!(surface.append_sentinel().is_none());
        assert_eq!(surface.child_count(), 0);
        assert_eq!(surface.to_html(), "");
    }

    #[test]
    fn sentinel_cannot_be_marked_visible() {
        let mut surface = MemorySurface::new("timeline");
        let sentinel = surface.append_sentinel().expect("container present");
        surface.mark_visible(&sentinel);
        assert!(!surface.is_visible(&sentinel));
        surface.remove(&sentinel);
        assert_eq!(surface.sentinel_count(), 0);
    }
}
