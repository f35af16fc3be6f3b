//! Viewport intersection math for hosts without a native observer.
//!
//! Mirrors the browser model: a root rectangle grown or shrunk by a root
//! margin, an intersection ratio relative to the target's own area, and a
//! threshold the ratio must reach. Zero-area targets count as fully
//! intersecting when they touch the root.

/// Axis-aligned rectangle in logical pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Edge-inclusive intersection; touching rectangles yield a zero-area rect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// One side of a root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    /// Percentage of the root's extent along the same axis.
    Percent(f64),
}

impl MarginLength {
    fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(value) => value,
            Self::Percent(value) => extent * value / 100.0,
        }
    }

    /// CSS text form, e.g. `200px` or `-6%`.
    pub fn to_css(self) -> String {
        match self {
            Self::Px(value) => format!("{value}px"),
            Self::Percent(value) => format!("{value}%"),
        }
    }
}

/// Per-side adjustment of the root rectangle. Positive values grow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin::uniform(MarginLength::Px(0.0));

    pub const fn uniform(length: MarginLength) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// Returns `root` adjusted by this margin.
    pub fn apply(&self, root: Rect) -> Rect {
        let top = self.top.resolve(root.height);
        let right = self.right.resolve(root.width);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);
        Rect::new(
            root.x - left,
            root.y - top,
            root.width + left + right,
            root.height + top + bottom,
        )
    }

    /// CSS shorthand in top/right/bottom/left order.
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {}",
            self.top.to_css(),
            self.right.to_css(),
            self.bottom.to_css(),
            self.left.to_css()
        )
    }
}

/// Trigger configuration of one proximity observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Minimum visible fraction of the target, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl ObserverConfig {
    /// Visible fraction of `target` inside the margin-adjusted `viewport`.
    ///
    /// Returns `None` when the two do not intersect at all.
    pub fn intersection_ratio(&self, target: Rect, viewport: Rect) -> Option<f64> {
        let root = self.root_margin.apply(viewport);
        let overlap = target.intersection(&root)?;
        let target_area = target.area();
        if target_area == 0.0 {
            return Some(1.0);
        }
        Some(overlap.area() / target_area)
    }

    pub fn is_triggered(&self, target: Rect, viewport: Rect) -> bool {
        self.intersection_ratio(target, viewport)
            .is_some_and(|ratio| ratio >= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::{MarginLength, ObserverConfig, Rect, RootMargin};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 1000.0);

    #[test]
    fn negative_percent_margin_shrinks_the_bottom_edge() {
        let margin = RootMargin {
            bottom: MarginLength::Percent(-6.0),
            ..RootMargin::ZERO
        };
        let root = margin.apply(VIEWPORT);
        assert_eq!(root.y, 0.0);
        assert!((root.bottom() - 940.0).abs() < 1e-9);
        assert_eq!(margin.to_css(), "0px 0px -6% 0px");
    }

    #[test]
    fn threshold_requires_visible_fraction() {
        let config = ObserverConfig {
            threshold: 0.14,
            root_margin: RootMargin::ZERO,
        };
        // 10% of a 100px card is inside the viewport.
        assert!(!config.is_triggered(Rect::new(0.0, 990.0, 400.0, 100.0), VIEWPORT));
        // 20% inside.
        assert!(config.is_triggered(Rect::new(0.0, 980.0, 400.0, 100.0), VIEWPORT));
    }

    #[test]
    fn zero_height_target_triggers_within_lookahead_margin() {
        let config = ObserverConfig {
            threshold: 0.0,
            root_margin: RootMargin::uniform(MarginLength::Px(200.0)),
        };
        assert!(config.is_triggered(Rect::new(0.0, 1150.0, 400.0, 0.0), VIEWPORT));
        assert!(config.is_triggered(Rect::new(0.0, 1200.0, 400.0, 0.0), VIEWPORT));
        assert!(!config.is_triggered(Rect::new(0.0, 1201.0, 400.0, 0.0), VIEWPORT));
    }
}
