//! Visibility sources.
//!
//! A source answers one question for the watcher: is this handle
//! sufficiently visible right now? Two implementations exist, matching the
//! two ways a page learns about visibility:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  ScrollGeometry: rects polled on scroll                          │
//! │  └── top < 0.85 * viewport.height && bottom > 0                  │
//! │                                                                  │
//! │  Intersection: overlap ratios (callback or computed from rects)  │
//! │  └── ratio >= threshold                                          │
//! │                                                                  │
//! │  AnyOf<A, B>: visible if either source says so                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Fraction of the viewport height an element's top edge must be above
/// before the scroll geometry check considers it visible.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

/// Viewport-relative bounding box of a rendered element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ElementRect {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Rect spanning the full viewport width, which is all the vertical
    /// checks care about.
    pub fn vertical(top: f64, bottom: f64, viewport: Viewport) -> Self {
        Self::new(top, bottom, 0.0, viewport.width)
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Size of the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Fraction of `rect` overlapping the viewport, in `[0, 1]`.
    ///
    /// A degenerate (zero-area) rect counts as fully visible when it sits
    /// inside the viewport and invisible otherwise.
    pub fn overlap_ratio(&self, rect: &ElementRect) -> f64 {
        let top = rect.top.max(0.0);
        let bottom = rect.bottom.min(self.height);
        let left = rect.left.max(0.0);
        let right = rect.right.min(self.width);

        let area = rect.area();
        if area <= 0.0 {
            let inside = rect.top >= 0.0
                && rect.top <= self.height
                && rect.left >= 0.0
                && rect.left <= self.width;
            return if inside { 1.0 } else { 0.0 };
        }

        let overlap = (bottom - top).max(0.0) * (right - left).max(0.0);
        (overlap / area).clamp(0.0, 1.0)
    }
}

/// Answers whether a handle is sufficiently visible at this moment.
///
/// Handles the source knows nothing about are reported as not visible.
pub trait VisibilitySource<H> {
    fn check_visible(&self, handle: &H, threshold: f64) -> bool;
}

impl<H, S: VisibilitySource<H> + ?Sized> VisibilitySource<H> for &S {
    fn check_visible(&self, handle: &H, threshold: f64) -> bool {
        (**self).check_visible(handle, threshold)
    }
}

/// Geometry snapshot taken on scroll.
///
/// Ignores the threshold: an element counts once its top edge is above
/// [`REVEAL_VIEWPORT_FRACTION`] of the viewport and its bottom edge is below
/// the viewport's top.
#[derive(Debug, Clone)]
pub struct ScrollGeometry<H> {
    viewport: Viewport,
    rects: HashMap<H, ElementRect>,
}

impl<H: Eq + Hash> ScrollGeometry<H> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: HashMap::new(),
        }
    }

    pub fn insert(&mut self, handle: H, rect: ElementRect) {
        self.rects.insert(handle, rect);
    }

    pub fn with(mut self, handle: H, rect: ElementRect) -> Self {
        self.insert(handle, rect);
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rects(&self) -> impl Iterator<Item = (&H, &ElementRect)> {
        self.rects.iter()
    }

    /// The scroll-reveal predicate on its own.
    pub fn is_in_reveal_zone(viewport: Viewport, rect: &ElementRect) -> bool {
        rect.top < viewport.height * REVEAL_VIEWPORT_FRACTION && rect.bottom > 0.0
    }
}

impl<H: Eq + Hash> VisibilitySource<H> for ScrollGeometry<H> {
    fn check_visible(&self, handle: &H, _threshold: f64) -> bool {
        self.rects
            .get(handle)
            .is_some_and(|rect| Self::is_in_reveal_zone(self.viewport, rect))
    }
}

/// Intersection ratios, either reported by an intersection callback or
/// computed from rects against a viewport.
#[derive(Debug, Clone)]
pub struct Intersection<H> {
    ratios: HashMap<H, f64>,
}

impl<H: Eq + Hash> Default for Intersection<H> {
    fn default() -> Self {
        Self {
            ratios: HashMap::new(),
        }
    }
}

impl<H: Eq + Hash> Intersection<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a ratio as delivered by an intersection callback.
    pub fn insert_ratio(&mut self, handle: H, ratio: f64) {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self.ratios.insert(handle, ratio);
    }

    pub fn insert_rect(&mut self, handle: H, rect: &ElementRect, viewport: Viewport) {
        self.insert_ratio(handle, viewport.overlap_ratio(rect));
    }

    pub fn ratio(&self, handle: &H) -> Option<f64> {
        self.ratios.get(handle).copied()
    }

    pub fn from_geometry(geometry: &ScrollGeometry<H>) -> Self
    where
        H: Clone,
    {
        let mut intersection = Self::new();
        for (handle, rect) in geometry.rects() {
            intersection.insert_rect(handle.clone(), rect, geometry.viewport());
        }
        intersection
    }
}

impl<H: Eq + Hash> VisibilitySource<H> for Intersection<H> {
    fn check_visible(&self, handle: &H, threshold: f64) -> bool {
        // A threshold of zero still needs some overlap, like isIntersecting.
        self.ratios
            .get(handle)
            .is_some_and(|&ratio| ratio > 0.0 && ratio >= threshold)
    }
}

/// Visible if either source reports visible.
#[derive(Debug, Clone)]
pub struct AnyOf<A, B>(pub A, pub B);

impl<H, A, B> VisibilitySource<H> for AnyOf<A, B>
where
    A: VisibilitySource<H>,
    B: VisibilitySource<H>,
{
    fn check_visible(&self, handle: &H, threshold: f64) -> bool {
        self.0.check_visible(handle, threshold) || self.1.check_visible(handle, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn reveal_zone_boundaries() {
        // 0.85 * 800 = 680
        let at_line = ElementRect::vertical(680.0, 900.0, VIEW);
        let above_line = ElementRect::vertical(679.0, 900.0, VIEW);
        let scrolled_past = ElementRect::vertical(-300.0, 0.0, VIEW);
        let partly_above = ElementRect::vertical(-300.0, 1.0, VIEW);

        assert!(!ScrollGeometry::<u8>::is_in_reveal_zone(VIEW, &at_line));
        assert!(ScrollGeometry::<u8>::is_in_reveal_zone(VIEW, &above_line));
        assert!(!ScrollGeometry::<u8>::is_in_reveal_zone(VIEW, &scrolled_past));
        assert!(ScrollGeometry::<u8>::is_in_reveal_zone(VIEW, &partly_above));
    }

    #[test]
    fn geometry_unknown_handle_is_hidden() {
        let geometry = ScrollGeometry::new(VIEW).with("a", ElementRect::vertical(0.0, 10.0, VIEW));
        assert!(geometry.check_visible(&"a", 0.1));
        assert!(!geometry.check_visible(&"b", 0.1));
    }

    #[test]
    fn overlap_ratio_partial() {
        // Half of a 200px tall element is inside
        let rect = ElementRect::vertical(700.0, 900.0, VIEW);
        assert!((VIEW.overlap_ratio(&rect) - 0.5).abs() < 1e-9);

        let below = ElementRect::vertical(900.0, 1000.0, VIEW);
        assert_eq!(VIEW.overlap_ratio(&below), 0.0);

        let inside = ElementRect::new(10.0, 20.0, 10.0, 20.0);
        assert_eq!(VIEW.overlap_ratio(&inside), 1.0);
    }

    #[test]
    fn overlap_ratio_degenerate_rect() {
        let point_inside = ElementRect::new(100.0, 100.0, 50.0, 50.0);
        let point_below = ElementRect::new(1200.0, 1200.0, 50.0, 50.0);
        assert_eq!(VIEW.overlap_ratio(&point_inside), 1.0);
        assert_eq!(VIEW.overlap_ratio(&point_below), 0.0);
    }

    #[test]
    fn intersection_threshold() {
        let mut intersection = Intersection::new();
        intersection.insert_ratio("low", 0.05);
        intersection.insert_ratio("edge", 0.1);
        intersection.insert_ratio("none", 0.0);

        assert!(!intersection.check_visible(&"low", 0.1));
        assert!(intersection.check_visible(&"edge", 0.1));
        assert!(!intersection.check_visible(&"none", 0.0));
        assert!(!intersection.check_visible(&"missing", 0.0));
    }

    #[test]
    fn intersection_clamps_reported_ratio() {
        let mut intersection = Intersection::new();
        intersection.insert_ratio("big", 3.0);
        intersection.insert_ratio("nan", f64::NAN);
        assert_eq!(intersection.ratio(&"big"), Some(1.0));
        assert_eq!(intersection.ratio(&"nan"), Some(0.0));
    }

    #[test]
    fn any_of_combines() {
        // Tall element just peeking in at the bottom: the geometry rule says
        // no (top below the 85% line), a 1% intersection with zero threshold says yes.
        let rect = ElementRect::vertical(790.0, 1800.0, VIEW);
        let geometry = ScrollGeometry::new(VIEW).with("tall", rect);
        let intersection = Intersection::from_geometry(&geometry);

        assert!(!geometry.check_visible(&"tall", 0.0));
        assert!(intersection.check_visible(&"tall", 0.0));
        assert!(AnyOf(&geometry, &intersection).check_visible(&"tall", 0.0));
        assert!(!AnyOf(&geometry, &intersection).check_visible(&"tall", 0.1));
    }
}
