//! Reveal-on-scroll latch.
//!
//! The [`VisibilityWatcher`] keeps a set of registered element handles and
//! marks each one revealed the first time a [`VisibilitySource`] reports it
//! as sufficiently visible. A reveal is terminal for the watcher's lifetime:
//!
//! ```text
//! Unobserved ──register──► Observed ──check_now (visible)──► Revealed
//!      ▲                      │
//!      └──────unregister──────┘
//! ```
//!
//! Reveals are remembered separately from registrations, so unregistering a
//! revealed handle (or registering it again after a remount) never fires
//! the reveal signal a second time.

mod source;

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

pub use source::{
    AnyOf, ElementRect, Intersection, ScrollGeometry, Viewport, VisibilitySource,
    REVEAL_VIEWPORT_FRACTION,
};

/// Visibility fraction used when a registration does not name one.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

type RevealListener<H> = Box<dyn FnMut(&H)>;

#[derive(Debug, Clone)]
struct Registration<H> {
    handle: H,
    threshold: f64,
}

/// One-shot reveal latch over a set of registered handles.
pub struct VisibilityWatcher<H> {
    /// Observed handles in registration order
    registrations: Vec<Registration<H>>,
    revealed: HashSet<H>,
    on_reveal: Option<RevealListener<H>>,
}

impl<H> Default for VisibilityWatcher<H> {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
            revealed: HashSet::new(),
            on_reveal: None,
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for VisibilityWatcher<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityWatcher")
            .field("observed", &self.registrations.len())
            .field("revealed", &self.revealed.len())
            .finish()
    }
}

impl<H> VisibilityWatcher<H>
where
    H: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a listener invoked exactly once per revealed handle.
    pub fn on_reveal(&mut self, listener: impl FnMut(&H) + 'static) {
        self.on_reveal = Some(Box::new(listener));
    }

    /// Begin observing `handle` with the default threshold.
    ///
    /// `None` is tolerated and ignored, like a ref that has not attached yet.
    pub fn register(&mut self, handle: Option<H>) {
        self.register_with_threshold(handle, DEFAULT_THRESHOLD);
    }

    /// Begin observing `handle` with an explicit visibility threshold.
    ///
    /// The threshold is clamped to `[0, 1]`; NaN falls back to
    /// [`DEFAULT_THRESHOLD`]. Registering an already observed handle updates
    /// its threshold. Registering a handle that was already revealed is a
    /// no-op: there is nothing left to watch for.
    pub fn register_with_threshold(&mut self, handle: Option<H>, threshold: f64) {
        let Some(handle) = handle else {
            return;
        };
        if self.revealed.contains(&handle) {
            return;
        }

        let threshold = normalize_threshold(threshold);
        match self.registrations.iter_mut().find(|r| r.handle == handle) {
            Some(existing) => existing.threshold = threshold,
            None => {
                tracing::trace!(?handle, threshold, "Observing element");
                self.registrations.push(Registration { handle, threshold });
            }
        }
    }

    /// Register several handles at once, skipping `None`s.
    pub fn register_all(&mut self, handles: impl IntoIterator<Item = Option<H>>) {
        for handle in handles {
            self.register(handle);
        }
    }

    /// Stop observing `handle`. No-op if it is not observed.
    ///
    /// A reveal that already happened stays applied.
    pub fn unregister(&mut self, handle: &H) {
        self.registrations.retain(|r| &r.handle != handle);
    }

    /// Drop every registration (page teardown).
    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    /// Evaluate every observed handle against `source` and latch the ones
    /// that are visible.
    ///
    /// Returns the newly revealed handles in registration order. Revealed
    /// handles stop being observed.
    pub fn check_now<S>(&mut self, source: &S) -> Vec<H>
    where
        S: VisibilitySource<H> + ?Sized,
    {
        let mut newly_revealed = Vec::new();

        self.registrations.retain(|registration| {
            if source.check_visible(&registration.handle, registration.threshold) {
                newly_revealed.push(registration.handle.clone());
                false
            } else {
                true
            }
        });

        for handle in &newly_revealed {
            if self.revealed.insert(handle.clone()) {
                tracing::debug!(?handle, "Element revealed");
                if let Some(listener) = self.on_reveal.as_mut() {
                    listener(handle);
                }
            }
        }

        newly_revealed
    }

    pub fn is_revealed(&self, handle: &H) -> bool {
        self.revealed.contains(handle)
    }

    pub fn is_observed(&self, handle: &H) -> bool {
        self.registrations.iter().any(|r| &r.handle == handle)
    }

    pub fn threshold_of(&self, handle: &H) -> Option<f64> {
        self.registrations
            .iter()
            .find(|r| &r.handle == handle)
            .map(|r| r.threshold)
    }

    /// Number of handles still waiting to be revealed.
    pub fn observed(&self) -> usize {
        self.registrations.len()
    }

    pub fn observed_handles(&self) -> impl Iterator<Item = &H> {
        self.registrations.iter().map(|r| &r.handle)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const VIEW: Viewport = Viewport {
        width: 1280.0,
        height: 1000.0,
    };

    fn rect(top: f64, bottom: f64) -> ElementRect {
        ElementRect::vertical(top, bottom, VIEW)
    }

    #[test]
    fn register_none_is_ignored() {
        let mut watcher: VisibilityWatcher<&str> = VisibilityWatcher::new();
        watcher.register(None);
        watcher.register_all([Some("title"), None, Some("body")]);
        assert_eq!(watcher.observed(), 2);
        assert_eq!(watcher.threshold_of(&"title"), Some(DEFAULT_THRESHOLD));
    }

    #[test]
    fn threshold_is_normalized() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register_with_threshold(Some(1), 4.0);
        watcher.register_with_threshold(Some(2), -1.0);
        watcher.register_with_threshold(Some(3), f64::NAN);
        assert_eq!(watcher.threshold_of(&1), Some(1.0));
        assert_eq!(watcher.threshold_of(&2), Some(0.0));
        assert_eq!(watcher.threshold_of(&3), Some(DEFAULT_THRESHOLD));
    }

    #[test]
    fn reregister_updates_threshold() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(Some("a"));
        watcher.register_with_threshold(Some("a"), 0.5);
        assert_eq!(watcher.observed(), 1);
        assert_eq!(watcher.threshold_of(&"a"), Some(0.5));
    }

    #[test]
    fn check_now_reveals_visible_only() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register_all([Some("hero"), Some("contact")]);

        let geometry = ScrollGeometry::new(VIEW)
            .with("hero", rect(100.0, 400.0))
            .with("contact", rect(2400.0, 2900.0));

        assert_eq!(watcher.check_now(&geometry), vec!["hero"]);
        assert!(watcher.is_revealed(&"hero"));
        assert!(!watcher.is_revealed(&"contact"));
        assert!(!watcher.is_observed(&"hero"));
        assert!(watcher.is_observed(&"contact"));
    }

    #[test]
    fn reveal_fires_once() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut watcher: VisibilityWatcher<&'static str> = VisibilityWatcher::new();
        {
            let fired = fired.clone();
            watcher.on_reveal(move |h| fired.borrow_mut().push(*h));
        }
        watcher.register(Some("about"));

        let geometry = ScrollGeometry::new(VIEW).with("about", rect(0.0, 300.0));
        watcher.check_now(&geometry);
        watcher.check_now(&geometry);

        // Remount: registering again must not re-arm the latch
        watcher.register(Some("about"));
        assert!(!watcher.is_observed(&"about"));
        assert!(watcher.check_now(&geometry).is_empty());

        assert_eq!(*fired.borrow(), vec!["about"]);
    }

    #[test]
    fn unregister_before_reveal_blocks_signal() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(Some("skills"));
        watcher.unregister(&"skills");
        watcher.unregister(&"never-registered");

        let geometry = ScrollGeometry::new(VIEW).with("skills", rect(0.0, 300.0));
        assert!(watcher.check_now(&geometry).is_empty());
        assert!(!watcher.is_revealed(&"skills"));
    }

    #[test]
    fn unregister_after_reveal_keeps_marker() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(Some("footer"));
        watcher.check_now(&ScrollGeometry::new(VIEW).with("footer", rect(0.0, 10.0)));
        watcher.unregister(&"footer");
        assert!(watcher.is_revealed(&"footer"));
    }

    #[test]
    fn missing_rect_is_tolerated() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(Some("detached"));
        let geometry: ScrollGeometry<&str> = ScrollGeometry::new(VIEW);
        assert!(watcher.check_now(&geometry).is_empty());
        assert!(watcher.is_observed(&"detached"));
    }

    #[test]
    fn intersection_respects_per_handle_threshold() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register_with_threshold(Some("strict"), 0.5);
        watcher.register(Some("loose"));

        let mut intersection = Intersection::new();
        intersection.insert_ratio("strict", 0.3);
        intersection.insert_ratio("loose", 0.3);

        assert_eq!(watcher.check_now(&intersection), vec!["loose"]);
        assert!(watcher.is_observed(&"strict"));
    }

    #[test]
    fn clear_drops_registrations_only() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register_all([Some(1), Some(2)]);
        watcher.check_now(&ScrollGeometry::new(VIEW).with(1, rect(0.0, 10.0)));
        watcher.clear();
        assert_eq!(watcher.observed(), 0);
        assert_eq!(watcher.revealed_count(), 1);
    }
}
