//! Page-wide state shared through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| watcher);
//!
//! // In child components
//! let watcher = use_watcher();
//! ```

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use dioxus::prelude::*;
use folio_core::{ContactSender, Notification, ToastQueue, VisibilityWatcher};

use crate::config::SiteConfig;

/// Reveal handles are element keys such as `"about.title"`.
pub type RevealKey = String;

/// The page's single visibility watcher.
pub type SharedWatcher = Signal<VisibilityWatcher<RevealKey>>;

/// Mounted elements by reveal key, read when measuring geometry.
pub type MountedElements = Signal<HashMap<RevealKey, Rc<MountedData>>>;

/// Injected contact form sender.
pub type SharedSender = Arc<dyn ContactSender>;

/// Scroll position of the page container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
}

impl ScrollState {
    /// Header switches to its solid style past this offset.
    pub const SCROLLED_AFTER: f64 = 20.0;

    pub fn is_scrolled(&self) -> bool {
        self.offset > Self::SCROLLED_AFTER
    }
}

/// Message asking the page to re-run the visibility check.
#[derive(Clone, Copy, Debug)]
pub struct RevealCheck;

/// Get the configuration parsed at startup.
pub fn get_config() -> SiteConfig {
    crate::get_config()
}

pub fn use_watcher() -> SharedWatcher {
    use_context::<SharedWatcher>()
}

pub fn use_mounted_elements() -> MountedElements {
    use_context::<MountedElements>()
}

pub fn use_sender() -> SharedSender {
    use_context::<SharedSender>()
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

pub fn use_scroll_state() -> Signal<ScrollState> {
    use_context::<Signal<ScrollState>>()
}

/// Ask the page to re-check visibility (coalesced by the page coroutine).
pub fn use_reveal_check() -> Coroutine<RevealCheck> {
    use_coroutine_handle::<RevealCheck>()
}

/// Show `notification` and schedule its removal.
pub fn show_toast(mut toasts: Signal<ToastQueue>, notification: Notification) {
    let duration = {
        let mut queue = toasts.write();
        queue.push(notification, Instant::now());
        queue.duration()
    };

    spawn(async move {
        tokio::time::sleep(duration).await;
        if let Ok(mut queue) = toasts.try_write() {
            queue.expire(Instant::now());
        }
    });
}
