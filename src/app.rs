use std::collections::HashMap;

use dioxus::prelude::*;
use folio_core::{build_sender, ToastQueue, VisibilityWatcher};

use crate::context::{get_config, MountedElements, ScrollState, SharedSender, SharedWatcher};
use crate::pages::Index;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the page-wide reveal watcher, the toast queue
/// and the contact sender.
#[component]
pub fn App() -> Element {
    let mut watcher: SharedWatcher = use_signal(VisibilityWatcher::new);
    let mounted: MountedElements = use_signal(HashMap::new);
    let toasts: Signal<ToastQueue> = use_signal(ToastQueue::default);
    let scroll: Signal<ScrollState> = use_signal(ScrollState::default);

    use_context_provider(|| watcher);
    use_context_provider(|| mounted);
    use_context_provider(|| toasts);
    use_context_provider(|| scroll);
    use_context_provider(|| -> SharedSender { build_sender(&get_config().sender) });

    // Page teardown: nothing left to observe
    use_drop(move || {
        if let Ok(mut w) = watcher.try_write() {
            w.clear();
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Index {}
    }
}
