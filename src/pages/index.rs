//! The portfolio page.
//!
//! Owns the scroll container and the coroutine that turns scroll events
//! into visibility checks.

use dioxus::prelude::*;
use folio_core::{AnyOf, Intersection, ScrollGeometry};
use futures::StreamExt;

use crate::components::{About, Contact, Footer, Header, Hero, Projects, Skills, Toasts};
use crate::context::{
    use_mounted_elements, use_scroll_state, use_watcher, MountedElements, RevealCheck,
    ScrollState, SharedWatcher,
};
use crate::dom;

/// Portfolio page component.
///
/// Runs one visibility check after mount and another after each scroll
/// event. Bursts of scroll events collapse into a single check.
#[component]
pub fn Index() -> Element {
    let watcher = use_watcher();
    let mounted = use_mounted_elements();
    let mut scroll = use_scroll_state();

    let checker = use_coroutine(move |mut rx: UnboundedReceiver<RevealCheck>| async move {
        while rx.next().await.is_some() {
            // Collapse whatever queued up while the last check ran
            while let Ok(Some(_)) = rx.try_next() {}

            match dom::scroll_offset().await {
                Ok(offset) => {
                    if scroll.peek().offset != offset {
                        scroll.set(ScrollState { offset });
                    }
                }
                Err(err) => tracing::debug!(error = %err, "Could not read scroll offset"),
            }

            run_reveal_check(watcher, mounted).await;
        }
    });

    // Initial paint, before any scroll event
    use_effect(move || {
        checker.send(RevealCheck);
    });

    rsx! {
        div {
            id: dom::PAGE_ID,
            class: "page",
            onscroll: move |_| checker.send(RevealCheck),

            Header {}
            main {
                Hero {}
                About {}
                Projects {}
                Skills {}
                Contact {}
            }
            Footer {}
        }
        Toasts {}
    }
}

/// Measure every observed element and latch the visible ones.
async fn run_reveal_check(mut watcher: SharedWatcher, mounted: MountedElements) {
    let targets: Vec<_> = {
        let watcher = watcher.peek();
        let mounted = mounted.peek();
        watcher
            .observed_handles()
            .filter_map(|key| mounted.get(key).map(|el| (key.clone(), el.clone())))
            .collect()
    };
    if targets.is_empty() {
        return;
    }

    let viewport = match dom::viewport().await {
        Ok(viewport) => viewport,
        Err(err) => {
            tracing::warn!(error = %err, "Could not read viewport size");
            return;
        }
    };

    let mut geometry = ScrollGeometry::new(viewport);
    for (key, element) in targets {
        if let Some(rect) = dom::client_rect(&element).await {
            geometry.insert(key, rect);
        }
    }
    let intersection = Intersection::from_geometry(&geometry);

    let revealed = watcher.write().check_now(&AnyOf(&geometry, &intersection));
    if !revealed.is_empty() {
        tracing::debug!(count = revealed.len(), "Revealed elements");
    }
}
