//! Reveal wrapper.
//!
//! Registers its element with the page's visibility watcher once mounted
//! and unregisters it on drop. The `active` class appears once the watcher
//! latches the key and stays for the rest of the page's life.

use dioxus::prelude::*;
use folio_ui::{reveal_class, transition_delay_style};

use crate::context::{use_mounted_elements, use_reveal_check, use_watcher};

#[component]
pub fn Reveal(
    /// Unique key, e.g. `"about.title"`
    id: String,
    /// Extra classes for the wrapper
    #[props(default)]
    class: String,
    /// Transition delay for staggered entrances
    #[props(default = 0)]
    delay_ms: u32,
    /// Visibility fraction for the intersection check
    #[props(default = folio_core::DEFAULT_THRESHOLD)]
    threshold: f64,
    children: Element,
) -> Element {
    let mut watcher = use_watcher();
    let mut mounted = use_mounted_elements();
    let checker = use_reveal_check();

    let revealed = watcher.read().is_revealed(&id);
    let class = reveal_class(&class, revealed);
    let style = transition_delay_style(delay_ms);

    use_drop({
        let id = id.clone();
        move || {
            if let Ok(mut w) = watcher.try_write() {
                w.unregister(&id);
            }
            if let Ok(mut m) = mounted.try_write() {
                m.remove(&id);
            }
        }
    });

    let on_mounted = {
        let id = id.clone();
        move |evt: MountedEvent| {
            mounted.write().insert(id.clone(), evt.data());
            watcher
                .write()
                .register_with_threshold(Some(id.clone()), threshold);
            checker.send(crate::context::RevealCheck);
        }
    };

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmounted: on_mounted,
            {children}
        }
    }
}
