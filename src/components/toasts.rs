use dioxus::prelude::*;
use folio_ui::ToastViewport;

use crate::context::use_toasts;

/// Page-level toast surface.
#[component]
pub fn Toasts() -> Element {
    let mut toasts = use_toasts();
    let visible = toasts.read().visible().to_vec();

    rsx! {
        ToastViewport {
            toasts: visible,
            on_dismiss: move |id| toasts.write().dismiss(id),
        }
    }
}
