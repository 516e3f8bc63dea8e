//! Sticky header with section navigation.

use dioxus::prelude::*;

use crate::content::{NAV_LINKS, SITE_NAME};
use crate::context::use_scroll_state;
use crate::dom;

#[component]
pub fn Header() -> Element {
    let scroll = use_scroll_state();
    let mut menu_open = use_signal(|| false);

    let header_class = if scroll().is_scrolled() {
        "site-header site-header--scrolled"
    } else {
        "site-header"
    };
    let drawer_class = if menu_open() {
        "mobile-nav mobile-nav--open"
    } else {
        "mobile-nav"
    };

    rsx! {
        header { class: "{header_class}",
            div { class: "container header-inner",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |e| {
                        e.prevent_default();
                        dom::scroll_to_section("home");
                    },
                    "{SITE_NAME}"
                }

                // Desktop navigation
                nav { class: "desktop-nav",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.target}",
                            class: "nav-link link-hover",
                            href: "#{link.target}",
                            onclick: move |e| {
                                e.prevent_default();
                                dom::scroll_to_section(link.target);
                            },
                            "{link.name}"
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    r#type: "button",
                    "aria-label": "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "\u{2715}" } else { "\u{2630}" }
                }
            }

            // Mobile navigation
            div { class: "{drawer_class}",
                nav { class: "mobile-nav-links",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.target}",
                            class: "mobile-nav-link",
                            href: "#{link.target}",
                            onclick: move |e| {
                                e.prevent_default();
                                menu_open.set(false);
                                dom::scroll_to_section(link.target);
                            },
                            "{link.name}"
                        }
                    }
                }
            }
        }
    }
}
