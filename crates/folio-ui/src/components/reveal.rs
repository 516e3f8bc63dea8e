//! Reveal animation classes.
//!
//! Elements start with `reveal-animation` (faded, shifted down) and gain
//! `active` once the page's visibility watcher latches them.

/// Base class for elements that animate in.
pub const REVEAL_CLASS: &str = "reveal-animation";

/// Added once an element is revealed. Never removed.
pub const REVEAL_ACTIVE_CLASS: &str = "active";

/// Class list for a revealable element.
pub fn reveal_class(base: &str, revealed: bool) -> String {
    let mut class = String::with_capacity(base.len() + 24);
    if !base.trim().is_empty() {
        class.push_str(base.trim());
        class.push(' ');
    }
    class.push_str(REVEAL_CLASS);
    if revealed {
        class.push(' ');
        class.push_str(REVEAL_ACTIVE_CLASS);
    }
    class
}

/// Inline style staggering an element's transition.
pub fn transition_delay_style(delay_ms: u32) -> String {
    if delay_ms == 0 {
        String::new()
    } else {
        format!("transition-delay: {}ms;", delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_toggles_active() {
        assert_eq!(reveal_class("section-title", false), "section-title reveal-animation");
        assert_eq!(
            reveal_class("section-title", true),
            "section-title reveal-animation active"
        );
        assert_eq!(reveal_class("", true), "reveal-animation active");
    }

    #[test]
    fn delay_style() {
        assert_eq!(transition_delay_style(0), "");
        assert_eq!(transition_delay_style(200), "transition-delay: 200ms;");
    }
}
