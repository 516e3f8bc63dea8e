//! Color constants mirrored in the stylesheet's custom properties.

#![allow(dead_code)]

// === SURFACES ===
pub const BACKGROUND: &str = "#ffffff";
pub const SECONDARY: &str = "#f1f5f9";
pub const BORDER: &str = "#e2e8f0";
pub const GLASS: &str = "rgba(255, 255, 255, 0.7)";

// === TEXT ===
pub const FOREGROUND: &str = "#0f172a";
pub const MUTED: &str = "#64748b";

// === ACCENT ===
pub const PRIMARY: &str = "#1e293b";
pub const PRIMARY_FOREGROUND: &str = "#f8fafc";

// === SEMANTIC ===
pub const SUCCESS: &str = "#16a34a";
pub const DANGER: &str = "#dc2626";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GLOBAL_STYLES;

    #[test]
    fn stylesheet_uses_palette() {
        for color in [BACKGROUND, SECONDARY, BORDER, FOREGROUND, MUTED, PRIMARY, SUCCESS, DANGER] {
            assert!(GLOBAL_STYLES.contains(color), "{} missing from stylesheet", color);
        }
    }
}
