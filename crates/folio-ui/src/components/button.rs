//! Button Components
//!
//! Button styles used across the page:
//! - Primary: filled call to action ("View My Work", "Send Message")
//! - Pill: rounded hero button
//! - Icon: round icon-only button (scroll to top)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Primary,
    /// Rounded pill, larger padding
    Pill,
    /// Round icon-only button
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Pill => "btn-pill",
            ButtonVariant::Icon => "btn-icon",
        }
    }
}

/// Join a base class with optional extras.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Accessible label, for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Icon,
///         aria_label: "Scroll to top".to_string(),
///         onclick: move |_| scroll_to_top(),
///         "\u{2191}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());
    let disabled_class = if props.disabled { " is-disabled" } else { "" };

    rsx! {
        button {
            class: "{full_class}{disabled_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Pill.class(), "btn-pill");
        assert_eq!(ButtonVariant::Icon.class(), "btn-icon");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_classes_skips_blank_extra() {
        assert_eq!(join_classes("btn-primary", None), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("  ")), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("w-full")), "btn-primary w-full");
    }
}
