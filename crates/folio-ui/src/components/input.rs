//! Form Field Components
//!
//! Labelled text inputs and textareas for the contact form.
//! Features:
//! - Label bound to the control through `id`
//! - Primary-coloured focus ring
//! - Disabled while the form is submitting

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form `name` attribute, also the default id
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Your Name".to_string(),
///         required: true
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id(props.id.as_deref(), &props.name);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                class: "form-input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Form `name` attribute, also the default id
    pub name: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = field_id(props.id.as_deref(), &props.name);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            textarea {
                id: "{id}",
                name: "{props.name}",
                class: "form-input form-textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Explicit id, or one derived from the field name.
fn field_id(id: Option<&str>, name: &str) -> String {
    match id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("field-{}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_prefers_explicit() {
        assert_eq!(field_id(Some("contact-name"), "name"), "contact-name");
        assert_eq!(field_id(Some(""), "name"), "field-name");
        assert_eq!(field_id(None, "email"), "field-email");
    }
}
