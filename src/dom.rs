//! Webview interop.
//!
//! Small JavaScript snippets for what the renderer does not expose
//! directly: viewport size, container scroll offset, smooth scrolling.

use dioxus::prelude::*;
use folio_core::{ElementRect, Viewport};

/// Id of the scrolling page container.
pub const PAGE_ID: &str = "page";

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("eval failed: {0}")]
    Eval(String),
    #[error("unexpected eval result: {0}")]
    Decode(#[from] serde_json::Error),
}

async fn eval_json<T: serde::de::DeserializeOwned>(script: &str) -> Result<T, DomError> {
    let value = document::eval(script)
        .await
        .map_err(|e| DomError::Eval(format!("{:?}", e)))?;
    Ok(serde_json::from_value(value)?)
}

/// Current viewport size.
pub async fn viewport() -> Result<Viewport, DomError> {
    let (width, height): (f64, f64) =
        eval_json("return [window.innerWidth, window.innerHeight];").await?;
    Ok(Viewport::new(width, height))
}

/// Scroll offset of the page container.
pub async fn scroll_offset() -> Result<f64, DomError> {
    let script = format!(
        "const el = document.getElementById('{PAGE_ID}'); return el ? el.scrollTop : 0;"
    );
    eval_json(&script).await
}

/// Smooth-scroll the container back to the top.
pub fn scroll_to_top() {
    let script = format!(
        "const el = document.getElementById('{PAGE_ID}'); if (el) {{ el.scrollTo({{ top: 0, behavior: 'smooth' }}); }}"
    );
    let _ = document::eval(&script);
}

/// Smooth-scroll a section into view.
pub fn scroll_to_section(id: &str) {
    // Ids come from static content, but keep the script well-formed anyway
    let id: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let script = format!(
        "const el = document.getElementById('{id}'); if (el) {{ el.scrollIntoView({{ behavior: 'smooth' }}); }}"
    );
    let _ = document::eval(&script);
}

/// Viewport-relative rect of a mounted element.
pub async fn client_rect(element: &MountedData) -> Option<ElementRect> {
    match element.get_client_rect().await {
        Ok(rect) => Some(ElementRect::new(
            rect.min_y(),
            rect.max_y(),
            rect.min_x(),
            rect.max_x(),
        )),
        Err(err) => {
            tracing::trace!(?err, "Could not measure element");
            None
        }
    }
}
