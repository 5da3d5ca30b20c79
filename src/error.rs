//! Error type for page setup and DOM mutation.
//!
//! None of these reach the user. The host logs them at the handler boundary
//! and carries on; a missing required element ends setup silently.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A required element is not on the page.
    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    /// A web-sys call rejected with a JS exception.
    #[error("dom call failed: {0}")]
    Dom(String),

    /// The JSON page config could not be parsed or failed validation.
    #[error("invalid page config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
