//! Page behavior configuration.
//!
//! Every field has a default matching the shipped page. A host may override
//! any subset through JSON, either an inline
//! `<script type="application/json" id="page-config">` block or
//! [`crate::mount_with_config`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    IDLE_LABEL, INVALID_BORDER, LOADING_LABEL, MIN_INPUT_CHARS, REVEAL_OFFSET_PX, REVEAL_TRANSITION, SUBMIT_DELAY_MS,
    UPLOAD_PLACEHOLDER, VALID_BORDER,
};
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Trimmed length, in UTF-16 units, below which the body is invalid.
    pub min_input_chars: usize,
    /// Simulated processing time between click and reveal.
    pub submit_delay_ms: u32,
    /// Border color of a too-short body.
    pub invalid_border: String,
    /// Border color of an acceptable body.
    pub valid_border: String,
    /// Submit label while idle.
    pub idle_label: String,
    /// Submit label while loading.
    pub loading_label: String,
    /// Upload label when no file is selected.
    pub upload_placeholder: String,
    /// CSS `transition` of the reveal.
    pub reveal_transition: String,
    /// Vertical slide distance of the reveal, in CSS pixels.
    pub reveal_offset_px: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            min_input_chars: MIN_INPUT_CHARS,
            submit_delay_ms: SUBMIT_DELAY_MS,
            invalid_border: INVALID_BORDER.to_owned(),
            valid_border: VALID_BORDER.to_owned(),
            idle_label: IDLE_LABEL.to_owned(),
            loading_label: LOADING_LABEL.to_owned(),
            upload_placeholder: UPLOAD_PLACEHOLDER.to_owned(),
            reveal_transition: REVEAL_TRANSITION.to_owned(),
            reveal_offset_px: REVEAL_OFFSET_PX,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing fields keep their defaults; unknown
    /// fields are rejected so a typo does not pass silently.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would leave the page in a broken state.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.submit_delay_ms == 0 {
            return Err(PageError::Config("submit_delay_ms must be greater than zero".into()));
        }
        for (name, value) in [
            ("idle_label", &self.idle_label),
            ("loading_label", &self.loading_label),
            ("upload_placeholder", &self.upload_placeholder),
        ] {
            if value.trim().is_empty() {
                return Err(PageError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
