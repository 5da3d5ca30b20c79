//! Input validity: a body is worth analysing once its trimmed text reaches
//! the configured minimum length.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValidity {
    Invalid,
    Valid,
}

impl InputValidity {
    /// Border color shown for this validity.
    #[must_use]
    pub fn border<'a>(self, config: &'a PageConfig) -> &'a str {
        match self {
            Self::Invalid => &config.invalid_border,
            Self::Valid => &config.valid_border,
        }
    }
}

/// Whitespace as the browser's `String.prototype.trim` sees it: Unicode
/// `White_Space` minus U+0085, plus the U+FEFF byte order mark.
fn is_browser_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Classify `text`. Length is counted in UTF-16 code units after trimming
/// surrounding whitespace, matching what the browser reports for the text
/// area; no state is kept between calls.
#[must_use]
pub fn assess(text: &str, min_chars: usize) -> InputValidity {
    if text.trim_matches(is_browser_whitespace).encode_utf16().count() < min_chars {
        InputValidity::Invalid
    } else {
        InputValidity::Valid
    }
}
