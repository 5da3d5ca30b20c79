//! Result card reveal: a two-step fade/slide-in.
//!
//! The card is first staged (displayed, transparent, shifted down) and on the
//! next animation frame given a transition and its final opacity/offset, so
//! the browser animates between the two.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    /// Displayed at its start position, waiting one frame for the transition.
    Staged,
    Shown,
}

/// A single inline style assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDecl {
    /// CSS property name, e.g. `opacity`.
    pub property: &'static str,
    /// Value to assign.
    pub value: String,
}

impl StyleDecl {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self { property, value: value.into() }
    }
}

/// Styles applied when the card enters [`RevealPhase::Staged`].
#[must_use]
pub fn staged_styles(config: &PageConfig) -> Vec<StyleDecl> {
    vec![
        StyleDecl::new("display", "block"),
        StyleDecl::new("opacity", "0"),
        StyleDecl::new("transform", format!("translateY({}px)", config.reveal_offset_px)),
    ]
}

/// Styles applied on the frame after staging.
#[must_use]
pub fn shown_styles(config: &PageConfig) -> Vec<StyleDecl> {
    vec![
        StyleDecl::new("transition", config.reveal_transition.clone()),
        StyleDecl::new("opacity", "1"),
        StyleDecl::new("transform", "translateY(0)"),
    ]
}
