//! Which behaviors to attach, given which page elements exist.
//!
//! The input area and submit control are required; without either, nothing
//! is attached. Upload feedback needs both the chooser and its label. The
//! result card, badge and reply are optional.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

/// Presence of each element the controller looks up.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presence {
    /// `#email-text` text area (required).
    pub input: bool,
    /// `#submit-btn` control (required).
    pub submit: bool,
    /// `.result-card` to reveal after the delay.
    pub result: bool,
    /// `.badge` category label. Presence-only: logged at setup, never mutated.
    pub badge: bool,
    /// `.reply` suggested reply. Presence-only: logged at setup, never mutated.
    pub reply: bool,
    /// `#file-input` upload chooser.
    pub file_input: bool,
    /// `.file-upload span` label mirroring the chosen file name.
    pub upload_label: bool,
}

/// Listeners to attach and whether a reveal target exists.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupPlan {
    /// Recolor the text area border on every `input` event.
    pub validate_input: bool,
    /// Run the loading cycle on submit `click`.
    pub submit_on_click: bool,
    /// Turn Ctrl+Enter in the text area into a submit click.
    pub submit_on_shortcut: bool,
    /// Mirror the selected file name into the upload label.
    pub upload_feedback: bool,
    /// A result card exists to stage, transition, and scroll to.
    pub reveal_result: bool,
}

impl SetupPlan {
    /// `None` when a required element is absent.
    #[must_use]
    pub fn from_presence(presence: Presence) -> Option<Self> {
        if !presence.input || !presence.submit {
            return None;
        }
        Some(Self {
            validate_input: true,
            submit_on_click: true,
            submit_on_shortcut: true,
            upload_feedback: presence.file_input && presence.upload_label,
            reveal_result: presence.result,
        })
    }
}
