//! Shared constants for the page controller: selectors, default labels,
//! colors, and timings.

// ── Selectors ───────────────────────────────────────────────────

/// Email body text area.
pub const INPUT_SELECTOR: &str = "#email-text";

/// "Analisar" submit button.
pub const SUBMIT_SELECTOR: &str = "#submit-btn";

/// Card holding the classification result.
pub const RESULT_SELECTOR: &str = ".result-card";

/// Category badge inside the result card.
pub const BADGE_SELECTOR: &str = ".badge";

/// Suggested reply text inside the result card.
pub const REPLY_SELECTOR: &str = ".reply";

/// Hidden `<input type="file">` for `.txt` / `.pdf` uploads.
pub const FILE_INPUT_SELECTOR: &str = "#file-input";

/// Visible label text of the upload control.
pub const UPLOAD_LABEL_SELECTOR: &str = ".file-upload span";

/// Optional inline JSON overriding [`crate::config::PageConfig`] fields.
pub const CONFIG_SCRIPT_ID: &str = "page-config";

// ── Validation ──────────────────────────────────────────────────

/// Minimum trimmed length, in characters, of a body worth analysing.
pub const MIN_INPUT_CHARS: usize = 10;

/// Border color of a too-short body.
pub const INVALID_BORDER: &str = "#dc2626";

/// Border color of an acceptable body.
pub const VALID_BORDER: &str = "var(--primary)";

// ── Labels ──────────────────────────────────────────────────────

pub const IDLE_LABEL: &str = "Analisar";
pub const LOADING_LABEL: &str = "Processando...";
pub const UPLOAD_PLACEHOLDER: &str = "Selecionar arquivo";

// ── Timing / animation ──────────────────────────────────────────

/// Simulated processing time between click and reveal.
pub const SUBMIT_DELAY_MS: u32 = 600;

/// CSS transition applied on the frame after the card is staged.
pub const REVEAL_TRANSITION: &str = "all 0.35s ease";

/// Vertical slide distance of the reveal, in CSS pixels.
pub const REVEAL_OFFSET_PX: u32 = 8;
