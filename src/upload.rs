//! Upload label feedback.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Text for the upload label: the first selected file's name, or the
/// placeholder when the selection is empty.
#[must_use]
pub fn label_text(first_file_name: Option<&str>, placeholder: &str) -> String {
    first_file_name.unwrap_or(placeholder).to_owned()
}
