//! Behavior layer for the email triage page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It colors
//! the email text area by length, mirrors the chosen upload file name into its
//! label, puts the "Analisar" button through a short simulated loading cycle,
//! and fades the result card in afterwards. Ctrl+Enter in the text area acts
//! as a click on the button.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ControllerCore`]: loading flag, reveal phase, event → effect mapping |
//! | [`setup`] | Which listeners to attach given which elements exist |
//! | [`validate`] | Text area validity |
//! | [`upload`] | Upload label text |
//! | [`reveal`] | Result card reveal phases and style declarations |
//! | [`keys`] | Keyboard model and the submit shortcut |
//! | [`config`] | [`config::PageConfig`] and its JSON override |
//! | [`consts`] | Selectors, default labels, colors, timings |
//! | [`error`] | [`error::PageError`] |
//! | `dom` | Browser host (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod keys;
pub mod reveal;
pub mod setup;
pub mod upload;
pub mod validate;

#[cfg(feature = "hydrate")]
mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

/// Module entry point: install the panic hook and logger, then mount the
/// controller with the inline page config once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    if let Err(err) = dom::mount() {
        log::warn!("page controller mount failed: {err}");
    }
}

/// Apply an explicit JSON config in place of the inline one.
///
/// On a page [`start`] already wired, the running controller switches to the
/// new config from its next event. Otherwise the config is used when the
/// controller attaches, e.g. once the form is inserted after the module
/// loads. An invalid payload is rejected and the current config kept.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn mount_with_config(json: &str) -> Result<(), JsValue> {
    init_logging();
    let config = config::PageConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    dom::apply_config(config).map_err(|err| JsValue::from_str(&err.to_string()))
}
