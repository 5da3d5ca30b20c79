//! Browser host for [`ControllerCore`].
//!
//! ARCHITECTURE
//! ============
//! Locates the page elements, decides what to attach via [`SetupPlan`], and
//! registers one closure per listener. Every closure funnels into
//! [`Page::dispatch`], which borrows the core only long enough to collect its
//! effects, then applies them. A synthetic submit click issued from the
//! keydown handler therefore re-enters the click listener with the core
//! already released.
//!
//! Listener closures and timers live for the page session and are leaked with
//! `forget()`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Date;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config::PageConfig;
use crate::consts::{
    BADGE_SELECTOR, CONFIG_SCRIPT_ID, FILE_INPUT_SELECTOR, INPUT_SELECTOR, REPLY_SELECTOR, RESULT_SELECTOR,
    SUBMIT_SELECTOR, UPLOAD_LABEL_SELECTOR,
};
use crate::controller::{ControllerCore, Effect};
use crate::error::PageError;
use crate::keys::{Key, Modifiers};
use crate::reveal::StyleDecl;
use crate::setup::{Presence, SetupPlan};

/// Marks an input area whose listeners are already attached.
const MOUNTED_ATTR: &str = "data-page-controller";

thread_local! {
    /// Core of the attached controller, once setup has succeeded.
    static MOUNTED: RefCell<Option<Rc<RefCell<ControllerCore>>>> = const { RefCell::new(None) };
    /// Host config waiting for the first successful attach.
    static PENDING_CONFIG: RefCell<Option<PageConfig>> = const { RefCell::new(None) };
}

/// Mount once the DOM is parsed, with a host config if one is pending,
/// else the inline `#page-config` block, else the defaults.
pub fn mount() -> Result<(), PageError> {
    let document = document()?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = self::document().and_then(|doc| attach(&doc)) {
                log::warn!("page setup failed: {err}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }
    attach(&document)
}

/// Install a host config. A mounted controller switches to it immediately;
/// otherwise it is kept for the attach that [`mount`] performs.
pub fn apply_config(config: PageConfig) -> Result<(), PageError> {
    let mounted = MOUNTED.with_borrow(Option::clone);
    if let Some(core) = mounted {
        core.borrow_mut().set_config(config);
        log::debug!("page config replaced on mounted controller");
        return Ok(());
    }
    PENDING_CONFIG.set(Some(config));
    mount()
}

fn document() -> Result<Document, PageError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PageError::Dom("no window document".into()))
}

// =============================================================
// Element lookup
// =============================================================

struct PageElements {
    input: HtmlElement,
    submit: HtmlElement,
    result: Option<HtmlElement>,
    file_input: Option<HtmlInputElement>,
    upload_label: Option<Element>,
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    Ok(document.query_selector(selector)?)
}

fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, PageError> {
    Ok(query(document, selector)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

fn read_inline_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
            PageConfig::default()
        }
    }
}

fn attach(document: &Document) -> Result<(), PageError> {
    let input = query_html(document, INPUT_SELECTOR)?;
    let submit = query_html(document, SUBMIT_SELECTOR)?;
    let result = query_html(document, RESULT_SELECTOR)?;
    let file_input = query(document, FILE_INPUT_SELECTOR)?.and_then(|el| el.dyn_ref::<HtmlInputElement>().cloned());
    let upload_label = query(document, UPLOAD_LABEL_SELECTOR)?;

    let presence = Presence {
        input: input.is_some(),
        submit: submit.is_some(),
        result: result.is_some(),
        badge: query(document, BADGE_SELECTOR)?.is_some(),
        reply: query(document, REPLY_SELECTOR)?.is_some(),
        file_input: file_input.is_some(),
        upload_label: upload_label.is_some(),
    };
    let (Some(plan), Some(input), Some(submit)) = (SetupPlan::from_presence(presence), input, submit) else {
        let selector = if presence.input { SUBMIT_SELECTOR } else { INPUT_SELECTOR };
        log::debug!("page controller not attached: {}", PageError::MissingElement { selector: selector.into() });
        return Ok(());
    };
    if input.has_attribute(MOUNTED_ATTR) {
        log::debug!("page controller already attached");
        return Ok(());
    }
    input.set_attribute(MOUNTED_ATTR, "mounted")?;

    let config = PENDING_CONFIG.take().unwrap_or_else(|| read_inline_config(document));
    let page = Page {
        elements: Rc::new(PageElements { input, submit, result, file_input, upload_label }),
        core: Rc::new(RefCell::new(ControllerCore::new(config, plan))),
    };
    page.wire(plan)?;
    MOUNTED.set(Some(Rc::clone(&page.core)));
    log::debug!("page controller attached: {plan:?}");
    Ok(())
}

// =============================================================
// Listeners and effects
// =============================================================

#[derive(Clone)]
struct Page {
    elements: Rc<PageElements>,
    core: Rc<RefCell<ControllerCore>>,
}

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PageError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn field_value(el: &HtmlElement) -> String {
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        el.text_content().unwrap_or_default()
    }
}

fn first_file_name(input: &HtmlInputElement) -> Option<String> {
    input.files().and_then(|files| files.get(0)).map(|file| file.name())
}

fn modifiers(ev: &KeyboardEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
}

impl Page {
    fn wire(&self, plan: SetupPlan) -> Result<(), PageError> {
        let input = &self.elements.input;

        if plan.validate_input {
            let page = self.clone();
            listen(input, "input", move |_| {
                let text = field_value(&page.elements.input);
                page.dispatch(|core| core.on_input(&text));
            })?;
        }

        if plan.upload_feedback {
            if let Some(file_input) = &self.elements.file_input {
                let page = self.clone();
                let chooser = file_input.clone();
                listen(file_input, "change", move |_| {
                    let name = first_file_name(&chooser);
                    page.dispatch(|core| core.on_files_changed(name.as_deref()));
                })?;
            }
        }

        if plan.submit_on_click {
            let page = self.clone();
            listen(&self.elements.submit, "click", move |_| {
                page.dispatch(ControllerCore::on_submit_click);
            })?;
        }

        if plan.submit_on_shortcut {
            let page = self.clone();
            listen(input, "keydown", move |ev| {
                let Some(ev) = ev.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = Key::new(ev.key());
                let mods = modifiers(ev);
                page.dispatch(|core| core.on_key_down(&key, mods));
            })?;
        }

        Ok(())
    }

    fn dispatch(&self, event: impl FnOnce(&mut ControllerCore) -> Vec<Effect>) {
        let effects = event(&mut *self.core.borrow_mut());
        for effect in effects {
            if let Err(err) = self.apply(effect) {
                log::warn!("page effect failed: {err}");
            }
        }
    }

    fn apply(&self, effect: Effect) -> Result<(), PageError> {
        let elements = &self.elements;
        match effect {
            Effect::SetInputBorder(color) => elements.input.style().set_property("border-color", &color)?,
            Effect::SetUploadLabel(text) => {
                if let Some(label) = &elements.upload_label {
                    label.set_text_content(Some(&text));
                }
            }
            Effect::SetSubmitDisabled(disabled) => self.set_submit_disabled(disabled)?,
            Effect::SetSubmitLabel(text) => elements.submit.set_text_content(Some(&text)),
            Effect::ScheduleReveal { delay_ms } => self.schedule_reveal(delay_ms),
            Effect::ApplyResultStyles(styles) => self.apply_result_styles(&styles)?,
            Effect::RequestAnimationFrame => self.request_frame()?,
            Effect::ScrollResultIntoView => {
                if let Some(result) = &elements.result {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    result.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Effect::ClickSubmit => elements.submit.click(),
        }
        Ok(())
    }

    fn set_submit_disabled(&self, disabled: bool) -> Result<(), PageError> {
        let submit = &self.elements.submit;
        if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            submit.set_attribute("disabled", "")?;
        } else {
            submit.remove_attribute("disabled")?;
        }
        Ok(())
    }

    fn apply_result_styles(&self, styles: &[StyleDecl]) -> Result<(), PageError> {
        let Some(result) = &self.elements.result else {
            return Ok(());
        };
        let style = result.style();
        for decl in styles {
            style.set_property(decl.property, &decl.value)?;
        }
        Ok(())
    }

    fn schedule_reveal(&self, delay_ms: u32) {
        let page = self.clone();
        let started_ms = Date::now();
        Timeout::new(delay_ms, move || {
            log::debug!("reveal fired after {:.0}ms", Date::now() - started_ms);
            page.dispatch(ControllerCore::on_delay_elapsed);
        })
        .forget();
    }

    fn request_frame(&self) -> Result<(), PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::Dom("no window".into()))?;
        let page = self.clone();
        let on_frame = Closure::once_into_js(move || page.dispatch(ControllerCore::on_animation_frame));
        window.request_animation_frame(on_frame.unchecked_ref())?;
        Ok(())
    }
}
