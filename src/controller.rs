//! Page controller core: the loading flag, the reveal phase, and the
//! translation of page events into DOM effects.
//!
//! Nothing here touches the browser. The `dom` host feeds events in, applies
//! the returned [`Effect`]s in order, and calls back into the core when a
//! timer or animation frame it was asked to schedule fires.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::keys::{Key, Modifiers, is_submit_shortcut};
use crate::reveal::{RevealPhase, StyleDecl, shown_styles, staged_styles};
use crate::setup::SetupPlan;
use crate::upload::label_text;
use crate::validate::assess;

/// A DOM mutation or scheduling request for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetInputBorder(String),
    SetUploadLabel(String),
    SetSubmitDisabled(bool),
    SetSubmitLabel(String),
    /// Call [`ControllerCore::on_delay_elapsed`] after `delay_ms`.
    ScheduleReveal { delay_ms: u32 },
    ApplyResultStyles(Vec<StyleDecl>),
    /// Call [`ControllerCore::on_animation_frame`] on the next frame.
    RequestAnimationFrame,
    /// Smooth-scroll the result card to the top of the viewport.
    ScrollResultIntoView,
    /// Dispatch a synthetic click on the submit control.
    ClickSubmit,
}

#[derive(Debug, Clone)]
pub struct ControllerCore {
    config: PageConfig,
    has_result: bool,
    loading: bool,
    reveal: RevealPhase,
}

impl ControllerCore {
    #[must_use]
    pub fn new(config: PageConfig, plan: SetupPlan) -> Self {
        Self { config, has_result: plan.reveal_result, loading: false, reveal: RevealPhase::Hidden }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// True only between a submit click and the end of its delay.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal
    }

    // --- Config ---

    /// Replace the config of a running controller. Takes effect from the next
    /// event; a delay already scheduled keeps its original length.
    pub fn set_config(&mut self, config: PageConfig) {
        self.config = config;
    }

    // --- Events ---

    pub fn on_input(&mut self, text: &str) -> Vec<Effect> {
        let validity = assess(text, self.config.min_input_chars);
        vec![Effect::SetInputBorder(validity.border(&self.config).to_owned())]
    }

    pub fn on_files_changed(&mut self, first_file_name: Option<&str>) -> Vec<Effect> {
        vec![Effect::SetUploadLabel(label_text(first_file_name, &self.config.upload_placeholder))]
    }

    /// Enter the loading state and ask for the reveal timer. A click while
    /// already loading is ignored, matching a disabled button.
    pub fn on_submit_click(&mut self) -> Vec<Effect> {
        if self.loading {
            return Vec::new();
        }
        self.loading = true;
        let mut effects = self.loading_effects();
        effects.push(Effect::ScheduleReveal { delay_ms: self.config.submit_delay_ms });
        effects
    }

    /// Leave the loading state and stage the result card.
    pub fn on_delay_elapsed(&mut self) -> Vec<Effect> {
        if !self.loading {
            return Vec::new();
        }
        self.loading = false;
        let mut effects = self.loading_effects();
        if self.has_result {
            self.reveal = RevealPhase::Staged;
            effects.push(Effect::ApplyResultStyles(staged_styles(&self.config)));
            effects.push(Effect::RequestAnimationFrame);
            effects.push(Effect::ScrollResultIntoView);
        }
        effects
    }

    /// Second half of the reveal: start the transition.
    pub fn on_animation_frame(&mut self) -> Vec<Effect> {
        if self.reveal != RevealPhase::Staged {
            return Vec::new();
        }
        self.reveal = RevealPhase::Shown;
        vec![Effect::ApplyResultStyles(shown_styles(&self.config))]
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Effect> {
        if is_submit_shortcut(key, modifiers) {
            vec![Effect::ClickSubmit]
        } else {
            Vec::new()
        }
    }

    fn loading_effects(&self) -> Vec<Effect> {
        let label = if self.loading { &self.config.loading_label } else { &self.config.idle_label };
        vec![Effect::SetSubmitDisabled(self.loading), Effect::SetSubmitLabel(label.clone())]
    }
}
