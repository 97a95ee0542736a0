//! Side-picker widget
//!
//! Attaches to existing markup. A widget whose source container cannot be
//! found logs the failure and stays inert: every request is dropped.

use std::time::Duration;

use sidepicker_tabs::{SourceRef, TabId, TabRegistry};

use crate::config::SidepickerConfig;
use crate::controller::{DropReason, ExpansionController, Outcome};
use crate::host::{AnimationHost, AnimationId};
use crate::state::ExpansionState;
use crate::Result;

pub struct Sidepicker<H> {
    controller: Option<ExpansionController<H>>,
}

impl<H: AnimationHost> Sidepicker<H> {
    pub fn attach(
        document: &str,
        source: impl Into<SourceRef>,
        host: H,
        config: SidepickerConfig,
    ) -> Self {
        let source = source.into();

        match TabRegistry::build(document, &source) {
            Ok(registry) => Self {
                controller: Some(ExpansionController::new(registry, host, config)),
            },
            Err(err) => {
                tracing::warn!(
                    source = %source,
                    error = %err,
                    "Sidepicker requires existing markup, widget left inert"
                );
                Self { controller: None }
            }
        }
    }

    pub fn is_inert(&self) -> bool {
        self.controller.is_none()
    }

    pub fn controller(&self) -> Option<&ExpansionController<H>> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut ExpansionController<H>> {
        self.controller.as_mut()
    }

    /// Snapshot of the expansion state; an inert widget is always idle
    pub fn state(&self) -> ExpansionState {
        self.controller
            .as_ref()
            .map(|c| c.state().clone())
            .unwrap_or_default()
    }

    pub fn activate(&mut self, tab: TabId) -> Result<Outcome> {
        match self.controller.as_mut() {
            Some(controller) => controller.on_tab_activated(tab),
            None => Ok(Outcome::Dropped(DropReason::Inert)),
        }
    }

    pub fn collapse(&mut self) -> Outcome {
        match self.controller.as_mut() {
            Some(controller) => controller.collapse(),
            None => Outcome::Dropped(DropReason::Inert),
        }
    }

    pub fn animation_finished(&mut self, id: AnimationId) -> bool {
        self.controller
            .as_mut()
            .is_some_and(|c| c.on_animation_finished(id))
    }

    pub fn abort_transition(&mut self) -> Outcome {
        match self.controller.as_mut() {
            Some(controller) => controller.abort_transition(),
            None => Outcome::Dropped(DropReason::Inert),
        }
    }

    pub fn completion_budget(&self) -> Option<(AnimationId, Duration)> {
        self.controller.as_ref().and_then(|c| c.completion_budget())
    }
}
