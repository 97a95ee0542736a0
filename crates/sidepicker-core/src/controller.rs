//! Expansion Controller
//!
//! Drives the open/close/switch sequences. Each sequence is two animations
//! run strictly one after the other; the controller starts one, returns to
//! the caller, and resumes when the host reports that animation finished.

use std::time::Duration;

use sidepicker_tabs::{ContentFragment, TabId, TabMarker, TabRegistry};

use crate::config::{SidepickerConfig, Timing};
use crate::geometry::{self, Region};
use crate::host::{AnimationHost, AnimationId};
use crate::state::{ExpansionState, InFlight, Phase, Step};
use crate::Result;

/// What a request did to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Open sequence started for the tab
    Opening(TabId),
    /// Close sequence started with nothing queued behind it
    Closing(TabId),
    /// Close of `from` started; `to` opens once it finishes
    Switching { from: TabId, to: TabId },
    /// The request had no effect
    Dropped(DropReason),
    /// The transition was abandoned and the widget is idle again
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// An animation is in flight
    InTransition,
    /// The requested tab is already open
    AlreadyOpen,
    /// No panel to close
    NothingOpen,
    /// The widget never initialized
    Inert,
}

/// Overlay on screen and the content lent to it
#[derive(Debug)]
struct Overlay {
    tab: TabId,
    content: Option<ContentFragment>,
}

pub struct ExpansionController<H> {
    registry: TabRegistry,
    host: H,
    config: SidepickerConfig,
    state: ExpansionState,
    /// Present from open start to close end
    overlay: Option<Overlay>,
    next_animation: u64,
}

impl<H: AnimationHost> ExpansionController<H> {
    pub fn new(registry: TabRegistry, mut host: H, config: SidepickerConfig) -> Self {
        host.mark_container(registry.source());
        for tab in registry.tabs() {
            for marker in tab.markers() {
                host.set_marker(tab.id(), marker, true);
            }
        }

        Self {
            registry,
            host,
            config,
            state: ExpansionState::default(),
            overlay: None,
            next_animation: 0,
        }
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SidepickerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Content attached to the overlay right now
    pub fn displayed_content(&self) -> Option<&ContentFragment> {
        self.overlay.as_ref().and_then(|o| o.content.as_ref())
    }

    /// The in-flight animation and how long to wait for it before giving up
    pub fn completion_budget(&self) -> Option<(AnimationId, Duration)> {
        self.state.in_flight.map(|f| {
            (
                f.id,
                f.timing.duration() + self.config.completion_timeout(),
            )
        })
    }

    /// Handle a user selecting `tab`.
    ///
    /// Activations arriving while a transition runs are dropped, not queued.
    pub fn on_tab_activated(&mut self, tab: TabId) -> Result<Outcome> {
        self.registry.get_tab(tab)?;

        let outcome = match (self.state.phase, self.state.active_tab) {
            (Phase::Idle, _) => self.begin_open(tab),
            (Phase::Open, None) => self.abort("open phase without an active tab"),
            (Phase::Open, Some(active)) if active == tab => {
                tracing::debug!(tab_id = %tab, "Tab already open, activation ignored");
                Outcome::Dropped(DropReason::AlreadyOpen)
            }
            (Phase::Open, Some(active)) => self.begin_close(active, Some(tab)),
            (phase, _) => {
                tracing::debug!(tab_id = %tab, phase = %phase, "Dropped activation during transition");
                Outcome::Dropped(DropReason::InTransition)
            }
        };

        Ok(outcome)
    }

    /// Close the open panel without opening another one
    pub fn collapse(&mut self) -> Outcome {
        match (self.state.phase, self.state.active_tab) {
            (Phase::Open, Some(active)) => self.begin_close(active, None),
            (Phase::Idle, _) => Outcome::Dropped(DropReason::NothingOpen),
            (phase, _) => {
                tracing::debug!(phase = %phase, "Dropped collapse during transition");
                Outcome::Dropped(DropReason::InTransition)
            }
        }
    }

    /// Completion signal from the host.
    ///
    /// Returns false if `id` is not the animation being waited on.
    pub fn on_animation_finished(&mut self, id: AnimationId) -> bool {
        let in_flight = match self.state.in_flight {
            Some(in_flight) if in_flight.id == id => in_flight,
            _ => {
                tracing::debug!(animation_id = %id, "Ignoring stale completion signal");
                return false;
            }
        };

        self.state.in_flight = None;
        self.state.panel_geometry = Some(in_flight.target);

        match (self.state.phase, in_flight.step) {
            (Phase::Opening, Step::Width) => self.open_vertical(),
            (Phase::Opening, Step::HeightAndPosition) => self.finish_open(),
            (phase, Step::HeightAndPosition) if phase.is_closing() => self.close_horizontal(),
            (phase, Step::Width) if phase.is_closing() => self.finish_close(),
            (phase, step) => {
                tracing::warn!(phase = %phase, step = ?step, "Completion signal in unexpected phase");
            }
        }

        true
    }

    /// Abandon whatever is on screen and return to idle
    pub fn abort_transition(&mut self) -> Outcome {
        if self.state.is_idle() && self.overlay.is_none() {
            return Outcome::Dropped(DropReason::NothingOpen);
        }
        self.abort("transition abandoned")
    }

    fn begin_open(&mut self, tab: TabId) -> Outcome {
        let Some(tab_region) = self.host.tab_region(tab) else {
            return self.abort("tab region unavailable");
        };
        let Some(viewport_width) = self.host.viewport_width() else {
            return self.abort("viewport width unavailable");
        };

        let origin = tab_region.with_width(0.0);
        let content = self.registry.take_content(tab);
        self.host.mount_overlay(tab, origin, content.as_ref());
        self.overlay = Some(Overlay { tab, content });
        self.mark(tab, TabMarker::Divider, false);

        self.state.phase = Phase::Opening;
        self.state.active_tab = Some(tab);
        self.state.pending_tab = None;
        self.state.panel_geometry = Some(origin);

        tracing::debug!(tab_id = %tab, "Opening panel");

        let target = origin.with_width(geometry::open_width_target(viewport_width));
        self.start(Step::Width, target, self.config.open_width);

        Outcome::Opening(tab)
    }

    fn open_vertical(&mut self) {
        let Some(container) = self.host.container_region() else {
            self.abort("container region unavailable");
            return;
        };

        let Some(current) = self.host.panel_region() else {
            self.abort("panel region unavailable");
            return;
        };

        let target =
            current.with_height_and_top(geometry::open_height_target(&container), container.top);
        self.start(Step::HeightAndPosition, target, self.config.open_height);
    }

    fn finish_open(&mut self) {
        if let Some(tab) = self.state.active_tab {
            self.mark(tab, TabMarker::Expanded, true);
            tracing::info!(tab_id = %tab, "Panel opened");
        }
        self.state.phase = Phase::Open;
    }

    fn begin_close(&mut self, active: TabId, pending: Option<TabId>) -> Outcome {
        let Some(tab_region) = self.host.tab_region(active) else {
            return self.abort("tab region unavailable");
        };
        let Some(current) = self.host.panel_region() else {
            return self.abort("panel region unavailable");
        };

        self.mark(active, TabMarker::Expanded, false);

        self.state.phase = if pending.is_some() {
            Phase::SwitchPending
        } else {
            Phase::Closing
        };
        self.state.pending_tab = pending;

        tracing::debug!(tab_id = %active, pending = ?pending, "Closing panel");

        let target = current
            .with_height_and_top(geometry::close_height_target(&tab_region), tab_region.top);
        self.start(Step::HeightAndPosition, target, self.config.close_height);

        match pending {
            Some(to) => Outcome::Switching { from: active, to },
            None => Outcome::Closing(active),
        }
    }

    fn close_horizontal(&mut self) {
        let Some(current) = self.host.panel_region() else {
            self.abort("panel region unavailable");
            return;
        };
        self.start(Step::Width, current.with_width(0.0), self.config.close_width);
    }

    fn finish_close(&mut self) {
        let closed = self.state.active_tab;
        let pending = self.state.pending_tab.take();

        self.release_overlay();
        self.state = ExpansionState::default();

        if let Some(tab) = closed {
            tracing::info!(tab_id = %tab, "Panel closed");
        }

        // Switching to the tab being closed cancels the reopen
        if let Some(next) = pending.filter(|next| Some(*next) != closed) {
            self.begin_open(next);
        }
    }

    fn start(&mut self, step: Step, target: Region, timing: Timing) {
        self.next_animation += 1;
        let id = AnimationId::new(self.next_animation);
        self.state.in_flight = Some(InFlight {
            id,
            step,
            target,
            timing,
        });

        match step {
            Step::Width => self.host.animate_width(id, target.width, timing),
            Step::HeightAndPosition => {
                self.host
                    .animate_height_and_position(id, target.height, target.top, timing)
            }
        }
    }

    fn abort(&mut self, reason: &str) -> Outcome {
        tracing::warn!(
            phase = %self.state.phase,
            tab_id = ?self.state.active_tab,
            reason,
            "Aborting transition"
        );
        self.release_overlay();
        self.state = ExpansionState::default();
        Outcome::Aborted
    }

    /// Restore the tab's markers, remove the overlay and send content home
    fn release_overlay(&mut self) {
        let Some(overlay) = self.overlay.take() else {
            return;
        };

        self.mark(overlay.tab, TabMarker::Expanded, false);
        self.mark(overlay.tab, TabMarker::Divider, true);
        self.host.unmount_overlay(overlay.tab);

        if let Some(content) = overlay.content {
            if let Err(err) = self.registry.restore_content(overlay.tab, content) {
                tracing::warn!(tab_id = %overlay.tab, error = %err, "Could not return content to its tab");
            }
        }
    }

    fn mark(&mut self, tab: TabId, marker: TabMarker, present: bool) {
        if let Ok(true) = self.registry.set_marker(tab, marker, present) {
            self.host.set_marker(tab, marker, present);
        }
    }
}
