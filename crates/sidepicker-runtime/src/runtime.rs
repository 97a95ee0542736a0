//! Event loop driving one widget

use sidepicker_core::{AnimationHost, AnimationId, Sidepicker};
use tokio::time::{self, Instant};

use crate::event::WidgetEvent;
use crate::handle::EventStream;

pub struct SidepickerRuntime<H> {
    widget: Sidepicker<H>,
    stream: EventStream,
    /// Animation being waited on and when to stop waiting
    deadline: Option<(AnimationId, Instant)>,
}

impl<H: AnimationHost> SidepickerRuntime<H> {
    pub fn new(widget: Sidepicker<H>, stream: EventStream) -> Self {
        let runtime = Self {
            widget,
            stream,
            deadline: None,
        };
        runtime.publish();
        runtime
    }

    /// Process events until shutdown or until every handle is dropped, then
    /// hand the widget back.
    pub async fn run(mut self) -> Sidepicker<H> {
        tracing::debug!(inert = self.widget.is_inert(), "Sidepicker runtime started");

        loop {
            let event = match self.deadline {
                Some((id, deadline)) => {
                    match time::timeout_at(deadline, self.stream.events.recv()).await {
                        Ok(event) => event,
                        Err(_) => {
                            tracing::warn!(
                                animation_id = %id,
                                "Completion signal timed out, abandoning transition"
                            );
                            self.widget.abort_transition();
                            self.refresh_deadline();
                            self.publish();
                            continue;
                        }
                    }
                }
                None => self.stream.events.recv().await,
            };

            let Some(event) = event else {
                tracing::debug!("All sidepicker handles dropped");
                break;
            };

            if event == WidgetEvent::Shutdown {
                break;
            }

            self.apply(event);
            self.refresh_deadline();
            self.publish();
        }

        tracing::debug!("Sidepicker runtime stopped");
        self.widget
    }

    fn apply(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Activate(tab) => match self.widget.activate(tab) {
                Ok(outcome) => tracing::debug!(tab_id = %tab, outcome = ?outcome, "Activation handled"),
                Err(err) => tracing::warn!(tab_id = %tab, error = %err, "Activation rejected"),
            },
            WidgetEvent::Collapse => {
                let outcome = self.widget.collapse();
                tracing::debug!(outcome = ?outcome, "Collapse handled");
            }
            WidgetEvent::AnimationFinished(id) => {
                self.widget.animation_finished(id);
            }
            WidgetEvent::Shutdown => {}
        }
    }

    /// Start a new wait when a different animation is in flight
    fn refresh_deadline(&mut self) {
        self.deadline = match (self.widget.completion_budget(), self.deadline) {
            (Some((id, _)), Some((current, deadline))) if id == current => Some((id, deadline)),
            (Some((id, budget)), _) => Some((id, Instant::now() + budget)),
            (None, _) => None,
        };
    }

    fn publish(&self) {
        self.stream.state.send_replace(self.widget.state());
    }
}
