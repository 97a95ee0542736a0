//! Cloneable handle for input sources and animation hosts

use sidepicker_core::{AnimationId, ExpansionState, TabId};
use tokio::sync::{mpsc, watch};

use crate::error::RuntimeError;
use crate::event::WidgetEvent;
use crate::Result;

#[derive(Debug, Clone)]
pub struct SidepickerHandle {
    events: mpsc::UnboundedSender<WidgetEvent>,
    state: watch::Receiver<ExpansionState>,
}

/// Receiving half, consumed by [`SidepickerRuntime::new`]
///
/// [`SidepickerRuntime::new`]: crate::SidepickerRuntime::new
#[derive(Debug)]
pub struct EventStream {
    pub(crate) events: mpsc::UnboundedReceiver<WidgetEvent>,
    pub(crate) state: watch::Sender<ExpansionState>,
}

impl SidepickerHandle {
    /// Create a handle and the stream a runtime will consume.
    ///
    /// The handle exists before the widget so a host can hold a clone for
    /// reporting completions.
    pub fn channel() -> (SidepickerHandle, EventStream) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ExpansionState::default());

        (
            SidepickerHandle {
                events: events_tx,
                state: state_rx,
            },
            EventStream {
                events: events_rx,
                state: state_tx,
            },
        )
    }

    pub fn send(&self, event: WidgetEvent) -> Result<()> {
        self.events.send(event).map_err(|_| RuntimeError::Closed)
    }

    pub fn activate(&self, tab: TabId) -> Result<()> {
        self.send(WidgetEvent::Activate(tab))
    }

    pub fn collapse(&self) -> Result<()> {
        self.send(WidgetEvent::Collapse)
    }

    pub fn animation_finished(&self, id: AnimationId) -> Result<()> {
        self.send(WidgetEvent::AnimationFinished(id))
    }

    pub fn shutdown(&self) -> Result<()> {
        self.send(WidgetEvent::Shutdown)
    }

    /// Latest published state
    pub fn state(&self) -> ExpansionState {
        self.state.borrow().clone()
    }

    /// Wait until the published state satisfies `predicate`
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&ExpansionState) -> bool,
    ) -> Result<ExpansionState> {
        let mut state = self.state.clone();
        let current = state
            .wait_for(predicate)
            .await
            .map_err(|_| RuntimeError::Closed)?;
        Ok(current.clone())
    }
}
