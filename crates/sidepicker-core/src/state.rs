//! Expansion State Machine
//!
//! ```text
//! Idle --activate--> Opening --width done--> Opening --height done--> Open
//! Open --collapse--> Closing --height done--> Closing --width done--> Idle
//! Open --activate other--> SwitchPending --...--> Idle --> Opening (pending tab)
//! ```

use serde::{Deserialize, Serialize};
use sidepicker_tabs::TabId;

use crate::config::Timing;
use crate::geometry::Region;
use crate::host::AnimationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No panel on screen
    #[default]
    Idle,
    /// Panel growing out of the active tab
    Opening,
    /// Panel fully open
    Open,
    /// Panel shrinking back into the active tab
    Closing,
    /// Closing, with another tab queued to open afterwards
    SwitchPending,
}

impl Phase {
    /// Activations are dropped while this is true
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Phase::Opening | Phase::Closing | Phase::SwitchPending)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, Phase::Closing | Phase::SwitchPending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Opening => "opening",
            Phase::Open => "open",
            Phase::Closing => "closing",
            Phase::SwitchPending => "switch_pending",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which sub-animation of a transition is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Step {
    Width,
    HeightAndPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct InFlight {
    pub(crate) id: AnimationId,
    pub(crate) step: Step,
    /// Geometry the panel reaches when this step completes
    pub(crate) target: Region,
    pub(crate) timing: Timing,
}

/// The widget's single piece of mutable state
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExpansionState {
    pub(crate) phase: Phase,
    /// Tab whose panel is on screen
    pub(crate) active_tab: Option<TabId>,
    /// Tab to open once the current close finishes
    pub(crate) pending_tab: Option<TabId>,
    /// Panel geometry as of the last finished step of the current transition
    pub(crate) panel_geometry: Option<Region>,
    pub(crate) in_flight: Option<InFlight>,
}

impl ExpansionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.active_tab
    }

    pub fn pending_tab(&self) -> Option<TabId> {
        self.pending_tab
    }

    pub fn panel_geometry(&self) -> Option<Region> {
        self.panel_geometry
    }

    /// Animation whose completion the controller is waiting for
    pub fn in_flight(&self) -> Option<AnimationId> {
        self.in_flight.map(|f| f.id)
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitioning_phases() {
        assert!(!Phase::Idle.is_transitioning());
        assert!(Phase::Opening.is_transitioning());
        assert!(!Phase::Open.is_transitioning());
        assert!(Phase::Closing.is_transitioning());
        assert!(Phase::SwitchPending.is_transitioning());
        assert!(Phase::SwitchPending.is_closing());
        assert!(!Phase::Opening.is_closing());
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = ExpansionState::default();
        assert!(state.is_idle());
        assert!(state.active_tab().is_none());
        assert!(state.pending_tab().is_none());
        assert!(state.in_flight().is_none());
    }

    #[test]
    fn test_state_serializes() {
        let state = ExpansionState {
            phase: Phase::SwitchPending,
            active_tab: Some(TabId::new(0)),
            pending_tab: Some(TabId::new(2)),
            panel_geometry: None,
            in_flight: Some(InFlight {
                id: AnimationId::new(7),
                step: Step::HeightAndPosition,
                target: Region::new(100.0, 20.0, 1000.0, 28.0),
                timing: Timing::ease_out(500),
            }),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["phase"], "switch_pending");
        assert_eq!(json["pending_tab"], 2);
        assert_eq!(json["in_flight"]["id"], 7);
        assert_eq!(json["in_flight"]["step"], "height_and_position");
        assert_eq!(json["in_flight"]["timing"]["easing"], "ease_out");
    }
}
