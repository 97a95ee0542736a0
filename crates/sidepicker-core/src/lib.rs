//! Sidepicker Core
//!
//! The expansion state machine behind the side-picker widget. Selecting a
//! tab grows an overlay panel out of it (width first, then height); selecting
//! another tab collapses the current panel (height first, then width) before
//! opening the next one. All visual work goes through an [`AnimationHost`].

mod config;
mod controller;
mod easing;
mod error;
mod geometry;
mod host;
mod state;
mod widget;

#[cfg(test)]
mod test_support;

pub use config::{SidepickerConfig, Timing};
pub use controller::{DropReason, ExpansionController, Outcome};
pub use easing::Easing;
pub use error::CoreError;
pub use geometry::{
    Region, CLOSE_BORDER_ADJUST, HORIZONTAL_MARGIN, OPEN_BORDER_ADJUST, PANEL_PADDING,
};
pub use host::{AnimationHost, AnimationId};
pub use state::{ExpansionState, Phase};
pub use widget::Sidepicker;

// Re-export the registry types hosts and callers need
pub use sidepicker_tabs::{ContentFragment, SourceRef, Tab, TabError, TabId, TabMarker, TabRegistry};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
