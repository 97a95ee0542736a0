//! The animation host contract
//!
//! The controller never touches the document itself. It measures layout,
//! mounts the overlay and starts animations through this trait, and the
//! host reports each animation's end back with the [`AnimationId`] it was
//! given (see [`ExpansionController::on_animation_finished`]).
//!
//! [`ExpansionController::on_animation_finished`]: crate::ExpansionController::on_animation_finished

use serde::{Deserialize, Serialize};
use sidepicker_tabs::{ContentFragment, SourceRef, TabId, TabMarker};

use crate::config::Timing;
use crate::geometry::Region;

/// Completion token for one running animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationId(u64);

impl AnimationId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait AnimationHost {
    /// Tag the source container as a side-picker. Called once, when a
    /// widget attaches; an inert widget never calls it.
    fn mark_container(&mut self, source: &SourceRef);

    /// Width of the visible viewport, or `None` if it cannot be measured
    fn viewport_width(&self) -> Option<f64>;

    /// Live region of the tab strip container
    fn container_region(&self) -> Option<Region>;

    /// Live region of a tab element
    fn tab_region(&self, tab: TabId) -> Option<Region>;

    /// Live region of the mounted panel, or `None` when nothing is mounted
    /// or it cannot be measured
    fn panel_region(&self) -> Option<Region>;

    /// Insert the selection markers and the panel at `origin`, with the tab's
    /// content attached when there is any.
    fn mount_overlay(&mut self, tab: TabId, origin: Region, content: Option<&ContentFragment>);

    /// Remove everything `mount_overlay` inserted
    fn unmount_overlay(&mut self, tab: TabId);

    fn set_marker(&mut self, tab: TabId, marker: TabMarker, present: bool);

    /// Start animating the panel width. Must eventually report `id` as finished.
    fn animate_width(&mut self, id: AnimationId, target_width: f64, timing: Timing);

    /// Start animating the panel height and top edge together. Must eventually
    /// report `id` as finished.
    fn animate_height_and_position(
        &mut self,
        id: AnimationId,
        target_height: f64,
        target_top: f64,
        timing: Timing,
    );
}
