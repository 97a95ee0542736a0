//! Messages consumed by the runtime

use sidepicker_core::{AnimationId, TabId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// User selected a tab
    Activate(TabId),
    /// Close the open panel
    Collapse,
    /// The host finished an animation
    AnimationFinished(AnimationId),
    /// Stop the runtime and hand the widget back
    Shutdown,
}
