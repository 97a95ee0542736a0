//! Layout regions and the fixed layout constants

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Horizontal space left free beside the fully opened panel
pub const HORIZONTAL_MARGIN: f64 = 120.0;
/// Panel padding subtracted from every height target
pub const PANEL_PADDING: f64 = 10.0;
/// Border compensation for the opened height
pub const OPEN_BORDER_ADJUST: f64 = 3.0;
/// Border compensation for the collapsed height
pub const CLOSE_BORDER_ADJUST: f64 = 2.0;

/// An on-screen rectangle, as measured by the host or targeted by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    pub fn with_height_and_top(self, height: f64, top: f64) -> Self {
        Self {
            height,
            top,
            ..self
        }
    }

    /// Intermediate frame between `self` and `to`, for hosts that tween by hand.
    pub fn interpolate(&self, to: &Region, progress: f64, easing: Easing) -> Region {
        let k = easing.apply(progress);
        let lerp = |a: f64, b: f64| a + (b - a) * k;
        Region {
            top: lerp(self.top, to.top),
            left: lerp(self.left, to.left),
            width: lerp(self.width, to.width),
            height: lerp(self.height, to.height),
        }
    }
}

/// Width the panel grows to on open
pub(crate) fn open_width_target(viewport_width: f64) -> f64 {
    (viewport_width - HORIZONTAL_MARGIN).max(0.0)
}

/// Height the panel grows to on open, given the tab strip container
pub(crate) fn open_height_target(container: &Region) -> f64 {
    (container.height - OPEN_BORDER_ADJUST - PANEL_PADDING).max(0.0)
}

/// Height the panel shrinks back to on close, given the originating tab
pub(crate) fn close_height_target(tab: &Region) -> f64 {
    (tab.height - CLOSE_BORDER_ADJUST - PANEL_PADDING).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(open_width_target(1024.0), 904.0);
        assert_eq!(open_width_target(80.0), 0.0);

        let container = Region::new(40.0, 0.0, 200.0, 413.0);
        assert_eq!(open_height_target(&container), 400.0);

        let tab = Region::new(40.0, 0.0, 200.0, 32.0);
        assert_eq!(close_height_target(&tab), 20.0);
        assert_eq!(close_height_target(&Region::default()), 0.0);
    }

    #[test]
    fn test_interpolate() {
        let from = Region::new(100.0, 10.0, 0.0, 40.0);
        let to = Region::new(20.0, 10.0, 800.0, 400.0);

        assert_eq!(from.interpolate(&to, 0.0, Easing::EaseOut), from);
        assert_eq!(from.interpolate(&to, 1.0, Easing::EaseOut), to);

        let mid = from.interpolate(&to, 0.5, Easing::Linear);
        assert_eq!(mid, Region::new(60.0, 10.0, 400.0, 220.0));
    }

    #[test]
    fn test_edges() {
        let region = Region::new(10.0, 5.0, 100.0, 50.0);
        assert_eq!(region.right(), 105.0);
        assert_eq!(region.bottom(), 60.0);
        assert_eq!(region.with_width(0.0).width, 0.0);
        assert_eq!(
            region.with_height_and_top(5.0, 1.0),
            Region::new(1.0, 5.0, 100.0, 5.0)
        );
    }
}
