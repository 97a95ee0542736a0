//! Recording host used by the unit tests

use std::collections::HashSet;

use sidepicker_tabs::{ContentFragment, SourceRef, TabId, TabMarker};

use crate::config::Timing;
use crate::geometry::Region;
use crate::host::{AnimationHost, AnimationId};

pub(crate) const DOCUMENT: &str = r##"
    <html><body>
      <ul id="picker">
        <li><a href="#alpha">Alpha</a></li>
        <li><a href="#missing">Beta</a></li>
        <li><a href="#gamma">Gamma</a></li>
      </ul>
      <div id="alpha"><p>First</p></div>
      <div id="gamma"><p>Third</p></div>
    </body></html>
"##;

pub(crate) const VIEWPORT_WIDTH: f64 = 1120.0;
pub(crate) const TAB_HEIGHT: f64 = 40.0;

pub(crate) fn container() -> Region {
    Region::new(100.0, 20.0, 160.0, 413.0)
}

pub(crate) fn tab_region(tab: TabId) -> Region {
    Region::new(
        100.0 + tab.index() as f64 * TAB_HEIGHT,
        20.0,
        160.0,
        TAB_HEIGHT,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    Container(SourceRef),
    Mount {
        tab: TabId,
        origin: Region,
        content: Option<String>,
    },
    Unmount(TabId),
    Marker(TabId, TabMarker, bool),
    Width {
        id: AnimationId,
        target: f64,
        timing: Timing,
    },
    Height {
        id: AnimationId,
        target_height: f64,
        target_top: f64,
        timing: Timing,
    },
}

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub calls: Vec<HostCall>,
    pub unmeasurable: HashSet<TabId>,
    pub container_missing: bool,
    /// Where the panel is now; moves straight to each animation's target
    pub panel: Option<Region>,
}

impl FakeHost {
    pub fn animations(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Width { .. } | HostCall::Height { .. }))
            .count()
    }

    pub fn position(&self, call: &HostCall) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    pub fn mounted(&self) -> usize {
        let mounts = self
            .calls
            .iter()
            .filter(|c| matches!(c, HostCall::Mount { .. }))
            .count();
        let unmounts = self
            .calls
            .iter()
            .filter(|c| matches!(c, HostCall::Unmount(_)))
            .count();
        mounts - unmounts
    }
}

impl AnimationHost for FakeHost {
    fn mark_container(&mut self, source: &SourceRef) {
        self.calls.push(HostCall::Container(source.clone()));
    }

    fn viewport_width(&self) -> Option<f64> {
        Some(VIEWPORT_WIDTH)
    }

    fn container_region(&self) -> Option<Region> {
        if self.container_missing {
            None
        } else {
            Some(container())
        }
    }

    fn tab_region(&self, tab: TabId) -> Option<Region> {
        if self.unmeasurable.contains(&tab) {
            None
        } else {
            Some(tab_region(tab))
        }
    }

    fn panel_region(&self) -> Option<Region> {
        self.panel
    }

    fn mount_overlay(&mut self, tab: TabId, origin: Region, content: Option<&ContentFragment>) {
        self.calls.push(HostCall::Mount {
            tab,
            origin,
            content: content.map(|c| c.html().to_string()),
        });
        self.panel = Some(origin);
    }

    fn unmount_overlay(&mut self, tab: TabId) {
        self.calls.push(HostCall::Unmount(tab));
        self.panel = None;
    }

    fn set_marker(&mut self, tab: TabId, marker: TabMarker, present: bool) {
        self.calls.push(HostCall::Marker(tab, marker, present));
    }

    fn animate_width(&mut self, id: AnimationId, target_width: f64, timing: Timing) {
        self.calls.push(HostCall::Width {
            id,
            target: target_width,
            timing,
        });
        self.panel = self.panel.map(|p| p.with_width(target_width));
    }

    fn animate_height_and_position(
        &mut self,
        id: AnimationId,
        target_height: f64,
        target_top: f64,
        timing: Timing,
    ) {
        self.calls.push(HostCall::Height {
            id,
            target_height,
            target_top,
            timing,
        });
        self.panel = self
            .panel
            .map(|p| p.with_height_and_top(target_height, target_top));
    }
}

/// Lets a test keep the host after the widget that borrowed it is gone
impl AnimationHost for &mut FakeHost {
    fn mark_container(&mut self, source: &SourceRef) {
        (**self).mark_container(source)
    }

    fn viewport_width(&self) -> Option<f64> {
        (**self).viewport_width()
    }

    fn container_region(&self) -> Option<Region> {
        (**self).container_region()
    }

    fn tab_region(&self, tab: TabId) -> Option<Region> {
        (**self).tab_region(tab)
    }

    fn panel_region(&self) -> Option<Region> {
        (**self).panel_region()
    }

    fn mount_overlay(&mut self, tab: TabId, origin: Region, content: Option<&ContentFragment>) {
        (**self).mount_overlay(tab, origin, content)
    }

    fn unmount_overlay(&mut self, tab: TabId) {
        (**self).unmount_overlay(tab)
    }

    fn set_marker(&mut self, tab: TabId, marker: TabMarker, present: bool) {
        (**self).set_marker(tab, marker, present)
    }

    fn animate_width(&mut self, id: AnimationId, target_width: f64, timing: Timing) {
        (**self).animate_width(id, target_width, timing)
    }

    fn animate_height_and_position(
        &mut self,
        id: AnimationId,
        target_height: f64,
        target_top: f64,
        timing: Timing,
    ) {
        (**self).animate_height_and_position(id, target_height, target_top, timing)
    }
}
