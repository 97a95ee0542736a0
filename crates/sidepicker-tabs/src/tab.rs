//! Tab data structure

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::ContentFragment;
use crate::marker::TabMarker;

/// Position of a tab in the strip, assigned once at registry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(usize);

impl TabId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize)]
pub struct Tab {
    /// Stable identifier
    id: TabId,
    /// Display label, taken from the anchor markup
    label: String,
    /// Anchor reference pointing at the content block
    target: Option<String>,
    /// Whether a content block was found at construction
    has_content: bool,
    /// The content while it is at home; `None` while displayed or missing
    #[serde(skip)]
    content: Option<ContentFragment>,
    /// Styling markers currently applied
    markers: BTreeSet<TabMarker>,
}

impl Tab {
    pub(crate) fn new(
        id: TabId,
        label: String,
        target: Option<String>,
        content: Option<ContentFragment>,
    ) -> Self {
        Self {
            id,
            label,
            target,
            has_content: content.is_some(),
            content,
            markers: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// True when the tab owns its content right now
    pub fn is_content_home(&self) -> bool {
        self.content.is_some()
    }

    pub fn has_marker(&self, marker: TabMarker) -> bool {
        self.markers.contains(&marker)
    }

    pub fn markers(&self) -> impl Iterator<Item = TabMarker> + '_ {
        self.markers.iter().copied()
    }

    pub(crate) fn content(&self) -> Option<&ContentFragment> {
        self.content.as_ref()
    }

    pub(crate) fn take_content(&mut self) -> Option<ContentFragment> {
        self.content.take()
    }

    pub(crate) fn put_content(&mut self, content: ContentFragment) -> Option<ContentFragment> {
        self.content.replace(content)
    }

    /// Returns true if the marker set changed
    pub(crate) fn set_marker(&mut self, marker: TabMarker, present: bool) -> bool {
        if present {
            self.markers.insert(marker)
        } else {
            self.markers.remove(&marker)
        }
    }
}
