//! Tab Registry
//!
//! Built once from the document markup and kept for the widget's lifetime.

use scraper::{ElementRef, Html, Selector};

use crate::content::ContentFragment;
use crate::error::TabError;
use crate::marker::TabMarker;
use crate::source::SourceRef;
use crate::tab::{Tab, TabId};
use crate::Result;

#[derive(Debug)]
pub struct TabRegistry {
    /// Where the tab list was read from
    source: SourceRef,
    /// Tabs in strip order; a tab's index is its id
    tabs: Vec<Tab>,
}

impl TabRegistry {
    /// Parse `document` and build one tab per list item of the source container.
    ///
    /// Tabs without an anchor, or whose anchor does not resolve to a content
    /// block, are kept as degraded tabs with no content.
    pub fn build(document: &str, source: &SourceRef) -> Result<Self> {
        let doc = Html::parse_document(document);
        let container_sel = source.to_selector()?;
        let container = doc
            .select(&container_sel)
            .next()
            .ok_or_else(|| TabError::SourceNotFound(source.to_string()))?;

        let anchor_sel =
            Selector::parse("a").map_err(|_| TabError::InvalidSelector("a".to_string()))?;

        let mut tabs = Vec::new();
        let mut detached = Vec::new();
        for (index, item) in tab_items(container).into_iter().enumerate() {
            let id = TabId::new(index);

            let mut tab = match item.select(&anchor_sel).next() {
                Some(anchor) => {
                    let target = anchor.value().attr("href").map(str::to_string);
                    let content = target
                        .as_deref()
                        .and_then(|target| find_content(&doc, target, &mut detached));
                    let label = anchor.inner_html().trim().to_string();
                    Tab::new(id, label, target, content)
                }
                None => {
                    let label = normalize_whitespace(&item.text().collect::<Vec<_>>().join(" "));
                    Tab::new(id, label, None, None)
                }
            };

            if !tab.has_content() {
                tracing::debug!(tab_id = %id, target = ?tab.target(), "Tab has no content block");
            }

            tab.set_marker(TabMarker::Divider, true);
            tabs.push(tab);
        }

        tracing::info!(
            source = %source,
            tabs = tabs.len(),
            with_content = tabs.iter().filter(|t| t.has_content()).count(),
            "Built tab registry"
        );

        Ok(Self {
            source: source.clone(),
            tabs,
        })
    }

    pub fn source(&self) -> &SourceRef {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn ids(&self) -> impl Iterator<Item = TabId> + '_ {
        self.tabs.iter().map(Tab::id)
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.get(id.index())
    }

    /// Get a tab by ID
    pub fn get_tab(&self, id: TabId) -> Result<&Tab> {
        self.tab(id).ok_or(TabError::NotFound(id))
    }

    /// Content currently at home for the tab.
    ///
    /// Returns `None` for degraded tabs and while the content is displayed.
    pub fn content_for(&self, id: TabId) -> Option<&ContentFragment> {
        self.tab(id).and_then(Tab::content)
    }

    /// Hand the tab's content over for display
    pub fn take_content(&mut self, id: TabId) -> Option<ContentFragment> {
        self.tabs.get_mut(id.index()).and_then(Tab::take_content)
    }

    /// Return displayed content to its tab
    pub fn restore_content(&mut self, id: TabId, content: ContentFragment) -> Result<()> {
        let tab = self
            .tabs
            .get_mut(id.index())
            .ok_or(TabError::NotFound(id))?;

        if tab.is_content_home() {
            return Err(TabError::ContentAlreadyHome(id));
        }

        tab.put_content(content);
        Ok(())
    }

    /// Apply or clear a styling marker; returns true if it changed
    pub fn set_marker(&mut self, id: TabId, marker: TabMarker, present: bool) -> Result<bool> {
        let tab = self
            .tabs
            .get_mut(id.index())
            .ok_or(TabError::NotFound(id))?;
        Ok(tab.set_marker(marker, present))
    }
}

/// Direct `li` children of the container, or of its direct `ul`/`ol` children
fn tab_items(container: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let direct = list_items(container);
    if !direct.is_empty() {
        return direct;
    }

    container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "ul" | "ol"))
        .flat_map(list_items)
        .collect()
}

fn list_items(parent: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "li")
        .collect()
}

/// First block matching `target` that no earlier tab has already detached.
///
/// A block nested inside a detached block went with it and is skipped too.
fn find_content<'a>(
    doc: &'a Html,
    target: &str,
    detached: &mut Vec<ElementRef<'a>>,
) -> Option<ContentFragment> {
    let sel = Selector::parse(target).ok()?;
    let el = doc.select(&sel).find(|el| {
        !detached
            .iter()
            .any(|block| block == el || el.ancestors().any(|node| node == **block))
    })?;

    detached.push(el);
    Some(ContentFragment::new(target, el.html()))
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
