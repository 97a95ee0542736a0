//! Reference to the container holding the tab list

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

/// How the widget locates its source container in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SourceRef {
    /// Element id, without the leading `#`
    Id(String),
    /// Any CSS selector; the first match wins
    Selector(String),
}

impl SourceRef {
    pub fn id(id: impl Into<String>) -> Self {
        SourceRef::Id(id.into())
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        SourceRef::Selector(selector.into())
    }

    /// Compile the reference into a selector usable against a parsed document
    pub fn to_selector(&self) -> Result<Selector> {
        let css = match self {
            SourceRef::Id(id) => format!("[id=\"{}\"]", escape_attr(id)),
            SourceRef::Selector(css) => css.clone(),
        };
        Selector::parse(&css).map_err(|_| TabError::InvalidSelector(css.clone()))
    }
}

impl From<&str> for SourceRef {
    fn from(id: &str) -> Self {
        SourceRef::Id(id.to_string())
    }
}

impl From<String> for SourceRef {
    fn from(id: String) -> Self {
        SourceRef::Id(id)
    }
}

impl std::fmt::Display for SourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRef::Id(id) => write!(f, "#{}", id),
            SourceRef::Selector(css) => write!(f, "{}", css),
        }
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
