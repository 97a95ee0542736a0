//! Styling hooks toggled on tab elements

use serde::{Deserialize, Serialize};

/// Named visual-state markers a host maps onto its own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabMarker {
    /// Separator edge; present on every collapsed tab
    Divider,
    /// Set once the tab's panel has fully opened
    Expanded,
}

impl TabMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabMarker::Divider => "divider",
            TabMarker::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for TabMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabMarker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "divider" => Ok(TabMarker::Divider),
            "expanded" => Ok(TabMarker::Expanded),
            _ => Err(format!("Unknown tab marker: {}", s)),
        }
    }
}
