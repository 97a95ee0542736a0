//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("Content for tab {0} is already at home")]
    ContentAlreadyHome(TabId),
}
