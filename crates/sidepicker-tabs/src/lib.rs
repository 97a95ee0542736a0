//! Sidepicker Tab Registry
//!
//! Reads the tab strip markup once at construction. Each tab's content block
//! is detached from the document and kept "at home" in the registry until the
//! expansion controller takes it to display in the overlay.

mod content;
mod error;
mod marker;
mod registry;
mod source;
mod tab;

pub use content::ContentFragment;
pub use error::TabError;
pub use marker::TabMarker;
pub use registry::TabRegistry;
pub use source::SourceRef;
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
