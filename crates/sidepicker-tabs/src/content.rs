//! Detached content blocks

/// A content block removed from the document at registry construction.
///
/// Fragments are deliberately not `Clone`: a fragment is either at home in
/// the registry or displayed in the overlay, never both.
#[derive(Debug, PartialEq, Eq)]
pub struct ContentFragment {
    /// The anchor reference that resolved this block
    target: String,
    /// Outer markup of the block
    html: String,
}

impl ContentFragment {
    pub fn new(target: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            html: html.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}
