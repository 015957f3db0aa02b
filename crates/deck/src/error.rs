//! Failures at the loader boundary

use thiserror::Error;

/// Why a presentation could not be shown.
///
/// Every variant ends in the same place: the page body is replaced with
/// [`crate::markup::error_page`] carrying the `Display` text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),

    /// The body is not a valid presentation document
    #[error("invalid presentation JSON: {0}")]
    Parse(String),

    /// A DOM operation failed while building the page
    #[error("render error: {0}")]
    Render(String),
}

impl LoadError {
    /// True for failures of the fetch itself (status or transport)
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Status(_) | Self::Transport(_))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
