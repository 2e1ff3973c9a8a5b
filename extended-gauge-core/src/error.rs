//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No configuration has been supplied to the editor yet
    #[error("Editor has no configuration yet")]
    NotInitialized,

    /// The current page has no section with this name
    #[error("Section not found on current page: {0}")]
    SectionNotFound(String),

    /// A list change was aimed at a section that is not an element list
    #[error("Section is not an element list: {0}")]
    NotAnElementList(String),

    /// A path step does not fit the shape of the configuration value
    #[error("Invalid configuration path: {0}")]
    InvalidPath(String),

    /// A row index points past the end of a list
    #[error("Row index {index} out of range (list length {len})")]
    RowOutOfRange { index: usize, len: usize },

    /// Page tree could not be parsed
    #[error("Invalid page definition: {0}")]
    InvalidPage(String),

    /// Event bus subscription or delivery failed
    #[error("Event bus error: {0}")]
    EventBus(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (a caller mistake rather than a broken editor state),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotInitialized
            | Self::SectionNotFound(_)
            | Self::NotAnElementList(_)
            | Self::InvalidPage(_) => true,
            Self::InvalidPath(_)
            | Self::RowOutOfRange { .. }
            | Self::EventBus(_)
            | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
