//! Error types for the page behavior layer
//!
//! Missing optional elements are never errors; components simply do not
//! attach. The variants here cover markup that breaks a component's
//! contract and configuration that cannot be used.

use thiserror::Error;

/// Main error type for page behavior operations
#[derive(Error, Debug)]
pub enum PageError {
    /// A tab button names a panel that is not in the document
    #[error("Tab panel not found: {tab}")]
    MissingTabPanel { tab: String },

    /// A tab button carries no panel identifier
    #[error("Tab button has no data-tab attribute")]
    MissingTabId,

    /// Configuration is incomplete or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;
