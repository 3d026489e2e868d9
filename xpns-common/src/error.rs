//! Common error types for XPNS

use thiserror::Error;

/// Common result type for XPNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure errors shared across XPNS crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure taxonomy of the expense submission pipeline.
///
/// Every variant is recoverable by the user; none of them is allowed to
/// escape the pipeline as a panic or an unhandled error. The `Display`
/// text of a variant is what the entry form shows verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Cost is missing, non-positive, or not a finite number
    #[error("Please enter a valid cost amount")]
    InvalidCost,

    /// A required free-text field is empty after trimming
    #[error("Required field '{0}' must not be empty")]
    MissingField(&'static str),

    /// The webhook URL still equals the unconfigured placeholder
    #[error("Web app URL is not configured. Set XPNS_WEB_APP_URL or web_app_url in ~/.config/xpns/xpns-fe.toml")]
    NotConfigured,

    /// The webhook answered with a non-2xx status
    #[error("Webhook returned HTTP {0}")]
    Transport(u16),

    /// Network failure, malformed response body, or any other fault
    /// caught at the pipeline boundary
    #[error("{0}")]
    Unexpected(String),
}
