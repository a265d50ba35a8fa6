use thiserror::Error;

/// Failure of one admin API request.
///
/// Components reduce these to a fixed user-facing message at the call site;
/// the structured variant only feeds logging.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Http(u16),

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}
