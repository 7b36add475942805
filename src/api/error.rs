/// Errors that can occur while talking to the posts service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed as an absolute URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The configured value as given.
        url: String,
        /// Parser detail.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),

    /// A request failed in transport, timed out, returned a non-success
    /// status, or produced an undecodable body.
    #[error("posts service request failed: {0}")]
    Request(#[from] reqwest::Error),
}
