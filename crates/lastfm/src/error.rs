/// Failure codes the API reports inside an otherwise-valid JSON body.
/// Only the codes a read-only client can plausibly receive are mapped;
/// anything else is carried through as [`ApiError::Other`].
/// <https://www.last.fm/api/errorcodes>
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum ApiError {
    /// A parameter was missing or invalid. The service also reports an
    /// unknown user this way.
    #[error("invalid parameters")]
    InvalidParameters,

    /// You must be granted a valid key by last.fm.
    #[error("invalid API key")]
    InvalidApiKey,

    /// Most likely the backend service failed. Please try again.
    #[error("operation failed; please try again")]
    OperationFailed,

    /// This service is temporarily offline. Try again later.
    #[error("service offline")]
    ServiceOffline,

    /// There was a temporary error processing your request. Please try again.
    #[error("temporarily unavailable")]
    TemporaryError,

    /// Your IP has made too many requests in a short period.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("error code {0}")]
    Other(u8),
}

impl From<u8> for ApiError {
    fn from(code: u8) -> Self {
        match code {
            6 => Self::InvalidParameters,
            8 => Self::OperationFailed,
            10 => Self::InvalidApiKey,
            11 => Self::ServiceOffline,
            16 => Self::TemporaryError,
            29 => Self::RateLimitExceeded,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error body returned by the Last.fm API.
    #[error("{0}")]
    Api(#[from] ApiError),
    /// An error occurred while sending the request.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// An error occurred while deserializing the response.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}
