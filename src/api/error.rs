use thiserror::Error;

/// Ways a backend call can fail.
///
/// Handlers flatten all of these into the same `"Error: ..."` text, so the
/// `Display` output is what ends up on the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The exchange completed with a non-2xx status.
    #[error("{status} {reason}")]
    Http { status: u16, reason: String },

    /// A 2xx response whose body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(String),

    /// The exchange could not complete at all.
    #[error("Network error: {0}")]
    Network(String),

    /// The request body could not be encoded.
    #[error("Could not encode request body: {0}")]
    Encode(String),
}

impl RequestError {
    /// An HTTP error with the canonical reason phrase for `status`.
    pub fn http(status: reqwest::StatusCode) -> Self {
        Self::http_with_reason(status, None)
    }

    /// An HTTP error carrying the phrase the server sent, if any.
    pub fn http_with_reason(status: reqwest::StatusCode, reason: Option<&str>) -> Self {
        let reason = reason
            .or_else(|| status.canonical_reason())
            .unwrap_or_default();
        RequestError::Http {
            status: status.as_u16(),
            reason: reason.to_string(),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Network(err.to_string())
        }
    }
}
