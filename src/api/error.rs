use thiserror::Error;

/// Errors from talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not build the underlying HTTP client
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Transport-level failure (DNS, connect, reset)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Detail endpoint has no such record
    #[error("No record for '{key}'")]
    NotFound { key: String },

    /// Any other non-success status
    #[error("Unexpected status {status} from '{url}'")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("Invalid response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Message shown to the user. Every failure collapses to the same text.
    pub fn user_message(&self) -> &'static str {
        "Pokemon not found"
    }

    /// Technical details for the log.
    pub fn details(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            Self::Decode {
                url: url.to_string(),
                source: err,
            }
        } else {
            Self::Request {
                url: url.to_string(),
                source: err,
            }
        }
    }
}
