use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendlyError {
    /// Calendly answered with a non-2xx status
    #[error("Calendly responded with {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Invalid slot start time {value:?}: {source}")]
    InvalidStartTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unexpected response from Calendly: {0}")]
    Decode(#[source] serde_json::Error),

    /// Connection failures, timeouts, bad URLs and undecodable bodies
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl CalendlyError {
    /// Status code of the upstream response, if there was one.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
