use reqwest::{Method, StatusCode};
use thiserror::Error;

use crate::nanopub::RdfFormat;

/// Everything that can go wrong while talking to a TWDB server.
///
/// A missing nanopublication is not an error: lookups report it as `None`
/// and deletes as `false`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid server base URL {base_url:?}: {reason}")]
    Configuration { base_url: String, reason: String },

    #[error("nanopublication URI must not be empty")]
    EmptyIdentifier,

    #[error("{method} {url} failed with status {status}: {body}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("{method} {url} failed")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed {format} document: {message}")]
    Parse { format: RdfFormat, message: String },

    #[error("unable to serialize {format} document: {message}")]
    Serialize { format: RdfFormat, message: String },

    #[error("invalid nanopublication: {0}")]
    InvalidNanopublication(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// HTTP status reported by the server, if the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    pub(crate) fn configuration(base_url: &str, reason: impl Into<String>) -> Error {
        Error::Configuration {
            base_url: base_url.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Error {
        Error::InvalidNanopublication(message.into())
    }
}
