//! Error types for satchel-fetch.

use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid header name '{name}': {source}")]
    InvalidHeaderName {
        name: String,
        source: InvalidHeaderName,
    },

    #[error("invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        name: String,
        source: InvalidHeaderValue,
    },

    #[error("invalid proxy URL {url}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("{method} {url} returned status {status}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
    },
}

impl Error {
    /// The status code of a non-200 response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
