// Error taxonomy shared by every layer of the client. Each variant maps to
// one failure class: bad input, local I/O, transport, HTTP status and
// unexpected response bodies. The binary collapses all of them into exit
// code 2.

use reqwest::StatusCode;
use thiserror::Error;

/// Longest response body excerpt kept on an `Http` error.
const BODY_EXCERPT_LEN: usize = 200;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server answered {status} for {url}: {body}")]
    Http {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected response from {url}: {reason}")]
    Protocol { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Builds an `Http` error, trimming the body to a loggable excerpt.
    pub fn http(url: impl Into<String>, status: StatusCode, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(BODY_EXCERPT_LEN) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
            None => body.to_string(),
        };
        Error::Http {
            url: url.into(),
            status,
            body,
        }
    }

    /// Status code of an `Http` error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
