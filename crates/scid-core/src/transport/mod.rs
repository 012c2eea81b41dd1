//! Outbound HTTP for the resolve GET.
//!
//! [`Transport`] is the seam the controller session depends on; the real
//! implementation is [`CurlTransport`]. Tests substitute canned responses.

mod curl;

pub use self::curl::CurlTransport;

use thiserror::Error;
use url::Url;

use crate::resolve::ResolveError;

/// Failure to obtain a response body.
#[derive(Debug, Error)]
pub enum TransportError {
    /// libcurl reported an error (timeout, connection refused, DNS, ...).
    #[error("{0}")]
    Curl(#[from] ::curl::Error),
    /// Failure reported by a non-curl transport.
    #[error("{0}")]
    Failed(String),
    /// The exchange completed without a body and without an error.
    #[error("no response body")]
    NoBody,
}

impl From<TransportError> for ResolveError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::NoBody => ResolveError::RequestFailed(None),
            other => ResolveError::RequestFailed(Some(other.to_string())),
        }
    }
}

/// Performs a blocking GET and returns the raw body.
///
/// The HTTP status is not part of the contract: any body is handed to the
/// decoder. Implementations run on a blocking thread.
pub trait Transport: Send + Sync + 'static {
    fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}
