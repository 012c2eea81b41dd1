//! SoundCloud resolve: request construction and response decoding.
//!
//! The resolve endpoint maps a public SoundCloud URL to the numeric ID of the
//! track, playlist or user behind it. Only the `id` field is decoded.

mod error;
mod request;

pub use error::ResolveError;
pub use request::{build_request, validate_input};

use serde::Deserialize;

/// Decoded resolve response. Extra fields in the body are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResolveResult {
    pub id: i64,
}

/// Decodes a response body into a [`ResolveResult`], logging the decode error on failure.
pub fn decode_body(body: &[u8]) -> Result<ResolveResult, ResolveError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, body_len = body.len(), "resolve response did not decode");
        ResolveError::Decode(e)
    })
}
