//! Resolve failure kinds. Display is the exact text shown to the user.

use thiserror::Error;

/// Every way a submission can end without an ID. All are terminal.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The entered text is not a syntactically valid URL.
    #[error("Invalid SoundCloud URL")]
    InvalidInput,
    /// The resolve endpoint URL could not be built from the input.
    #[error("Failed to construct request.")]
    RequestConstructionFailed(#[source] url::ParseError),
    /// Transport failure or no body; carries the underlying message if any.
    #[error("SoundCloud Request Failed; {}", .0.as_deref().unwrap_or("unknown"))]
    RequestFailed(Option<String>),
    /// Body was present but is not `{"id": <integer>}`.
    #[error("Failed to parse JSON response.")]
    Decode(#[source] serde_json::Error),
}
