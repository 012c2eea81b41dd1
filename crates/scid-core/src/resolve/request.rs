//! Input validation and resolve request construction.

use url::{ParseError, Url};

use super::ResolveError;

/// Accepts `raw` when it is a syntactically valid URI reference.
///
/// Absolute URLs and scheme-less references (`soundcloud.com/artist/track`)
/// both pass. Text that would need percent-encoding first (spaces, non-ASCII,
/// a stray `%`) does not. Returns the input unchanged.
pub fn validate_input(raw: &str) -> Result<String, ResolveError> {
    if raw.is_empty() || !is_uri_text(raw) {
        return Err(ResolveError::InvalidInput);
    }
    match Url::parse(raw) {
        Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => Ok(raw.to_string()),
        Err(e) => {
            tracing::debug!(error = %e, "input is not a URL");
            Err(ResolveError::InvalidInput)
        }
    }
}

/// True when every byte is an RFC 3986 unreserved or reserved character, or
/// part of a well-formed `%XX` escape.
fn is_uri_text(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escape = bytes.get(i + 1..i + 3);
                if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    return false;
                }
                i += 3;
                continue;
            }
            b if b.is_ascii_alphanumeric() => {}
            b'-' | b'.' | b'_' | b'~' => {}
            b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@' => {}
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=' => {}
            _ => return false,
        }
        i += 1;
    }
    true
}

/// Builds `<endpoint>?url=<raw>&client_id=<client_id>`.
///
/// `raw` is interpolated as-is, not percent-encoded as a query value. A raw URL
/// that carries its own `&` or `#` therefore splits the query; callers that need
/// compatibility with existing resolve links rely on this.
pub fn build_request(endpoint: &str, client_id: &str, raw: &str) -> Result<Url, ResolveError> {
    let candidate = format!("{endpoint}?url={raw}&client_id={client_id}");
    Url::parse(&candidate).map_err(ResolveError::RequestConstructionFailed)
}
