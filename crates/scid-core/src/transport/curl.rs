//! libcurl-backed [`Transport`].

use std::time::Duration;

use url::Url;

use super::{Transport, TransportError};
use crate::config::ScidConfig;

/// Blocking GET over a fresh libcurl Easy handle per request.
///
/// Follows redirects; the resolve API answers with a 302 to the resource.
/// No timeout is set unless configured.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CurlTransport {
    pub fn from_config(cfg: &ScidConfig) -> Self {
        Self {
            timeout: cfg.timeout(),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = ::curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(status = code, bytes = body.len(), "resolve GET finished");
        if code == 0 {
            return Err(TransportError::NoBody);
        }

        Ok(body)
    }
}
