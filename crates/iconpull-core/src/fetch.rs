//! HTTP GET for listing pages and assets.
//!
//! [`Fetcher`] is the seam the pipeline talks to; [`CurlFetcher`] is the
//! libcurl-backed implementation. Every call is one blocking request with
//! no retries.

use crate::config::HttpConfig;
use crate::error::FetchError;
use std::time::Duration;

/// Something that can GET a URL and hand back the body.
pub trait Fetcher: Send + Sync {
    /// Fetch the raw response body. Non-2xx responses are errors.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Fetch the body as text, replacing invalid UTF-8.
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let body = self.fetch_bytes(url)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch_bytes(url)
    }
}

/// Fetcher using a fresh curl easy handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    http: HttpConfig,
}

impl CurlFetcher {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn perform(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.http.max_redirections)?;
        easy.connect_timeout(Duration::from_secs(self.http.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.http.timeout_secs))?;
        easy.useragent(&self.http.user_agent)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Fetcher for CurlFetcher {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url, "GET");
        let (status, body) = self.perform(url).map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        tracing::debug!(url, status, bytes = body.len(), "GET done");
        Ok(body)
    }
}
