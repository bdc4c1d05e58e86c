//! Blocking remote checks for charter links and OWNERS files.

use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http status code = {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    /// The server answered 200 but the body could not be read.
    #[error("{0}")]
    Body(String),
}

/// One GET per call; a body is only returned for a 200 response.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// `reqwest` blocking client with its default timeouts. No retries.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("sigs-audit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let started = Instant::now();
        let resp = self.client.get(url).send().map_err(|e| {
            tracing::debug!(url, error = %e, "request failed");
            FetchError::Transport(e.to_string())
        })?;

        let status = resp.status();
        tracing::debug!(
            url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request finished"
        );
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }
        resp.text()
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}
