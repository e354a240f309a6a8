use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::ArchiveSource;
use anyhow::{Result, bail};

/// Archive served over HTTP(S), e.g. a reseed bundle
pub struct HttpSource {
    client: Client,
    url: String,
    transferred_bytes: AtomicU64,
    max_retry: u32,
}

impl HttpSource {
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: String) -> Self {
        Self {
            client,
            url,
            transferred_bytes: AtomicU64::new(0),
            max_retry: 10,
        }
    }

    /// Attempts made on connect and timeout errors before giving up.
    pub fn max_retry(mut self, attempts: u32) -> Self {
        self.max_retry = attempts.max(1);
        self
    }

    /// Get total bytes transferred from network
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes.load(Ordering::Relaxed)
    }

    async fn fetch_once(&self, limit: u64) -> reqwest::Result<Fetched> {
        let mut resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            return Ok(Fetched::Status(resp.status()));
        }

        if let Some(len) = resp.content_length() {
            if len > limit {
                return Ok(Fetched::TooLarge(len));
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            self.transferred_bytes
                .fetch_add(chunk.len() as u64, Ordering::Relaxed);

            if body.len() as u64 + chunk.len() as u64 > limit {
                return Ok(Fetched::TooLarge(body.len() as u64 + chunk.len() as u64));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(Fetched::Body(body))
    }
}

enum Fetched {
    Body(Vec<u8>),
    Status(reqwest::StatusCode),
    TooLarge(u64),
}

#[async_trait]
impl ArchiveSource for HttpSource {
    async fn fetch(&self, limit: u64) -> Result<Vec<u8>> {
        let mut retry_count = 0;

        loop {
            match self.fetch_once(limit).await {
                Ok(Fetched::Body(body)) => {
                    debug!("fetched {} bytes from {}", body.len(), self.url);
                    return Ok(body);
                }
                Ok(Fetched::Status(status)) => {
                    bail!("HTTP request failed with status: {}", status);
                }
                Ok(Fetched::TooLarge(len)) => {
                    bail!("{} exceeds download limit: {} > {}", self.url, len, limit);
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count >= self.max_retry {
                        bail!("Max retries exceeded");
                    }
                    warn!(
                        "Connection error, retry {}/{}: {}",
                        retry_count, self.max_retry, e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn location(&self) -> &str {
        &self.url
    }
}
