//! Where archive bytes come from.
//!
//! Sources only deliver bytes. Nothing they return is trusted until
//! [`ZipExtractor`](crate::ZipExtractor) has accepted it.

mod http;
mod local;

pub use http::HttpSource;
pub use local::LocalFileSource;

use anyhow::Result;
use async_trait::async_trait;

/// Default cap on the number of bytes fetched from a source (16 MiB).
pub const DEFAULT_MAX_DOWNLOAD_SIZE: u64 = 16 * 1024 * 1024;

/// Trait for fetching a complete archive into memory
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Fetch the whole archive, failing if it is larger than `limit` bytes
    async fn fetch(&self, limit: u64) -> Result<Vec<u8>>;

    /// Path or URL, for messages
    fn location(&self) -> &str;
}
