use super::ArchiveSource;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Archive stored on the local filesystem
pub struct LocalFileSource {
    path: PathBuf,
    location: String,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl ArchiveSource for LocalFileSource {
    async fn fetch(&self, limit: u64) -> Result<Vec<u8>> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .with_context(|| format!("cannot open {}", self.location))?;

        let size = file.metadata().await?.len();
        if size > limit {
            bail!("{} is {} bytes, limit is {}", self.location, size, limit);
        }

        // The file may grow between metadata() and the read.
        let mut buf = Vec::with_capacity(size as usize);
        file.take(limit.saturating_add(1)).read_to_end(&mut buf).await?;
        if buf.len() as u64 > limit {
            bail!("{} grew past the limit of {} bytes", self.location, limit);
        }

        Ok(buf)
    }

    fn location(&self) -> &str {
        &self.location
    }
}
