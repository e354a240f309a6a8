//! # zipgate
//!
//! Fail-closed validation and in-memory extraction of untrusted ZIP bundles.
//!
//! Archives fetched from hosts that are not fully trusted (reseed bundles
//! of an anonymity network client, for instance) are checked against a
//! narrow allow-list before any of their contents are used. An archive
//! either passes completely and yields all of its entries, or is rejected
//! with the first reason found and yields nothing.
//!
//! ## Features
//!
//! - Local file header parsing with strict bounds checks
//! - DEFLATE only; streamed (data descriptor) and encrypted entries rejected
//! - Decompression with a hard output ceiling, per entry and per archive
//! - CRC-32 and size verification of every entry
//! - Fetching from the local filesystem or HTTP/HTTPS
//!
//! ## Example
//!
//! ```no_run
//! use zipgate::{ArchiveSource, HttpSource, ZipPolicy};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = HttpSource::new("https://example.com/i2pseeds.zip".to_string())?;
//!     let bytes = source.fetch(16 * 1024 * 1024).await?;
//!
//!     let archive = zipgate::validate_with(&bytes, &ZipPolicy::default())?;
//!     for entry in archive.entries() {
//!         println!("{} ({} bytes)", entry.file_name, entry.data.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod io;
pub mod zip;

pub use cli::Cli;
pub use io::{ArchiveSource, HttpSource, LocalFileSource};
pub use zip::{FailureKind, ValidatedArchive, ZipError, ZipExtractor, ZipFileEntry, ZipPolicy};

/// Validate `data` with the default [`ZipPolicy`].
pub fn validate(data: &[u8]) -> Result<ValidatedArchive, ZipError> {
    validate_with(data, &ZipPolicy::default())
}

/// Validate `data` against `policy`, returning every entry or the first
/// failure.
pub fn validate_with(data: &[u8], policy: &ZipPolicy) -> Result<ValidatedArchive, ZipError> {
    ZipExtractor::new(data, *policy).extract()
}
