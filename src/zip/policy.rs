//! Feature allow-list applied to every parsed header.

use super::error::ZipError;
use super::structures::{CompressionMethod, LFH_MAGIC, LocalFileHeader};

/// Default per-entry ceiling on decompressed size (1 MiB).
pub const DEFAULT_MAX_ENTRY_SIZE: u64 = 1024 * 1024;

/// Default ceiling on the decompressed size of a whole archive (16 MiB).
pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 16 * 1024 * 1024;

/// The only accepted compression method.
pub const SUPPORTED_METHOD: CompressionMethod = CompressionMethod::Deflate;

/// Limits an archive must stay within.
///
/// ```
/// use zipgate::ZipPolicy;
///
/// let policy = ZipPolicy::default()
///     .max_entry_size(64 * 1024)
///     .max_total_size(1024 * 1024);
/// assert_eq!(policy.entry_limit(), 64 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipPolicy {
    max_entry_size: u64,
    max_total_size: u64,
}

impl Default for ZipPolicy {
    fn default() -> Self {
        Self {
            max_entry_size: DEFAULT_MAX_ENTRY_SIZE,
            max_total_size: DEFAULT_MAX_TOTAL_SIZE,
        }
    }
}

impl ZipPolicy {
    pub fn max_entry_size(mut self, limit: u64) -> Self {
        self.max_entry_size = limit;
        self
    }

    pub fn max_total_size(mut self, limit: u64) -> Self {
        self.max_total_size = limit;
        self
    }

    pub fn entry_limit(&self) -> u64 {
        self.max_entry_size
    }

    pub fn total_limit(&self) -> u64 {
        self.max_total_size
    }

    /// Apply the allow-list to a parsed header.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// signature, streaming flag, encryption flag, compression method,
    /// declared uncompressed size.
    pub fn check(&self, header: &LocalFileHeader<'_>) -> Result<(), ZipError> {
        if header.signature != LFH_MAGIC {
            return Err(ZipError::BadSignature {
                actual: header.signature,
            });
        }

        // Sizes and CRC in the header are placeholders for streamed entries,
        // nothing could be bounded ahead of decompression.
        if header.has_data_descriptor() {
            return Err(ZipError::StreamingNotSupported);
        }

        if header.is_encrypted() {
            return Err(ZipError::EncryptedEntry);
        }

        if header.compression_method != SUPPORTED_METHOD {
            return Err(ZipError::UnsupportedCompressionMethod(
                header.compression_method.as_u16(),
            ));
        }

        if u64::from(header.uncompressed_size) > self.max_entry_size {
            return Err(ZipError::SizeLimitExceeded {
                limit: self.max_entry_size,
            });
        }

        Ok(())
    }
}
