use thiserror::Error;

/// Reason an archive was rejected.
///
/// Every failure is final for the whole archive: the walker never returns
/// the entries it validated before hitting one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZipError {
    /// Fewer bytes remain than the structure at `offset` needs.
    #[error("truncated input at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A length field points past the end of the buffer.
    #[error("{field} at offset {offset} spans {len} bytes, only {available} available")]
    OutOfBounds {
        field: &'static str,
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("invalid local file header signature: got 0x{actual:08x}")]
    BadSignature { actual: u32 },

    /// The data descriptor flag is set: sizes and checksum follow the payload.
    #[error("streamed entry (data descriptor follows payload) is not supported")]
    StreamingNotSupported,

    #[error("encrypted entry is not supported")]
    EncryptedEntry,

    #[error("unsupported compression method: {0}")]
    UnsupportedCompressionMethod(u16),

    #[error("size limit of {limit} bytes exceeded")]
    SizeLimitExceeded { limit: u64 },

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("size mismatch: header declares {expected} bytes, got {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("checksum mismatch: header declares 0x{expected:08x}, got 0x{actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("duplicate entry name: {0}")]
    DuplicateEntry(String),
}

/// Field-less view of [`ZipError`], for matching on the reason alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    TruncatedInput,
    OutOfBounds,
    BadSignature,
    StreamingNotSupported,
    EncryptedEntry,
    UnsupportedCompressionMethod,
    SizeLimitExceeded,
    DecompressionFailed,
    SizeMismatch,
    ChecksumMismatch,
    DuplicateEntry,
}

impl ZipError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ZipError::TruncatedInput { .. } => FailureKind::TruncatedInput,
            ZipError::OutOfBounds { .. } => FailureKind::OutOfBounds,
            ZipError::BadSignature { .. } => FailureKind::BadSignature,
            ZipError::StreamingNotSupported => FailureKind::StreamingNotSupported,
            ZipError::EncryptedEntry => FailureKind::EncryptedEntry,
            ZipError::UnsupportedCompressionMethod(_) => FailureKind::UnsupportedCompressionMethod,
            ZipError::SizeLimitExceeded { .. } => FailureKind::SizeLimitExceeded,
            ZipError::DecompressionFailed(_) => FailureKind::DecompressionFailed,
            ZipError::SizeMismatch { .. } => FailureKind::SizeMismatch,
            ZipError::ChecksumMismatch { .. } => FailureKind::ChecksumMismatch,
            ZipError::DuplicateEntry(_) => FailureKind::DuplicateEntry,
        }
    }

    pub(crate) fn truncated(offset: usize, needed: usize, data_len: usize) -> Self {
        ZipError::TruncatedInput {
            offset,
            needed,
            available: data_len.saturating_sub(offset),
        }
    }
}
