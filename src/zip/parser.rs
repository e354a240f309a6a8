//! Low-level local file header parser.
//!
//! Reads the fixed 30-byte block of a local file header at a given offset,
//! checks its signature, then slices the file name, extra field and payload
//! out of the buffer using the length fields just read.
//!
//! ## Layout
//!
//! All integers are little-endian, offsets relative to the header start:
//!
//! | Offset | Size | Field              |
//! |--------|------|--------------------|
//! | 0      | 4    | Signature          |
//! | 4      | 2    | Version needed     |
//! | 6      | 2    | General purpose flag |
//! | 8      | 2    | Compression method |
//! | 10     | 2    | Last mod time      |
//! | 12     | 2    | Last mod date      |
//! | 14     | 4    | CRC-32             |
//! | 18     | 4    | Compressed size    |
//! | 22     | 4    | Uncompressed size  |
//! | 26     | 2    | File name length   |
//! | 28     | 2    | Extra field length |
//!
//! Apart from the signature, the parser checks structure only. Whether the
//! values are acceptable is decided by [`ZipPolicy`](super::ZipPolicy).

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use super::error::ZipError;
use super::structures::*;

/// Parser over an immutable archive buffer.
///
/// Holds no state besides the buffer itself, so the same offset always
/// parses to the same header.
#[derive(Debug, Clone, Copy)]
pub struct ZipParser<'a> {
    data: &'a [u8],
}

impl<'a> ZipParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether the central directory (or, for an empty archive, the
    /// end of central directory record) begins at `offset`.
    ///
    /// # Errors
    ///
    /// `TruncatedInput` if fewer than four bytes remain.
    pub fn directory_starts_at(&self, offset: usize) -> Result<bool, ZipError> {
        let sig = self
            .data
            .get(offset..)
            .and_then(|rest| rest.get(..4))
            .ok_or_else(|| ZipError::truncated(offset, 4, self.data.len()))?;
        Ok(sig == CDFH_SIGNATURE || sig == EOCD_SIGNATURE)
    }

    /// Parse the local file header starting at `offset`.
    ///
    /// # Errors
    ///
    /// - `TruncatedInput` if the fixed block does not fit
    /// - `BadSignature` if the block is not a local file header; the length
    ///   fields of such a block are never used
    /// - `OutOfBounds` if the file name, extra field or payload would end
    ///   past the buffer
    pub fn local_header_at(&self, offset: usize) -> Result<LocalFileHeader<'a>, ZipError> {
        let fixed = self
            .data
            .get(offset..)
            .and_then(|rest| rest.get(..LFH_SIZE))
            .ok_or_else(|| ZipError::truncated(offset, LFH_SIZE, self.data.len()))?;

        // The fixed block is fully in memory, so a short read cannot happen.
        let eof = |_: std::io::Error| ZipError::truncated(offset, LFH_SIZE, self.data.len());
        let mut cursor = Cursor::new(fixed);

        let signature = cursor.read_u32::<LittleEndian>().map_err(eof)?;
        if signature != LFH_MAGIC {
            return Err(ZipError::BadSignature { actual: signature });
        }
        let version_needed = cursor.read_u16::<LittleEndian>().map_err(eof)?;
        let flags = cursor.read_u16::<LittleEndian>().map_err(eof)?;
        let compression_method = cursor.read_u16::<LittleEndian>().map_err(eof)?;
        let last_mod_time = cursor.read_u16::<LittleEndian>().map_err(eof)?;
        let last_mod_date = cursor.read_u16::<LittleEndian>().map_err(eof)?;
        let crc32 = cursor.read_u32::<LittleEndian>().map_err(eof)?;
        let compressed_size = cursor.read_u32::<LittleEndian>().map_err(eof)?;
        let uncompressed_size = cursor.read_u32::<LittleEndian>().map_err(eof)?;
        let file_name_length = cursor.read_u16::<LittleEndian>().map_err(eof)?;
        let extra_field_length = cursor.read_u16::<LittleEndian>().map_err(eof)?;

        let name_start = offset + LFH_SIZE;
        let file_name = self.slice("file name", name_start, usize::from(file_name_length))?;

        let extra_start = name_start + file_name.len();
        let extra_field = self.slice("extra field", extra_start, usize::from(extra_field_length))?;

        let payload_start = extra_start + extra_field.len();
        let payload = self.slice("compressed data", payload_start, compressed_size as usize)?;

        Ok(LocalFileHeader {
            offset,
            signature,
            version_needed,
            flags,
            compression_method: CompressionMethod::from_u16(compression_method),
            last_mod_time,
            last_mod_date,
            crc32,
            compressed_size,
            uncompressed_size,
            file_name,
            extra_field,
            payload,
        })
    }

    fn slice(&self, field: &'static str, start: usize, len: usize) -> Result<&'a [u8], ZipError> {
        start
            .checked_add(len)
            .and_then(|end| self.data.get(start..end))
            .ok_or_else(|| ZipError::OutOfBounds {
                field,
                offset: start,
                len,
                available: self.data.len().saturating_sub(start),
            })
    }
}
