use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{debug, info, warn};

use super::error::ZipError;
use super::inflate::inflate_bounded;
use super::integrity;
use super::parser::ZipParser;
use super::policy::ZipPolicy;
use super::structures::{ValidatedArchive, ZipFileEntry};

/// Walks the local file headers of an in-memory archive.
///
/// Each entry goes through parsing, the policy gate, bounded inflate and the
/// integrity check, in that order. The walk ends when the central directory
/// signature shows up where the next local header would be.
///
/// ```text
/// Start -> ParsingEntry -> EntryAccepted -> ParsingEntry ...
///                       -> EntryRejected           (Rejected)
///                       -> DirectorySignatureSeen  (Accepted)
/// ```
///
/// Entries are only handed out once the whole archive is accepted. A
/// failure anywhere discards everything extracted so far.
#[derive(Debug)]
pub struct ZipExtractor<'a> {
    parser: ZipParser<'a>,
    policy: ZipPolicy,
    start: usize,
}

impl<'a> ZipExtractor<'a> {
    pub fn new(data: &'a [u8], policy: ZipPolicy) -> Self {
        Self::with_offset(data, policy, 0)
    }

    /// Walk a ZIP stream that begins `offset` bytes into `data`.
    pub fn with_offset(data: &'a [u8], policy: ZipPolicy, offset: usize) -> Self {
        Self {
            parser: ZipParser::new(data),
            policy,
            start: offset,
        }
    }

    /// Validate every entry and return them all, or the first failure.
    pub fn extract(self) -> Result<ValidatedArchive, ZipError> {
        let mut cursor = self.start;
        let mut entries = IndexMap::new();

        match self.walk(&mut cursor, &mut entries) {
            Ok(total) => {
                info!("archive accepted: {} entries, {} bytes", entries.len(), total);
                Ok(ValidatedArchive::new(entries))
            }
            Err(e) => {
                warn!("archive rejected at offset {}: {}", cursor, e);
                Err(e)
            }
        }
    }

    fn walk(
        &self,
        cursor: &mut usize,
        entries: &mut IndexMap<String, ZipFileEntry>,
    ) -> Result<u64, ZipError> {
        let mut total: u64 = 0;

        while !self.parser.directory_starts_at(*cursor)? {
            let (entry, span) = self.extract_entry(*cursor, total)?;
            total += entry.data.len() as u64;

            match entries.entry(entry.file_name.clone()) {
                Entry::Occupied(_) => return Err(ZipError::DuplicateEntry(entry.file_name)),
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
            *cursor += span;
        }

        debug!("central directory reached at offset {}", cursor);
        Ok(total)
    }

    /// Run one entry through every check. Returns the entry and the number
    /// of bytes it occupies in the archive.
    fn extract_entry(&self, offset: usize, total: u64) -> Result<(ZipFileEntry, usize), ZipError> {
        let header = self.parser.local_header_at(offset)?;
        debug!(
            "entry at offset {}: {:?}, {} -> {} bytes",
            offset,
            header.file_name_lossy(),
            header.compressed_size,
            header.uncompressed_size
        );

        self.policy.check(&header)?;

        let declared = u64::from(header.uncompressed_size);
        let remaining = self.policy.total_limit().saturating_sub(total);
        if declared > remaining {
            return Err(ZipError::SizeLimitExceeded {
                limit: self.policy.total_limit(),
            });
        }

        let limit = remaining.min(self.policy.entry_limit());
        let data = inflate_bounded(header.payload, limit, declared)?;

        integrity::verify(&data, header.crc32, declared)?;

        Ok((ZipFileEntry::from_header(&header, data), header.entry_len()))
    }
}
