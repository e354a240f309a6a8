use indexmap::IndexMap;
use std::fmt;

/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Stored,
            8 => CompressionMethod::Deflate,
            _ => CompressionMethod::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
            CompressionMethod::Unknown(v) => *v,
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionMethod::Stored => write!(f, "stored"),
            CompressionMethod::Deflate => write!(f, "deflate"),
            CompressionMethod::Unknown(v) => write!(f, "unknown ({v})"),
        }
    }
}

/// Local File Header (LFH) - 30 bytes
pub const LFH_MAGIC: u32 = 0x04034b50;
pub const LFH_SIGNATURE: &[u8] = &LFH_MAGIC.to_le_bytes();
pub const LFH_SIZE: usize = 30;

/// Central Directory File Header signature, the usual end of entry data.
pub const CDFH_SIGNATURE: &[u8] = b"PK\x01\x02";

/// End of Central Directory signature; ends entry data of an empty archive.
pub const EOCD_SIGNATURE: &[u8] = b"PK\x05\x06";

/// General purpose flag bit 0: traditional PKWARE encryption.
pub const FLAG_ENCRYPTED: u16 = 1 << 0;

/// General purpose flag bit 3: CRC and sizes are in a data descriptor
/// after the payload, and the header fields are zero.
pub const FLAG_DATA_DESCRIPTOR: u16 = 1 << 3;

/// A parsed local file header, borrowing its variable-length parts from
/// the archive buffer.
///
/// One fresh value is produced per entry; nothing carries over between
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFileHeader<'a> {
    /// Offset of the header within the archive buffer
    pub offset: usize,
    pub signature: u32,
    pub version_needed: u16,
    pub flags: u16,
    pub compression_method: CompressionMethod,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name: &'a [u8],
    pub extra_field: &'a [u8],
    /// Compressed data, exactly `compressed_size` bytes
    pub payload: &'a [u8],
}

impl LocalFileHeader<'_> {
    /// Total bytes the entry occupies: header, name, extra field and payload.
    pub fn entry_len(&self) -> usize {
        LFH_SIZE + self.file_name.len() + self.extra_field.len() + self.payload.len()
    }

    pub fn file_name_lossy(&self) -> String {
        String::from_utf8_lossy(self.file_name).into_owned()
    }

    pub fn has_data_descriptor(&self) -> bool {
        self.flags & FLAG_DATA_DESCRIPTOR != 0
    }

    pub fn is_encrypted(&self) -> bool {
        self.flags & FLAG_ENCRYPTED != 0
    }
}

/// A validated, extracted ZIP entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipFileEntry {
    pub file_name: String,
    pub compression_method: CompressionMethod,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub crc32: u32,
    pub lfh_offset: u64,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    /// Decompressed content, already checked against `crc32` and
    /// `uncompressed_size`
    pub data: Vec<u8>,
}

impl ZipFileEntry {
    pub(crate) fn from_header(header: &LocalFileHeader<'_>, data: Vec<u8>) -> Self {
        Self {
            file_name: header.file_name_lossy(),
            compression_method: header.compression_method,
            compressed_size: u64::from(header.compressed_size),
            uncompressed_size: u64::from(header.uncompressed_size),
            crc32: header.crc32,
            lfh_offset: header.offset as u64,
            last_mod_time: header.last_mod_time,
            last_mod_date: header.last_mod_date,
            data,
        }
    }

    /// Parse modification date to (year, month, day)
    pub fn mod_date(&self) -> (u16, u8, u8) {
        let day = (self.last_mod_date & 0x1F) as u8;
        let month = ((self.last_mod_date >> 5) & 0x0F) as u8;
        let year = ((self.last_mod_date >> 9) & 0x7F) + 1980;
        (year, month, day)
    }

    /// Parse modification time to (hour, minute, second)
    pub fn mod_time(&self) -> (u8, u8, u8) {
        let second = ((self.last_mod_time & 0x1F) * 2) as u8;
        let minute = ((self.last_mod_time >> 5) & 0x3F) as u8;
        let hour = ((self.last_mod_time >> 11) & 0x1F) as u8;
        (hour, minute, second)
    }
}

/// An archive that passed every check, entries in archive order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedArchive {
    entries: IndexMap<String, ZipFileEntry>,
}

impl ValidatedArchive {
    pub(crate) fn new(entries: IndexMap<String, ZipFileEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ZipFileEntry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ZipFileEntry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Sum of the decompressed sizes of all entries.
    pub fn total_size(&self) -> u64 {
        self.entries.values().map(|e| e.data.len() as u64).sum()
    }

    /// Hand the name to content mapping over to a consumer.
    pub fn into_contents(self) -> IndexMap<String, Vec<u8>> {
        self.entries
            .into_iter()
            .map(|(name, entry)| (name, entry.data))
            .collect()
    }
}
