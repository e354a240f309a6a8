//! Fail-closed ZIP validation and extraction.
//!
//! This module accepts only a narrow profile of ZIP archive and rejects
//! everything else as a whole. It is meant for archives that arrive from
//! hosts that are not fully trusted, where nothing should be looked at
//! until every entry checks out.
//!
//! ## Architecture
//!
//! - `structures`: constants and the types for headers and entries
//! - `parser`: reads local file headers at fixed offsets, signature and bounds only
//! - `policy`: the allow-list every header must pass
//! - `inflate`: raw DEFLATE with a hard output ceiling
//! - `integrity`: CRC-32 and size cross-checks
//! - `extractor`: drives all of the above across the archive
//!
//! ## Accepted Profile
//!
//! - Local file headers laid out back to back from the start offset,
//!   followed by the central directory
//! - DEFLATE compression only
//! - CRC and sizes present in the local header (no data descriptors)
//! - No encryption
//! - Declared and actual sizes within the configured ceilings
//!
//! ## Limitations
//!
//! - The central directory is located but not interpreted
//! - No ZIP64, no multi-disk archives
//! - No STORED, BZIP2, LZMA or other compression methods

mod error;
mod extractor;
mod inflate;
mod integrity;
mod parser;
mod policy;
mod structures;

pub use error::{FailureKind, ZipError};
pub use extractor::ZipExtractor;
pub use inflate::inflate_bounded;
pub use integrity::{crc32, verify};
pub use parser::ZipParser;
pub use policy::*;
pub use structures::*;
