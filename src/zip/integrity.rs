use super::error::ZipError;

/// CRC-32 as used by ZIP (IEEE 802.3, reflected, init and final XOR
/// 0xFFFFFFFF).
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Cross-check decompressed bytes against what the header declared.
///
/// The length is compared first, then the checksum.
pub fn verify(data: &[u8], expected_crc: u32, expected_size: u64) -> Result<(), ZipError> {
    let actual_size = data.len() as u64;
    if actual_size != expected_size {
        return Err(ZipError::SizeMismatch {
            expected: expected_size,
            actual: actual_size,
        });
    }

    let actual_crc = crc32(data);
    if actual_crc != expected_crc {
        return Err(ZipError::ChecksumMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    Ok(())
}
