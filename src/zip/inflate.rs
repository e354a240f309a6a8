//! Bounded raw DEFLATE decoding.
//!
//! Output is produced in fixed-size steps and the running total is compared
//! with the limit before each step is appended, so the output buffer never
//! grows past the limit regardless of what the header claims.

use flate2::{Decompress, FlushDecompress, Status};

use super::error::ZipError;

/// Scratch output size per inflate step.
const INFLATE_BUF_SIZE: usize = 32 * 1024;

/// Inflate `input` as a raw DEFLATE stream, failing once the output would
/// exceed `max_out` bytes.
///
/// `size_hint` is the size the header declares; it only sizes the initial
/// allocation and is clamped to `max_out`.
///
/// The stream must end exactly at the end of `input`: trailing bytes mean
/// the declared compressed size does not describe the stream.
///
/// # Errors
///
/// - `SizeLimitExceeded` when the output would grow past `max_out`
/// - `DecompressionFailed` on corrupt codes, a premature end of input,
///   trailing bytes, or a step that makes no progress
pub fn inflate_bounded(input: &[u8], max_out: u64, size_hint: u64) -> Result<Vec<u8>, ZipError> {
    let limit = usize::try_from(max_out).unwrap_or(usize::MAX);
    let hint = usize::try_from(size_hint.min(max_out)).unwrap_or(limit);

    let mut de = Decompress::new(false);
    let mut buf = vec![0u8; INFLATE_BUF_SIZE];
    let mut out = Vec::with_capacity(hint);
    let mut in_pos: usize = 0;

    loop {
        let before_in = de.total_in();
        let before_out = de.total_out();

        let status = de
            .decompress(&input[in_pos..], &mut buf, FlushDecompress::None)
            .map_err(|e| ZipError::DecompressionFailed(e.to_string()))?;

        let consumed = (de.total_in() - before_in) as usize;
        let produced = (de.total_out() - before_out) as usize;
        in_pos += consumed;

        if produced != 0 {
            if produced > limit - out.len() {
                return Err(ZipError::SizeLimitExceeded { limit: max_out });
            }
            out.extend_from_slice(&buf[..produced]);
        }

        match status {
            Status::StreamEnd => {
                if in_pos != input.len() {
                    return Err(ZipError::DecompressionFailed(format!(
                        "{} trailing bytes after end of stream",
                        input.len() - in_pos
                    )));
                }
                return Ok(out);
            }
            Status::Ok | Status::BufError => {
                if consumed == 0 && produced == 0 {
                    let reason = if in_pos >= input.len() {
                        "unexpected end of compressed data"
                    } else {
                        "inflate stalled"
                    };
                    return Err(ZipError::DecompressionFailed(reason.to_string()));
                }
            }
        }
    }
}
