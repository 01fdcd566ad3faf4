//! Byte-oriented run-length codec.
//!
//! Stream layout: the original length as a little-endian `u32`, followed by
//! `(count, value)` pairs where `count` is in `1..=255`. Runs longer than 255
//! bytes are split across several pairs. Input without repetition doubles in
//! size; that is a valid result, not an error.

use crate::codec::{Codec, CodecStatus};

/// Size of the length prefix in bytes.
pub const HEADER_SIZE: usize = 4;
/// Longest run a single pair can describe.
pub const MAX_RUN: usize = u8::MAX as usize;

#[derive(Debug, Default, Clone, Copy)]
pub struct RleCodec;

impl RleCodec {
    /// RLE has a single strategy; levels above this are rejected.
    pub const MAX_LEVEL: u32 = 9;

    /// Upper bound on the encoded size of `len` input bytes.
    pub fn max_encoded_len(len: usize) -> usize {
        HEADER_SIZE + 2 * len
    }
}

impl Codec for RleCodec {
    fn compress(&self, input: &[u8], level: u32) -> Result<Vec<u8>, CodecStatus> {
        if level > Self::MAX_LEVEL {
            return Err(CodecStatus::INVALID_PARAMETER);
        }
        let len = u32::try_from(input.len()).map_err(|_| CodecStatus::OVERFLOW_DETECTED)?;

        let mut out = Vec::with_capacity(HEADER_SIZE + input.len() / 2);
        out.extend_from_slice(&len.to_le_bytes());

        let mut rest = input;
        while let Some(&value) = rest.first() {
            let run = rest
                .iter()
                .take(MAX_RUN)
                .take_while(|&&b| b == value)
                .count();
            out.push(run as u8);
            out.push(value);
            rest = &rest[run..];
        }
        Ok(out)
    }

    fn decompress(&self, input: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecStatus> {
        let (header, body) = input
            .split_first_chunk::<HEADER_SIZE>()
            .ok_or(CodecStatus::INVALID_PARAMETER)?;
        let stored = u32::from_le_bytes(*header) as usize;
        if stored != expected_len || body.len() % 2 != 0 {
            return Err(CodecStatus::INVALID_PARAMETER);
        }

        let mut out = Vec::with_capacity(expected_len);
        for pair in body.chunks_exact(2) {
            let (count, value) = (pair[0] as usize, pair[1]);
            if count == 0 {
                return Err(CodecStatus::INVALID_PARAMETER);
            }
            if out.len() + count > expected_len {
                return Err(CodecStatus::OVERFLOW_DETECTED);
            }
            out.resize(out.len() + count, value);
        }
        if out.len() != expected_len {
            return Err(CodecStatus::ABORTED);
        }
        Ok(out)
    }
}
