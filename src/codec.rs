//! Seam between the pipeline and the byte-level codec.
//!
//! The codec reports failures as opaque status codes. The adapter functions
//! below turn a failing status into the matching fatal error and otherwise
//! hand the codec's buffer on untouched; checking the content is left to
//! [`crate::verify`].

use std::fmt;

use log::debug;

use crate::error::{RdgenError, Result};
use crate::image::{CompressedImage, RawImage};

/// Non-success status code returned by a [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecStatus(pub i32);

impl CodecStatus {
    pub const GENERIC: Self = Self(-1);
    pub const INVALID_PARAMETER: Self = Self(-2);
    pub const OVERFLOW_DETECTED: Self = Self(-3);
    pub const ABORTED: Self = Self(-4);
}

impl fmt::Display for CodecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A compress/decompress pair.
pub trait Codec {
    /// Encode `input`. Returns a newly allocated buffer.
    fn compress(&self, input: &[u8], level: u32) -> std::result::Result<Vec<u8>, CodecStatus>;

    /// Decode `input`, which must expand to exactly `expected_len` bytes.
    fn decompress(
        &self,
        input: &[u8],
        expected_len: usize,
    ) -> std::result::Result<Vec<u8>, CodecStatus>;
}

/// Compress `raw`, escalating a codec failure to [`RdgenError::Compression`].
pub fn compress<C: Codec>(codec: &C, raw: &RawImage, level: u32) -> Result<CompressedImage> {
    let bytes = codec
        .compress(raw.as_bytes(), level)
        .map_err(RdgenError::Compression)?;
    debug!("compressed {} -> {} bytes", raw.len(), bytes.len());
    Ok(CompressedImage::new(bytes, raw.len()))
}

/// Decompress `compressed` back to its original length, escalating a codec
/// failure to [`RdgenError::Decompression`].
pub fn decompress<C: Codec>(codec: &C, compressed: &CompressedImage) -> Result<Vec<u8>> {
    let bytes = codec
        .decompress(compressed.as_bytes(), compressed.original_len())
        .map_err(RdgenError::Decompression)?;
    debug!("decompressed {} -> {} bytes", compressed.len(), bytes.len());
    Ok(bytes)
}
