//! Round-trip check of decompressed output against the image on disk.

use sha2::{Digest, Sha256};

use crate::error::{RdgenError, Result};
use crate::image::RawImage;

/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified {
    pub len: usize,
    /// Hex-encoded SHA-256 of the verified bytes.
    pub sha256: String,
}

/// Compare `decompressed` byte for byte against `reference`.
///
/// `reference` is expected to be a fresh read of the input file, not the
/// buffer that was handed to the compressor.
pub fn verify(reference: &RawImage, decompressed: &[u8]) -> Result<Verified> {
    let expected = reference.as_bytes();
    if expected.len() != decompressed.len() {
        return Err(RdgenError::SizeMismatch {
            expected: expected.len(),
            actual: decompressed.len(),
        });
    }
    if let Some(offset) = expected
        .iter()
        .zip(decompressed)
        .position(|(a, b)| a != b)
    {
        return Err(RdgenError::ContentMismatch {
            offset,
            expected: expected[offset],
            actual: decompressed[offset],
        });
    }

    Ok(Verified {
        len: expected.len(),
        sha256: hex::encode(Sha256::digest(expected)),
    })
}
