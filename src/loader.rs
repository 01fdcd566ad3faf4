//! Whole-file reads into owned buffers.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{RdgenError, Result};
use crate::image::RawImage;
use crate::io_utils::{io_error, IoOp};

/// Fail early if `path` cannot be stat'ed.
pub fn ensure_accessible(path: &Path) -> Result<()> {
    fs::metadata(path)
        .map(|_| ())
        .map_err(|source| RdgenError::Inaccessible {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the entire file at `path`.
///
/// The buffer is reserved up front for the size the file system reports.
/// Reading fewer bytes than that is an error; so is a file that cannot be
/// held in memory.
pub fn load(path: &Path) -> Result<RawImage> {
    let file = File::open(path).map_err(|e| io_error(IoOp::Open, path, e))?;
    let reported = file
        .metadata()
        .map_err(|e| io_error(IoOp::Size, path, e))?
        .len();
    // A length that does not fit in usize must fail the reservation.
    let expected = usize::try_from(reported).unwrap_or(usize::MAX);
    let bytes = read_exact_len(file, expected, path)?;

    debug!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(RawImage::new(bytes))
}

/// Read exactly `expected` bytes from `reader` into a buffer reserved up
/// front. `path` only labels errors.
pub fn read_exact_len<R: Read>(reader: R, expected: usize, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(expected)
        .map_err(|source| RdgenError::Allocation {
            size: expected,
            source,
        })?;

    reader
        .take(expected as u64)
        .read_to_end(&mut bytes)
        .map_err(|e| io_error(IoOp::Read, path, e))?;
    if bytes.len() != expected {
        return Err(RdgenError::ShortRead {
            path: path.to_path_buf(),
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}
