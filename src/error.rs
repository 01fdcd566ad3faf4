use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecStatus;

/// Coarse classification of a fatal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Allocation,
    Compression,
    Decompression,
    Verification,
}

#[derive(Error, Debug)]
pub enum RdgenError {
    /// The input path does not exist or cannot be stat'ed.
    #[error("File '{}' cannot be accessed. Does it exist?", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Propagated I/O error, already annotated with operation and path.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The file system reported more bytes than could be read.
    #[error(
        "Failed to read expected amount of bytes from '{}': expected {expected}, got {actual}.",
        path.display()
    )]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to allocate buffer of {size} bytes for file contents.")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("compress() failed with {0}")]
    Compression(CodecStatus),

    #[error("decompress() failed with {0}")]
    Decompression(CodecStatus),

    #[error("Decompression result differs in size: expected {expected} bytes, got {actual} bytes.")]
    SizeMismatch { expected: usize, actual: usize },

    #[error(
        "Decompression result does not match original file: first difference at offset {offset} \
         (expected 0x{expected:02x}, got 0x{actual:02x})."
    )]
    ContentMismatch {
        offset: usize,
        expected: u8,
        actual: u8,
    },
}

impl RdgenError {
    pub fn kind(&self) -> ErrorKind {
        use RdgenError::*;
        match self {
            Inaccessible { .. } | Io(_) | ShortRead { .. } => ErrorKind::Io,
            Allocation { .. } => ErrorKind::Allocation,
            Compression(_) => ErrorKind::Compression,
            Decompression(_) => ErrorKind::Decompression,
            SizeMismatch { .. } | ContentMismatch { .. } => ErrorKind::Verification,
        }
    }
}

pub type Result<T> = std::result::Result<T, RdgenError>;
