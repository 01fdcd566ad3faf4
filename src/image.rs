//! Owned byte buffers flowing through the pipeline.

/// Raw input image as read from disk. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    bytes: Vec<u8>,
}

impl RawImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Codec output for a [`RawImage`], together with the length it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    bytes: Vec<u8>,
    original_len: usize,
}

impl CompressedImage {
    pub fn new(bytes: Vec<u8>, original_len: usize) -> Self {
        Self {
            bytes,
            original_len,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Compressed size as a percentage of the original size.
    ///
    /// Defined as `0.0` for an empty original so the value is always finite.
    pub fn ratio(&self) -> f64 {
        compression_ratio(self.original_len, self.bytes.len())
    }
}

/// `compressed / original * 100`, or `0.0` when `original` is zero.
pub fn compression_ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        compressed as f64 / original as f64 * 100.0
    }
}
