//! Load, compress, emit, decompress, re-read and verify.

use std::path::Path;

use log::{debug, info};

use crate::codec::{self, Codec};
use crate::config::Config;
use crate::emit;
use crate::error::Result;
use crate::image::CompressedImage;
use crate::loader;
use crate::verify;

/// Summary of an accepted conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub original_len: usize,
    pub compressed_len: usize,
    /// Compressed size as a percentage of the original.
    pub ratio: f64,
    /// Bytes of C source written to the output path.
    pub artifact_len: usize,
    /// Hex SHA-256 of the verified image.
    pub sha256: String,
}

/// Print original and compressed sizes the way the tool always has.
pub fn print_sizes(image: &CompressedImage) {
    println!("Original size:   {:12} bytes", image.original_len());
    println!(
        "Compressed size: {:12} bytes ({:.4}%)",
        image.len(),
        image.ratio()
    );
}

/// Convert the image at `input` into C source at `output`.
///
/// The source is rendered before the round-trip check but only moved to
/// `output` once the decompressed bytes match a fresh read of `input`. On
/// any error `output` is left untouched.
pub fn run<C: Codec>(codec: &C, config: &Config, input: &Path, output: &Path) -> Result<Report> {
    loader::ensure_accessible(input)?;
    let raw = loader::load(input)?;

    let compressed = codec::compress(codec, &raw, config.level)?;
    print_sizes(&compressed);

    let staged = emit::stage(output, config, &compressed)?;

    let decompressed = codec::decompress(codec, &compressed)?;
    let reference = loader::load(input)?;
    debug!("verifying against re-read of {}", input.display());
    let verified = verify::verify(&reference, &decompressed)?;

    let report = Report {
        original_len: compressed.original_len(),
        compressed_len: compressed.len(),
        ratio: compressed.ratio(),
        artifact_len: staged.len(),
        sha256: verified.sha256,
    };
    staged.publish(output)?;

    info!(
        "wrote {} ({} bytes), image sha256 {}",
        output.display(),
        report.artifact_len,
        report.sha256
    );
    Ok(report)
}
