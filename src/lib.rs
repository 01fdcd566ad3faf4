//! Compress an NVM image into run-length encoded C source for a firmware
//! RAM disk, refusing to publish anything that does not decompress back to
//! the exact input.

pub mod codec;
pub mod config;
pub mod emit;
pub mod error;
pub mod image;
pub mod io_utils;
pub mod loader;
pub mod pipeline;
pub mod rle;
pub mod verify;

pub use codec::{Codec, CodecStatus};
pub use config::Config;
pub use error::{ErrorKind, RdgenError, Result};
pub use image::{compression_ratio, CompressedImage, RawImage};
pub use pipeline::{run, Report};
pub use rle::RleCodec;
