//! C source rendering of a compressed RAM-disk image.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::{Builder, NamedTempFile};

use crate::config::Config;
use crate::error::Result;
use crate::image::CompressedImage;
use crate::io_utils::{io_error, IoOp};

/// Mode of the published source before the umask is applied.
#[cfg(unix)]
pub const ARTIFACT_MODE: u32 = 0o666;

/// Write the C source for `image` to `out`. Returns the number of bytes
/// written.
pub fn emit<W: Write>(out: W, config: &Config, image: &CompressedImage) -> io::Result<usize> {
    let mut out = Counting::new(out);
    let per_line = config.values_per_line.max(1);

    writeln!(out, "#include <stdint.h>")?;
    writeln!(out, "#include <stddef.h>")?;
    writeln!(out, "//")?;
    writeln!(out, "// Generated with rdgen")?;
    writeln!(
        out,
        "// Original was {} bytes, now just {} bytes ({:.4}%)",
        image.original_len(),
        image.len(),
        image.ratio()
    )?;
    writeln!(out, "//")?;
    write!(out, "uint8_t {}[] = {{", config.symbol)?;
    for (i, byte) in image.as_bytes().iter().enumerate() {
        if i % per_line == 0 {
            write!(out, "\n    ")?;
        }
        write!(out, "0x{byte:02x},")?;
    }
    write!(out, "\n}};\n")?;
    writeln!(
        out,
        "size_t {} = sizeof({});",
        config.size_symbol(),
        config.symbol
    )?;
    out.flush()?;

    Ok(out.written)
}

/// Rendered artifact held in a temporary file next to its destination.
///
/// Dropping it without calling [`StagedArtifact::publish`] deletes the file.
#[derive(Debug)]
pub struct StagedArtifact {
    file: NamedTempFile,
    len: usize,
}

impl StagedArtifact {
    /// Bytes of C source written.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Move the staged file onto `dest`, replacing anything already there.
    pub fn publish(self, dest: &Path) -> Result<()> {
        self.file
            .persist(dest)
            .map_err(|e| io_error(IoOp::Write, dest, e.error))?;
        debug!("published {} bytes to {}", self.len, dest.display());
        Ok(())
    }
}

/// Render `image` into a temporary file in the directory of `dest`.
pub fn stage(dest: &Path, config: &Config, image: &CompressedImage) -> Result<StagedArtifact> {
    let dir = staging_dir(dest);
    let mut file = staging_builder()
        .tempfile_in(&dir)
        .map_err(|e| io_error(IoOp::Stage, &dir, e))?;
    let len = emit(BufWriter::new(&mut file), config, image)
        .map_err(|e| io_error(IoOp::Write, dest, e))?;
    debug!("staged {len} bytes at {}", file.path().display());
    Ok(StagedArtifact { file, len })
}

/// Staged files get the mode a plain `create` would give them, not the
/// owner-only default of temporary files.
fn staging_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".rdgen");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(ARTIFACT_MODE));
    }
    builder
}

fn staging_dir(dest: &Path) -> PathBuf {
    match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

struct Counting<W> {
    inner: W,
    written: usize,
}

impl<W> Counting<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for Counting<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
