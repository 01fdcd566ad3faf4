use std::io;
use std::path::Path;

use crate::error::{ErrorKind, RdgenError};

/// File operation that failed, used to pick the wording and the hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    /// Opening the NVM image.
    Open,
    /// Querying the NVM image's size.
    Size,
    /// Reading the NVM image.
    Read,
    /// Creating the staged source next to the output.
    Stage,
    /// Writing or publishing the generated source.
    Write,
}

impl IoOp {
    fn verb(self) -> &'static str {
        match self {
            IoOp::Open => "opening image",
            IoOp::Size => "sizing image",
            IoOp::Read => "reading image",
            IoOp::Stage => "staging source in",
            IoOp::Write => "writing source",
        }
    }

    fn on_output(self) -> bool {
        matches!(self, IoOp::Stage | IoOp::Write)
    }
}

/// Format a user friendly I/O error message with a hint for this tool.
pub fn format_io_error(op: IoOp, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let disk_full = err.kind() == WriteZero || err.raw_os_error() == Some(28);
    let hint = match err.kind() {
        _ if disk_full => "Disk may be full. Free up space and rerun the build.",
        NotFound if op.on_output() => "Create the output directory before generating the RAM disk.",
        NotFound => "Check that the NVM image exists and the path is correct.",
        PermissionDenied if op.on_output() => "Check that the output directory is writable.",
        PermissionDenied => "Check that the NVM image is readable.",
        UnexpectedEof => "The NVM image appears truncated or is still being written.",
        _ if op.on_output() => "Check the output path and free disk space.",
        _ => "Check the NVM image path.",
    };
    format!("Error {} '{}': {}. {}", op.verb(), path.display(), err, hint)
}

/// Convert an I/O error into a std::io::Error with context.
pub fn io_error(op: IoOp, path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format_io_error(op, path, &err))
}

/// Render the message printed by the top-level fatal handler.
pub fn fatal_message(err: &RdgenError) -> String {
    format!("FATAL: {err}\n{}\nExiting.", fatal_hint(err.kind()))
}

/// Return an actionable hint for an error class.
pub fn fatal_hint(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Io => "No RAM-disk source was written.",
        ErrorKind::Allocation => "Input image is too large to hold in memory.",
        ErrorKind::Compression => "The codec rejected the input image.",
        ErrorKind::Decompression => "The codec could not decode its own output. This is a codec bug.",
        ErrorKind::Verification => {
            "Round-trip produced different bytes; the RAM-disk source was discarded."
        }
    }
}
