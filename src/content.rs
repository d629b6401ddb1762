// Content source: the text to paste comes from stdin unless a file was
// given. The whole input is buffered in memory, pastes are small.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the paste content from `file`, or from stdin when `file` is `None`.
pub fn read_content(file: Option<&Path>) -> Result<String> {
    match file {
        None => {
            tracing::debug!("Reading content from stdin.");
            read_from(io::stdin().lock(), "stdin")
        }
        Some(path) => {
            tracing::debug!("Reading content from {}.", path.display());
            let source = path.display().to_string();
            let fp = File::open(path)
                .map_err(|e| Error::io(format!("failed to open {source}"), e))?;
            read_from(fp, &source)
        }
    }
}

/// Reads `reader` to the end. The bytes must be UTF-8 since they travel as
/// a JSON string.
pub fn read_from<R: Read>(mut reader: R, source: &str) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| Error::io(format!("failed to read {source}"), e))?;
    String::from_utf8(buf).map_err(|e| {
        Error::io(
            format!("failed to read {source}"),
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })
}
