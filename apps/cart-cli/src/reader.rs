//! Filesystem-backed [`SourceReader`].

use std::fs;
use std::io;
use std::path::Path;

use cart_core::SourceReader;
use tracing::debug;

/// Reads cart documents from disk as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let text = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = text.len(), "read cart file");
        Ok(text)
    }
}
