//! Loading text sources from disk
//!
//! With the `mmap` feature files are memory-mapped instead of copied into a
//! heap buffer, which keeps peak memory flat for large observation files.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};

/// The bytes of a text file, owned or mapped
pub(crate) enum TextSource {
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
    Owned(String),
}

impl TextSource {
    /// Open `path` and make its contents available as text
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;

        #[cfg(feature = "mmap")]
        {
            let len = file.metadata().map_err(|e| Error::io(path, e))?.len();
            // Zero-length mappings are rejected on some platforms
            if len > 0 {
                // SAFETY: Memory mapping a file is inherently unsafe as it bypasses Rust's
                // memory safety guarantees. However, this is safe because:
                // 1. We only create a read-only memory mapping
                // 2. The mapping is owned by this value and dropped with it
                // 3. The bytes are validated as UTF-8 before any parsing
                let mmap =
                    unsafe { MmapOptions::new().map(&file) }.map_err(|e| Error::io(path, e))?;
                return Ok(TextSource::Mapped(mmap));
            }
        }

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| Error::io(path, e))?;
        Ok(TextSource::Owned(text))
    }

    /// Read an arbitrary reader to the end
    pub(crate) fn from_reader<R: Read>(mut reader: R, path: &Path) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io(path, e))?;
        Ok(TextSource::Owned(text))
    }

    /// View the contents as UTF-8 text
    #[cfg_attr(not(feature = "mmap"), allow(unused_variables))]
    pub(crate) fn as_str(&self, path: &Path) -> Result<&str> {
        match self {
            #[cfg(feature = "mmap")]
            TextSource::Mapped(mmap) => std::str::from_utf8(mmap).map_err(|e| {
                Error::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            }),
            TextSource::Owned(text) => Ok(text),
        }
    }
}
