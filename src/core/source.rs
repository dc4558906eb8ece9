use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no source registered for {}", .0.display())]
    Missing(PathBuf),
}

/// The file-read capability the pipeline is driven with.
pub trait SourceReader: Send + Sync {
    fn read_source(&self, path: &Path) -> Result<String, ReadError>;
}

/// Reads sources from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader;

impl FsSourceReader {
    pub fn new() -> Self {
        Self
    }

    fn read_buffered(path: &Path) -> io::Result<String> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len() as usize;
        let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
        let mut bytes = Vec::with_capacity(file_size);
        reader.read_to_end(&mut bytes)?;
        // sources with a stray non-UTF-8 byte are still worth scanning
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
    }
}

impl SourceReader for FsSourceReader {
    fn read_source(&self, path: &Path) -> Result<String, ReadError> {
        Self::read_buffered(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serves sources from memory; unknown paths fail with [`ReadError::Missing`].
#[derive(Debug, Clone, Default)]
pub struct MemorySourceReader {
    files: HashMap<PathBuf, String>,
}

impl MemorySourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        self.insert(path, source);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) {
        self.files.insert(path.into(), source.into());
    }
}

impl SourceReader for MemorySourceReader {
    fn read_source(&self, path: &Path) -> Result<String, ReadError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ReadError::Missing(path.to_path_buf()))
    }
}
