use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::utils::text::strip_bom;

/// A named upload whose contents can be read asynchronously.
#[async_trait]
pub trait FileSource: Send + Sync {
    fn name(&self) -> &str;

    async fn read_bytes(&self) -> io::Result<Vec<u8>>;

    /// Decodes as UTF-8 the way a browser text read does: invalid
    /// sequences become U+FFFD and a leading BOM is dropped.
    async fn read_text(&self) -> io::Result<String> {
        let bytes = self.read_bytes().await?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(strip_bom(&text).to_string())
    }
}

/// Upload payload already held in memory.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// UTF-8 payload, as a browser upload of a text file would carry it.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.as_bytes().to_vec())
    }
}

#[async_trait]
impl FileSource for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// File on disk, read when a parser asks for it.
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
}

impl DiskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FileSource for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        debug!("Reading upload from {}", self.path.display());
        tokio::fs::read(&self.path).await
    }
}
