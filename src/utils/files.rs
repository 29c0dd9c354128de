//! File access for the exporter
//!
//! The exporter only needs "read whole file" and "write whole file". The
//! `DocumentStore` trait abstracts both so exports can target the real
//! filesystem or an in-memory map (tests, dry runs):
//! - `StdDocumentStore`: std::fs with atomic replace
//! - `MemoryDocumentStore`: in-memory storage

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

/// Whole-file storage used by the exporter
pub trait DocumentStore: Send + Sync {
    /// Read a file's contents; `Ok(None)` when it does not exist
    fn read(&self, path: &Path) -> io::Result<Option<String>>;

    /// Replace a file's contents, creating it and its directory if needed
    ///
    /// Implementations must not leave a partially written file behind.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Standard filesystem store
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDocumentStore;

impl DocumentStore for StdDocumentStore {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        // Write next to the target, then rename over it
        let mut tmp = temp_file_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        // A replaced document keeps its mode
        match std::fs::metadata(path) {
            Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Temporary file created with the mode `std::fs::File::create` would use
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The process umask still applies on creation
    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Memory-based store
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the in-memory storage
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.lock()
            .insert(path.as_ref().to_path_buf(), content.to_string());
    }

    /// Current content of a file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, String>> {
        // A poisoned map still holds complete entries
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.get(path))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.add_file(path, content);
        Ok(())
    }
}

/// Load a `Config` from a TOML file
///
/// Missing keys keep their defaults.
#[cfg(feature = "config-file")]
pub fn load_config(
    path: impl AsRef<Path>,
) -> Result<crate::core::context::Config, crate::utils::error::ConfigError> {
    use crate::utils::error::ConfigError;

    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
