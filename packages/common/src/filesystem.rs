use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File system abstraction for stylesheet output and testing
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Replace the contents of `path`. Either the whole text lands or the
    /// previous file is left untouched.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&directory)?;

        // The temporary file is removed on drop unless persisted.
        let mut file = NamedTempFile::new_in(&directory)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.persist(path).map_err(|error| error.error)?;
        Ok(())
    }
}

/// Mock file system for testing
#[derive(Default)]
pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    failing: bool,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file system whose writes always fail.
    pub fn failing() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            failing: true,
        }
    }

    pub fn add_file(&self, path: PathBuf, contents: impl Into<String>) {
        self.files.lock().insert(path, contents.into());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().get(path).cloned()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().contains_key(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.failing {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("mock write to {} refused", path.display()),
            ));
        }
        self.add_file(path.to_path_buf(), contents);
        Ok(())
    }
}
