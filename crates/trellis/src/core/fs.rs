//! Filesystem access as a collaborator trait.
//!
//! Widgets that touch files, such as the file selector or an editor's
//! save path, go through [`Filesystem`] rather than `std::fs`. Tests
//! and sandboxed hosts substitute [`MemFs`].

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The slice of filesystem behaviour the toolkit needs.
pub trait Filesystem: Send + Sync {
    /// Read a file to a string.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Write a string to a file, replacing any existing content.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// The names of a directory's direct entries, files and
    /// directories alike, in unspecified order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// True if the path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// True if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// The directory browsing starts from.
    fn start_dir(&self) -> PathBuf;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl Filesystem for StdFs {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(path)? {
            out.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(out)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn start_dir(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
    }
}

#[derive(Debug, Default)]
struct MemFsState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    fail_writes: bool,
}

/// An in-memory filesystem for tests. Paths are taken literally; no
/// normalisation beyond what `Path` itself does.
#[derive(Debug)]
pub struct MemFs {
    state: Mutex<MemFsState>,
    root: PathBuf,
}

impl MemFs {
    /// An empty filesystem whose start directory is `/`.
    pub fn new() -> Self {
        let fs = Self {
            state: Mutex::new(MemFsState::default()),
            root: PathBuf::from("/"),
        };
        fs.add_dir("/");
        fs
    }

    /// Register a directory.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        if let Ok(mut st) = self.state.lock() {
            st.dirs.insert(path.into());
        }
    }

    /// Register a file with the given content.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut st) = self.state.lock() {
            st.files.insert(path.into(), content.into());
        }
    }

    /// Make subsequent writes fail, to exercise error paths.
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut st) = self.state.lock() {
            st.fail_writes = fail;
        }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, MemFsState>> {
        self.state
            .lock()
            .map_err(|_| io::Error::other("memfs lock poisoned"))
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemFs {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.lock()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut st = self.lock()?;
        if st.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"));
        }
        st.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let st = self.lock()?;
        if !st.dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        let mut out = Vec::new();
        for p in st.files.keys().chain(st.dirs.iter()) {
            if p.parent() == Some(path) {
                if let Some(name) = p.file_name() {
                    out.push(name.to_string_lossy().into_owned());
                }
            }
        }
        Ok(out)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.lock().map(|st| st.files.contains_key(path)).unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.lock().map(|st| st.dirs.contains(path)).unwrap_or(false)
    }

    fn start_dir(&self) -> PathBuf {
        self.root.clone()
    }
}
