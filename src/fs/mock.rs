use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{Child, EntryKind, Mode};

use super::{FileSystem, SyncFileSystem};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    ReadDir(PathBuf),
    SymlinkKind(PathBuf),
    SetMode(PathBuf, Mode),
}

#[derive(Clone, Debug)]
enum Response<T> {
    Ok(T),
    Err(io::ErrorKind),
}

impl<T: Clone> Response<T> {
    fn get(&self) -> io::Result<T> {
        match self {
            Response::Ok(value) => Ok(value.clone()),
            Response::Err(kind) => Err(io::Error::from(*kind)),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Response<Vec<Child>>>,
    kinds: HashMap<PathBuf, Response<EntryKind>>,
    mode_errors: HashMap<PathBuf, io::ErrorKind>,
    modes: HashMap<PathBuf, Mode>,
    calls: Vec<Call>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, children: Vec<Child>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(dir.into(), Response::Ok(children));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(dir.into(), Response::Err(kind));
    }

    pub fn set_kind(&self, path: impl Into<PathBuf>, kind: EntryKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(path.into(), Response::Ok(kind));
    }

    pub fn set_kind_error(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(path.into(), Response::Err(kind));
    }

    pub fn set_mode_error(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.mode_errors.insert(path.into(), kind);
    }

    /// Last mode successfully applied to `path`.
    pub fn mode_of(&self, path: impl AsRef<Path>) -> Option<Mode> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.modes.get(path.as_ref()).copied()
    }

    pub fn calls(&self) -> Vec<Call> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<Child>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(Call::ReadDir(dir.to_path_buf()));

        match inner.listings.get(dir) {
            Some(response) => response.get(),
            None => Err(io::Error::other(format!(
                "no mock listing for {}",
                dir.display()
            ))),
        }
    }

    fn lookup(&self, path: &Path) -> io::Result<EntryKind> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(Call::SymlinkKind(path.to_path_buf()));

        match inner.kinds.get(path) {
            Some(response) => response.get(),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn apply(&self, path: &Path, mode: Mode) -> io::Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(Call::SetMode(path.to_path_buf(), mode));

        if let Some(kind) = inner.mode_errors.get(path) {
            return Err(io::Error::from(*kind));
        }
        inner.modes.insert(path.to_path_buf(), mode);
        Ok(())
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<Child>> {
        self.list(dir)
    }

    async fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind> {
        self.lookup(path)
    }

    async fn set_mode(&self, path: &Path, mode: Mode) -> io::Result<()> {
        self.apply(path, mode)
    }
}

impl SyncFileSystem for MockFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Child>> {
        self.list(dir)
    }

    fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind> {
        self.lookup(path)
    }

    fn set_mode(&self, path: &Path, mode: Mode) -> io::Result<()> {
        self.apply(path, mode)
    }
}
