mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{Call, MockFileSystem};

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::{Child, EntryKind, Mode};

/// The three filesystem calls a recursive chmod needs.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate children of `dir`, typed where the listing allows it.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<Child>>;

    /// Entry type of `path` without following a trailing symlink.
    async fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind>;

    async fn set_mode(&self, path: &Path, mode: Mode) -> io::Result<()>;
}

/// Blocking counterpart of [`FileSystem`].
pub trait SyncFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Child>>;

    fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind>;

    fn set_mode(&self, path: &Path, mode: Mode) -> io::Result<()>;
}
