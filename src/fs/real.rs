use async_trait::async_trait;
use std::fs::Permissions;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tokio::task;

use crate::models::{Child, EntryKind, FsEntry, Mode};

use super::{FileSystem, SyncFileSystem};

/// The host filesystem. `set_mode` follows symlinks, as chmod(2) does.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealFileSystem;

fn list_children(dir: &Path) -> io::Result<Vec<Child>> {
    let mut children = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let child: Child = match entry.file_type() {
            Ok(file_type) => FsEntry::new(entry.file_name(), file_type.into()).into(),
            Err(_) => Child::Name(entry.file_name()),
        };
        children.push(child);
    }
    Ok(children)
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<Child>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || list_children(&dir))
            .await
            .map_err(io::Error::other)?
    }

    async fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = tokio::fs::symlink_metadata(path).await?;
        Ok(metadata.file_type().into())
    }

    async fn set_mode(&self, path: &Path, mode: Mode) -> io::Result<()> {
        tokio::fs::set_permissions(path, Permissions::from_mode(mode.bits())).await
    }
}

impl SyncFileSystem for RealFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Child>> {
        list_children(dir)
    }

    fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(std::fs::symlink_metadata(path)?.file_type().into())
    }

    fn set_mode(&self, path: &Path, mode: Mode) -> io::Result<()> {
        std::fs::set_permissions(path, Permissions::from_mode(mode.bits()))
    }
}
