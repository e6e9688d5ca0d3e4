use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::ChmodError;
use crate::fs::SyncFileSystem;
use crate::models::{Child, EntryKind, FsEntry, Mode};

/// Blocking recursive chmod. Same rules as [`super::walk::chmodr`], with
/// children handled one at a time in listing order.
pub fn chmodr_sync<F: SyncFileSystem>(fs: &F, path: &Path, mode: Mode) -> Result<(), ChmodError> {
    let children = match fs.read_dir(path) {
        Ok(children) => children,
        Err(err) if err.kind() == io::ErrorKind::NotADirectory => {
            debug!(path = %path.display(), %mode, "not a directory, applying mode directly");
            return set_mode(fs, path, mode);
        }
        Err(err) => return Err(ChmodError::io(path, err)),
    };
    trace!(path = %path.display(), children = children.len(), "listed directory");

    for child in children {
        visit(fs, path, child, mode)?;
    }

    set_mode(fs, path, mode.dir_mode())
}

fn visit<F: SyncFileSystem>(
    fs: &F,
    parent: &Path,
    child: Child,
    mode: Mode,
) -> Result<(), ChmodError> {
    let entry = match child {
        Child::Entry(entry) => entry,
        Child::Name(name) => {
            let child_path = parent.join(&name);
            let kind = fs
                .symlink_kind(&child_path)
                .map_err(|err| ChmodError::io(child_path, err))?;
            FsEntry::new(name, kind)
        }
    };

    let child_path = parent.join(&entry.name);
    if entry.kind == EntryKind::Directory {
        chmodr_sync(fs, &child_path, mode)?;
        set_mode(fs, &child_path, mode.dir_mode())
    } else {
        set_mode(fs, &child_path, mode)
    }
}

fn set_mode<F: SyncFileSystem>(fs: &F, path: &Path, mode: Mode) -> Result<(), ChmodError> {
    debug!(path = %path.display(), %mode, "chmod");
    fs.set_mode(path, mode)
        .map_err(|err| ChmodError::io(path, err))
}
