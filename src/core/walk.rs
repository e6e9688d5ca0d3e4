use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, trace};

use crate::error::ChmodError;
use crate::fs::FileSystem;
use crate::models::{Child, EntryKind, FsEntry, Mode};

/// How the children of one directory are scheduled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Concurrency {
    /// One task per child; the directory settles once every child has.
    #[default]
    FanOut,
    /// Children one at a time, in listing order.
    Sequential,
}

/// Configuration options for a recursive chmod.
#[derive(Clone, Debug, Default)]
pub struct ChmodOptions {
    pub concurrency: Concurrency,
}

type WalkFuture = Pin<Box<dyn Future<Output = Result<(), ChmodError>> + Send>>;

/// Apply `mode` to `path` and everything below it.
///
/// Files, symlinks and other non-directories get `mode` as given; directories
/// get [`Mode::dir_mode`], applied after their contents. A `path` that is not
/// a directory is treated as a single file.
pub async fn chmodr<F: FileSystem + 'static>(
    fs: Arc<F>,
    path: &Path,
    mode: Mode,
    options: &ChmodOptions,
) -> Result<(), ChmodError> {
    walk(fs, path.to_path_buf(), mode, options.concurrency).await
}

fn walk<F: FileSystem + 'static>(
    fs: Arc<F>,
    path: PathBuf,
    mode: Mode,
    concurrency: Concurrency,
) -> WalkFuture {
    Box::pin(async move {
        let listing = fs.read_dir(&path).await;
        let children = match listing {
            Ok(children) => children,
            Err(err) if err.kind() == io::ErrorKind::NotADirectory => {
                debug!(path = %path.display(), %mode, "not a directory, applying mode directly");
                return set_mode(fs.as_ref(), &path, mode).await;
            }
            Err(err) => return Err(ChmodError::io(path, err)),
        };
        trace!(path = %path.display(), children = children.len(), "listed directory");

        match concurrency {
            Concurrency::Sequential => {
                for child in children {
                    visit(fs.clone(), path.clone(), child, mode, concurrency).await?;
                }
            }
            Concurrency::FanOut => {
                let mut tasks = JoinSet::new();
                for child in children {
                    tasks.spawn(visit(fs.clone(), path.clone(), child, mode, concurrency));
                }
                settle(tasks).await?;
            }
        }

        // An empty listing lands here directly: a leaf directory still needs its own mode.
        set_mode(fs.as_ref(), &path, mode.dir_mode()).await
    })
}

/// Wait for every child task, then report the first failure seen.
async fn settle(mut tasks: JoinSet<Result<(), ChmodError>>) -> Result<(), ChmodError> {
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        let result = joined.map_err(ChmodError::from).and_then(|result| result);
        if let Err(err) = result {
            if first_error.is_none() {
                first_error = Some(err);
            } else {
                debug!(error = %err, "discarding additional child failure");
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

async fn visit<F: FileSystem + 'static>(
    fs: Arc<F>,
    parent: PathBuf,
    child: Child,
    mode: Mode,
    concurrency: Concurrency,
) -> Result<(), ChmodError> {
    let entry = match child {
        Child::Entry(entry) => entry,
        Child::Name(name) => {
            let child_path = parent.join(&name);
            let kind = fs
                .symlink_kind(&child_path)
                .await
                .map_err(|err| ChmodError::io(child_path, err))?;
            FsEntry::new(name, kind)
        }
    };

    let child_path = parent.join(&entry.name);
    if entry.kind == EntryKind::Directory {
        walk(fs.clone(), child_path.clone(), mode, concurrency).await?;
        set_mode(fs.as_ref(), &child_path, mode.dir_mode()).await
    } else {
        set_mode(fs.as_ref(), &child_path, mode).await
    }
}

async fn set_mode<F: FileSystem>(fs: &F, path: &Path, mode: Mode) -> Result<(), ChmodError> {
    debug!(path = %path.display(), %mode, "chmod");
    fs.set_mode(path, mode)
        .await
        .map_err(|err| ChmodError::io(path, err))
}
