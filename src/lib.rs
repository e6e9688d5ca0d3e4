//! Recursive chmod that keeps directories traversable.
//!
//! Every entry under a path receives the requested mode. Directories receive
//! [`Mode::dir_mode`] instead, which adds execute wherever read is granted,
//! and are finalized after their contents.

pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::path::Path;
use std::sync::Arc;

pub use crate::core::walk::{ChmodOptions, Concurrency};
pub use error::ChmodError;
pub use fs::{FileSystem, RealFileSystem, SyncFileSystem};
pub use models::{Child, EntryKind, FsEntry, Mode};

/// Recursively chmod `path` on the host filesystem, fanning out over
/// the children of each directory.
pub async fn chmodr(path: impl AsRef<Path>, mode: impl Into<Mode>) -> Result<(), ChmodError> {
    chmodr_with(path, mode, &ChmodOptions::default()).await
}

pub async fn chmodr_with(
    path: impl AsRef<Path>,
    mode: impl Into<Mode>,
    options: &ChmodOptions,
) -> Result<(), ChmodError> {
    crate::core::walk::chmodr(Arc::new(RealFileSystem), path.as_ref(), mode.into(), options).await
}

/// Blocking variant of [`chmodr`].
pub fn chmodr_sync(path: impl AsRef<Path>, mode: impl Into<Mode>) -> Result<(), ChmodError> {
    crate::core::walk_sync::chmodr_sync(&RealFileSystem, path.as_ref(), mode.into())
}
