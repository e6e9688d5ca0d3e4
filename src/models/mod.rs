mod entry;
mod mode;

pub use entry::{Child, EntryKind, FsEntry};
pub use mode::Mode;
