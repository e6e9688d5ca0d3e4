use std::ffi::OsString;
use std::fs::FileType;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One immediate child of a directory, as handed out by a listing.
///
/// Listings normally carry the entry type; when they cannot, the child is a
/// bare name and the visitor resolves its type with a no-follow lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Child {
    Name(OsString),
    Entry(FsEntry),
}

impl From<FsEntry> for Child {
    fn from(entry: FsEntry) -> Self {
        Child::Entry(entry)
    }
}
