use std::{fs::FileType, io, path::Path};

use crate::kind::EntryKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatKind {
    File,
    Directory,
    /// Exists but is neither, e.g. a socket or an unfollowed symlink.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    /// `None` for non-existing entry
    kind: Option<StatKind>,
}

impl EntryStat {
    pub fn missing() -> Self {
        Self { kind: None }
    }

    pub fn file() -> Self {
        Self {
            kind: Some(StatKind::File),
        }
    }

    pub fn directory() -> Self {
        Self {
            kind: Some(StatKind::Directory),
        }
    }

    pub fn other() -> Self {
        Self {
            kind: Some(StatKind::Other),
        }
    }

    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_file() {
            Self::file()
        } else if file_type.is_dir() {
            Self::directory()
        } else {
            Self::other()
        }
    }

    /// Folds a `NotFound` error into a missing entry, any other error is kept.
    pub fn from_metadata(metadata: io::Result<std::fs::Metadata>) -> io::Result<Self> {
        match metadata {
            Ok(meta) => Ok(Self::from_file_type(meta.file_type())),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::missing()),
            Err(error) => Err(error),
        }
    }

    pub fn exists(&self) -> bool {
        self.kind.is_some()
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, Some(StatKind::File))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, Some(StatKind::Directory))
    }

    pub fn matches(&self, kind: EntryKind) -> bool {
        match kind {
            EntryKind::File => self.is_file(),
            EntryKind::Directory => self.is_dir(),
        }
    }

    pub(crate) fn stat(path: &Path, follow_symlinks: bool) -> io::Result<Self> {
        let metadata = if follow_symlinks {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        };
        Self::from_metadata(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let stat = EntryStat::stat(&dir.path().join("nope"), true).unwrap();
        assert!(!stat.exists());
        assert!(!stat.matches(EntryKind::File));
    }

    #[test]
    fn test_kind_is_strict() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "").unwrap();

        let stat = EntryStat::stat(&file, true).unwrap();
        assert!(stat.matches(EntryKind::File));
        assert!(!stat.matches(EntryKind::Directory));

        let stat = EntryStat::stat(dir.path(), true).unwrap();
        assert!(stat.matches(EntryKind::Directory));
        assert!(!stat.matches(EntryKind::File));
    }

    #[cfg(unix)]
    #[test]
    fn test_unfollowed_symlink_matches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        let link = dir.path().join("link.txt");
        std::fs::write(&file, "").unwrap();
        std::os::unix::fs::symlink(&file, &link).unwrap();

        assert!(EntryStat::stat(&link, true).unwrap().is_file());
        let stat = EntryStat::stat(&link, false).unwrap();
        assert!(stat.exists());
        assert!(!stat.is_file());
        assert!(!stat.is_dir());
    }
}
