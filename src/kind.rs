use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of entry a search accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    File,
    Directory,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" | "f" => Ok(EntryKind::File),
            "directory" | "dir" | "d" => Ok(EntryKind::Directory),
            _ => Err(format!("unknown entry type '{s}', expected 'file' or 'directory'")),
        }
    }
}

#[test]
fn test_entry_kind_from_str() {
    assert_eq!("file".parse::<EntryKind>(), Ok(EntryKind::File));
    assert_eq!("dir".parse::<EntryKind>(), Ok(EntryKind::Directory));
    assert!("socket".parse::<EntryKind>().is_err());
}
