use std::io;
use std::path::PathBuf;

use crate::entry::EntryStat;
use crate::kind::EntryKind;

/// Outcome of probing one candidate.
#[derive(Debug)]
pub enum Step {
    Matched(PathBuf),
    NoMatch,
    /// The probe failed for a reason other than a missing entry.
    ProbeError(io::Error),
}

impl Step {
    pub fn from_probe(candidate: PathBuf, kind: EntryKind, probe: io::Result<EntryStat>) -> Self {
        match probe {
            Ok(stat) if stat.matches(kind) => Step::Matched(candidate),
            Ok(_) => Step::NoMatch,
            Err(error) => Step::ProbeError(error),
        }
    }

    /// Both `NoMatch` and `ProbeError` keep the walk going.
    pub fn into_match(self) -> Option<PathBuf> {
        match self {
            Step::Matched(path) => Some(path),
            Step::NoMatch => None,
            Step::ProbeError(error) => {
                tracing::debug!("probe failed, continue upward: {error}");
                None
            }
        }
    }
}

/// What a matcher decides for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// Resolved against the directory handed to the matcher.
    Found(PathBuf),
    Continue,
    Stop,
}

#[test]
fn test_probe_error_continues() {
    let step = Step::from_probe(
        PathBuf::from("/a/x"),
        EntryKind::File,
        Err(io::Error::from(io::ErrorKind::PermissionDenied)),
    );
    assert!(matches!(step, Step::ProbeError(_)));
    assert_eq!(step.into_match(), None);
}

#[test]
fn test_kind_mismatch_is_no_match() {
    let step = Step::from_probe(
        PathBuf::from("/a/x"),
        EntryKind::Directory,
        Ok(EntryStat::file()),
    );
    assert!(matches!(step, Step::NoMatch));
}
