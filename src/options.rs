use std::path::{Path, PathBuf};

use url::Url;

use crate::{kind::EntryKind, Error, RResult};

/// A directory given either as a filesystem path or as a `file:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    Url(Url),
}

impl Location {
    /// Parses `input` as a URL when it carries the `file:` scheme, as a path otherwise.
    pub fn parse(input: &str) -> RResult<Self> {
        if input.starts_with("file:") {
            Url::parse(input)
                .map(Location::Url)
                .map_err(|_| Error::InvalidUrl(input.to_string()))
        } else {
            Ok(Location::Path(PathBuf::from(input)))
        }
    }

    pub fn to_path(&self) -> RResult<PathBuf> {
        match self {
            Location::Path(path) => Ok(path.clone()),
            Location::Url(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_err(|_| Error::InvalidUrl(url.to_string())),
            Location::Url(url) => Err(Error::InvalidUrl(url.to_string())),
        }
    }
}

impl From<PathBuf> for Location {
    fn from(value: PathBuf) -> Self {
        Location::Path(value)
    }
}

impl From<&Path> for Location {
    fn from(value: &Path) -> Self {
        Location::Path(value.to_path_buf())
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Location::Path(PathBuf::from(value))
    }
}

impl From<Url> for Location {
    fn from(value: Url) -> Self {
        Location::Url(value)
    }
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Directory the search starts in.
    /// Default is `None`, meaning the working directory of the process.
    pub cwd: Option<Location>,
    /// Kind of entry that counts as a match.
    /// Default is `EntryKind::File`.
    pub kind: EntryKind,
    /// The walk never probes this directory, unless the search starts in it.
    /// Default is `None`, meaning the root of `cwd`.
    pub stop_at: Option<Location>,
    /// Whether a symlink is followed when checking its kind.
    /// Default is `true`.
    pub allow_symlinks: bool,
    /// Upper bound on collected matches, only read by the `multiple` searches.
    /// Default is `None`.
    pub limit: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cwd: None,
            kind: EntryKind::File,
            stop_at: None,
            allow_symlinks: true,
            limit: None,
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_cwd<L: Into<Location>>(self, cwd: L) -> Self {
        Self {
            cwd: Some(cwd.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_kind(self, kind: EntryKind) -> Self {
        Self { kind, ..self }
    }

    #[must_use]
    pub fn with_stop_at<L: Into<Location>>(self, stop_at: L) -> Self {
        Self {
            stop_at: Some(stop_at.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_allow_symlinks(self, allow_symlinks: bool) -> Self {
        Self {
            allow_symlinks,
            ..self
        }
    }

    #[must_use]
    pub fn with_limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }
}
