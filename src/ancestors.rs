use std::path::{Path, PathBuf};

use crate::normalize::{dirname, resolve_from, root_of};
use crate::{Options, RResult};

/// The resolved extent of a walk: where it starts and where it must halt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    start: PathBuf,
    stop: PathBuf,
    root: PathBuf,
}

impl Bounds {
    pub fn new(start: PathBuf, stop: PathBuf) -> Self {
        let root = root_of(&start);
        Self { start, stop, root }
    }

    /// Resolves `cwd` and `stop_at` of `options`. This is the only place the
    /// working directory of the process is read, and only when `cwd` is
    /// missing or relative.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn resolve(options: &Options) -> RResult<Self> {
        let cwd = match &options.cwd {
            Some(location) => location.to_path()?,
            None => std::env::current_dir()?,
        };
        let start = if cwd.is_absolute() {
            resolve_from(&cwd, &cwd)?
        } else {
            resolve_from(&std::env::current_dir()?, &cwd)?
        };
        let root = root_of(&start);
        let stop = match &options.stop_at {
            Some(location) => resolve_from(&start, &location.to_path()?)?,
            None => root.clone(),
        };
        tracing::trace!(start = %start.display(), stop = %stop.display(), "resolved bounds");
        Ok(Self { start, stop, root })
    }

    pub fn start(&self) -> &Path {
        &self.start
    }

    pub fn stop(&self) -> &Path {
        &self.stop
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: Some(&self.start),
            bounds: self,
        }
    }
}

/// Directories a walk probes, nearest first. The start is always yielded;
/// after it, reaching the stop directory, the root, or running out of
/// parents ends the sequence without yielding that directory.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Path>,
    bounds: &'a Bounds,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Path;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let Bounds { stop, root, .. } = self.bounds;
        // a start equal to the stop or the root is the only directory walked
        self.next = if current == stop.as_path() || current == root.as_path() {
            None
        } else {
            dirname(current)
                .filter(|parent| *parent != stop.as_path() && *parent != root.as_path())
        };
        Some(current)
    }
}
