use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::FileSystem;
use crate::entry::EntryStat;
use crate::fs_interface::AsyncFileSystem;

#[derive(Debug, Clone, Copy)]
enum Node {
    Stat(EntryStat),
    /// A symlink to an entry of the given stat.
    Link(EntryStat),
    Fail(io::ErrorKind),
}

/// In-memory prober. Every probed path is recorded in order.
#[derive(Debug, Default)]
pub struct MemoryFS {
    nodes: HashMap<PathBuf, Node>,
    probes: Mutex<Vec<PathBuf>>,
}

impl MemoryFS {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.nodes.insert(path.into(), Node::Stat(EntryStat::file()));
        self
    }

    pub fn with_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.nodes
            .insert(path.into(), Node::Stat(EntryStat::directory()));
        self
    }

    pub fn with_file_link<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.nodes.insert(path.into(), Node::Link(EntryStat::file()));
        self
    }

    /// Probing `path` fails with `kind`.
    pub fn with_error<P: Into<PathBuf>>(mut self, path: P, kind: io::ErrorKind) -> Self {
        self.nodes.insert(path.into(), Node::Fail(kind));
        self
    }

    pub fn probes(&self) -> Vec<PathBuf> {
        self.probes
            .lock()
            .map(|probes| probes.clone())
            .unwrap_or_default()
    }

    fn lookup(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryStat> {
        if let Ok(mut probes) = self.probes.lock() {
            probes.push(path.to_path_buf());
        }
        match self.nodes.get(path) {
            None => Ok(EntryStat::missing()),
            Some(Node::Stat(stat)) => Ok(*stat),
            Some(Node::Link(target)) if follow_symlinks => Ok(*target),
            Some(Node::Link(_)) => Ok(EntryStat::other()),
            Some(Node::Fail(kind)) => Err(io::Error::from(*kind)),
        }
    }
}

impl FileSystem for MemoryFS {
    fn stat(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryStat> {
        self.lookup(path, follow_symlinks)
    }
}

#[async_trait::async_trait]
impl AsyncFileSystem for MemoryFS {
    async fn stat(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryStat> {
        tokio::task::yield_now().await;
        self.lookup(path, follow_symlinks)
    }
}
