use std::sync::Arc;

use crate::fs::{FileSystem, FS};
use crate::fs_interface::{AsyncFileSystem, TokioFS};
use crate::{Finder, Options};

#[derive(Debug)]
pub struct FinderBuilder {
    fs: Arc<dyn FileSystem>,
    async_fs: Arc<dyn AsyncFileSystem>,
}

impl Default for FinderBuilder {
    fn default() -> Self {
        Self {
            fs: Arc::new(FS::default()),
            async_fs: Arc::new(TokioFS::default()),
        }
    }
}

impl FinderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prober used by the blocking searches.
    pub fn with_fs(self, fs: Arc<dyn FileSystem>) -> Self {
        Self { fs, ..self }
    }

    /// Prober used by the async searches.
    pub fn with_async_fs(self, async_fs: Arc<dyn AsyncFileSystem>) -> Self {
        Self { async_fs, ..self }
    }

    pub fn build(self, options: Options) -> Finder {
        Finder {
            options,
            fs: self.fs,
            async_fs: self.async_fs,
        }
    }
}
