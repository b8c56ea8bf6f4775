//! # find_up
//!
//! Find a file or directory by walking up parent directories.
//!
//! ## How to use?
//!
//! ```rust,no_run
//! // /project
//! // |-- package.json
//! // |-- src
//! // |---- lib
//!
//! use find_up::{find_up_sync, EntryKind, Options};
//!
//! let options = Options::default().with_cwd("/project/src/lib");
//! find_up_sync("package.json", options.clone());
//! // -> Ok(Some("/project/package.json"))
//!
//! let options = options.with_kind(EntryKind::Directory);
//! find_up_sync("src", options);
//! // -> Ok(Some("/project/src"))
//! ```
//!
//! The directory the search starts in is always probed. After it, the walk
//! halts before probing the `stop_at` directory or the filesystem root.

mod ancestors;
mod builder;
mod entry;
mod error;
mod fs;
mod fs_interface;
mod kind;
pub mod log;
pub mod normalize;
mod options;
mod resolve;
mod state;

pub use ancestors::{Ancestors, Bounds};
pub use builder::FinderBuilder;
pub use entry::EntryStat;
pub use error::*;
pub use fs::{FileSystem, MemoryFS, FS};
pub use fs_interface::{AsyncFileSystem, TokioFS};
pub use kind::EntryKind;
pub use options::{Location, Options};
pub use state::{Match, Step};

use std::path::PathBuf;
use std::sync::Arc;

pub type RResult<T> = Result<T, Error>;

#[derive(Debug)]
pub struct Finder {
    pub options: Options,
    pub(crate) fs: Arc<dyn FileSystem>,
    pub(crate) async_fs: Arc<dyn AsyncFileSystem>,
}

impl Finder {
    pub fn new(options: Options) -> Self {
        FinderBuilder::new().build(options)
    }
}

pub async fn find_up(name: &str, options: Options) -> RResult<Option<PathBuf>> {
    Finder::new(options).find(name).await
}

pub fn find_up_sync(name: &str, options: Options) -> RResult<Option<PathBuf>> {
    Finder::new(options).find_sync(name)
}

pub async fn find_up_multiple(name: &str, options: Options) -> RResult<Vec<PathBuf>> {
    Finder::new(options).find_multiple(name).await
}

pub fn find_up_multiple_sync(name: &str, options: Options) -> RResult<Vec<PathBuf>> {
    Finder::new(options).find_multiple_sync(name)
}

#[cfg(debug_assertions)]
pub mod test_helper {
    use std::path::{Path, PathBuf};

    /// Creates every path under `root`, a trailing `/` marks a directory.
    pub fn tree(root: &Path, entries: &[&str]) -> PathBuf {
        for entry in entries {
            let path = root.join(entry.trim_end_matches('/'));
            if entry.ends_with('/') {
                std::fs::create_dir_all(&path).unwrap();
            } else {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).unwrap();
                }
                std::fs::write(&path, "").unwrap();
            }
        }
        root.to_path_buf()
    }
}
