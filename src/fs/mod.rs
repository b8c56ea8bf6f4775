mod memory;
use std::fmt::Debug;
use std::io;
use std::path::Path;

use crate::entry::EntryStat;

pub use memory::*;

/// Blocking prober. A missing entry is `Ok(EntryStat::missing())`, never an error.
pub trait FileSystem: Debug + Send + Sync {
    fn stat(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryStat>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FS {}

impl FileSystem for FS {
    fn stat(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryStat> {
        EntryStat::stat(path, follow_symlinks)
    }
}
