use std::{fmt::Debug, io, path::Path};

use crate::entry::EntryStat;

/// Suspending counterpart of [`crate::FileSystem`], one probe per call.
#[async_trait::async_trait]
pub trait AsyncFileSystem: Sync + Send + Debug {
    async fn stat(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryStat>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFS {}

#[async_trait::async_trait]
impl AsyncFileSystem for TokioFS {
    async fn stat(&self, path: &Path, follow_symlinks: bool) -> io::Result<EntryStat> {
        let metadata = if follow_symlinks {
            tokio::fs::metadata(path).await
        } else {
            tokio::fs::symlink_metadata(path).await
        };
        EntryStat::from_metadata(metadata)
    }
}
