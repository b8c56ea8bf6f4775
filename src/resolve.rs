use std::path::{Path, PathBuf};

use crate::ancestors::Bounds;
use crate::normalize::{candidate, resolve_from};
use crate::state::{Match, Step};
use crate::{Error, Finder, RResult};

/// `Some(0)` is treated like no limit.
fn is_full(found: &[PathBuf], limit: Option<usize>) -> bool {
    matches!(limit, Some(limit) if limit > 0 && found.len() >= limit)
}

impl Finder {
    fn bounds_for(&self, name: &str) -> RResult<Bounds> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Bounds::resolve(&self.options)
    }

    fn walk_sync(&self, name: &str, limit: Option<usize>) -> RResult<Vec<PathBuf>> {
        let bounds = self.bounds_for(name)?;
        let mut found = Vec::new();
        for dir in bounds.ancestors() {
            let path = candidate(dir, name)?;
            tracing::trace!("probe {}", path.display());
            let probe = self.fs.stat(&path, self.options.allow_symlinks);
            if let Some(path) = Step::from_probe(path, self.options.kind, probe).into_match() {
                tracing::debug!("matched {}", path.display());
                found.push(path);
                if is_full(&found, limit) {
                    break;
                }
            }
        }
        Ok(found)
    }

    async fn walk(&self, name: &str, limit: Option<usize>) -> RResult<Vec<PathBuf>> {
        let bounds = self.bounds_for(name)?;
        let mut found = Vec::new();
        for dir in bounds.ancestors() {
            let path = candidate(dir, name)?;
            tracing::trace!("probe {}", path.display());
            let probe = self
                .async_fs
                .stat(&path, self.options.allow_symlinks)
                .await;
            if let Some(path) = Step::from_probe(path, self.options.kind, probe).into_match() {
                tracing::debug!("matched {}", path.display());
                found.push(path);
                if is_full(&found, limit) {
                    break;
                }
            }
        }
        Ok(found)
    }

    fn walk_with_sync<F>(&self, mut matcher: F, limit: Option<usize>) -> RResult<Vec<PathBuf>>
    where
        F: FnMut(&Path) -> Match,
    {
        let bounds = Bounds::resolve(&self.options)?;
        let mut found = Vec::new();
        for dir in bounds.ancestors() {
            match matcher(dir) {
                Match::Found(path) => {
                    found.push(resolve_from(dir, &path)?);
                    if is_full(&found, limit) {
                        break;
                    }
                }
                Match::Continue => {}
                Match::Stop => break,
            }
        }
        Ok(found)
    }

    /// Returns the nearest match for `name`, `Ok(None)` when nothing matches.
    #[tracing::instrument(skip(self))]
    pub fn find_sync(&self, name: &str) -> RResult<Option<PathBuf>> {
        Ok(self.walk_sync(name, Some(1))?.into_iter().next())
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, name: &str) -> RResult<Option<PathBuf>> {
        Ok(self.walk(name, Some(1)).await?.into_iter().next())
    }

    /// Every match for `name`, nearest first, up to `options.limit`.
    #[tracing::instrument(skip(self))]
    pub fn find_multiple_sync(&self, name: &str) -> RResult<Vec<PathBuf>> {
        self.walk_sync(name, self.options.limit)
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_multiple(&self, name: &str) -> RResult<Vec<PathBuf>> {
        self.walk(name, self.options.limit).await
    }

    /// Hands each walked directory to `matcher` instead of probing a name.
    /// `options.kind` and `options.allow_symlinks` are not consulted.
    #[tracing::instrument(skip_all)]
    pub fn find_with_sync<F>(&self, matcher: F) -> RResult<Option<PathBuf>>
    where
        F: FnMut(&Path) -> Match,
    {
        Ok(self.walk_with_sync(matcher, Some(1))?.into_iter().next())
    }

    #[tracing::instrument(skip_all)]
    pub fn find_multiple_with_sync<F>(&self, matcher: F) -> RResult<Vec<PathBuf>>
    where
        F: FnMut(&Path) -> Match,
    {
        self.walk_with_sync(matcher, self.options.limit)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{EntryKind, FinderBuilder, MemoryFS, Options};

    fn finder(fs: &Arc<MemoryFS>, options: Options) -> Finder {
        FinderBuilder::new()
            .with_fs(fs.clone())
            .with_async_fs(fs.clone())
            .build(options)
    }

    #[test]
    fn test_stop_at_start_probes_once() {
        let fs = Arc::new(MemoryFS::new().with_file("/a/config.json"));
        let options = Options::default().with_cwd("/a/b").with_stop_at("/a/b");
        let result = finder(&fs, options).find_sync("config.json").unwrap();
        assert_eq!(result, None);
        assert_eq!(fs.probes(), vec![PathBuf::from("/a/b/config.json")]);
    }

    #[test]
    fn test_match_in_start_ends_walk() {
        let fs = Arc::new(
            MemoryFS::new()
                .with_file("/a/b/config.json")
                .with_file("/a/config.json"),
        );
        let options = Options::default().with_cwd("/a/b");
        let result = finder(&fs, options).find_sync("config.json").unwrap();
        assert_eq!(result, Some(PathBuf::from("/a/b/config.json")));
        assert_eq!(fs.probes(), vec![PathBuf::from("/a/b/config.json")]);
    }

    #[test]
    fn test_relative_segments_are_folded() {
        let fs = Arc::new(MemoryFS::new().with_file("/a/config.json"));
        let options = Options::default().with_cwd("/a/b/c");
        let result = finder(&fs, options.clone())
            .find_sync("../config.json")
            .unwrap();
        assert_eq!(result, Some(PathBuf::from("/a/config.json")));

        let options = options.with_cwd("/a");
        let result = finder(&fs, options).find_sync("./config.json").unwrap();
        assert_eq!(result, Some(PathBuf::from("/a/config.json")));
    }

    #[test]
    fn test_root_is_not_probed_after_start() {
        let fs = Arc::new(MemoryFS::new().with_file("/config.json"));
        let options = Options::default().with_cwd("/a/b");
        let result = finder(&fs, options).find_sync("config.json").unwrap();
        assert_eq!(result, None);
        assert_eq!(
            fs.probes(),
            vec![
                PathBuf::from("/a/b/config.json"),
                PathBuf::from("/a/config.json")
            ]
        );
    }

    #[test]
    fn test_start_at_root_probes_root() {
        let fs = Arc::new(MemoryFS::new().with_file("/config.json"));
        let options = Options::default().with_cwd("/");
        let result = finder(&fs, options).find_sync("config.json").unwrap();
        assert_eq!(result, Some(PathBuf::from("/config.json")));
    }

    #[test]
    fn test_probe_error_does_not_stop_the_walk() {
        let fs = Arc::new(
            MemoryFS::new()
                .with_error("/a/b/config.json", std::io::ErrorKind::PermissionDenied)
                .with_file("/a/config.json"),
        );
        let options = Options::default().with_cwd("/a/b");
        let result = finder(&fs, options).find_sync("config.json").unwrap();
        assert_eq!(result, Some(PathBuf::from("/a/config.json")));
    }

    #[test]
    fn test_absolute_name_is_probed_at_every_level() {
        let fs = Arc::new(MemoryFS::new());
        let options = Options::default().with_cwd("/a/b/c");
        let result = finder(&fs, options).find_sync("/etc/hosts").unwrap();
        assert_eq!(result, None);
        assert_eq!(fs.probes(), vec![PathBuf::from("/etc/hosts"); 3]);
    }

    #[test]
    fn test_symlink_is_only_matched_when_allowed() {
        let fs = Arc::new(MemoryFS::new().with_file_link("/a/config.json"));
        let options = Options::default().with_cwd("/a/b");
        let result = finder(&fs, options.clone())
            .find_sync("config.json")
            .unwrap();
        assert_eq!(result, Some(PathBuf::from("/a/config.json")));

        let options = options.with_allow_symlinks(false);
        let result = finder(&fs, options).find_sync("config.json").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_multiple_respects_limit() {
        let fs = Arc::new(
            MemoryFS::new()
                .with_dir("/a/b/c/.git")
                .with_dir("/a/.git"),
        );
        let options = Options::default()
            .with_cwd("/a/b/c")
            .with_kind(EntryKind::Directory);
        let all = finder(&fs, options.clone())
            .find_multiple_sync(".git")
            .unwrap();
        assert_eq!(
            all,
            vec![PathBuf::from("/a/b/c/.git"), PathBuf::from("/a/.git")]
        );

        let one = finder(&fs, options.with_limit(1))
            .find_multiple_sync(".git")
            .unwrap();
        assert_eq!(one, vec![PathBuf::from("/a/b/c/.git")]);
    }

    #[test]
    fn test_matcher_resolves_against_directory() {
        let fs = Arc::new(MemoryFS::new());
        let options = Options::default().with_cwd("/a/b/c");
        let result = finder(&fs, options)
            .find_with_sync(|dir| {
                if dir == Path::new("/a/b") {
                    Match::Found(PathBuf::from("../x.toml"))
                } else {
                    Match::Continue
                }
            })
            .unwrap();
        assert_eq!(result, Some(PathBuf::from("/a/x.toml")));
    }

    #[test]
    fn test_matcher_stop_ends_walk() {
        let fs = Arc::new(MemoryFS::new());
        let options = Options::default().with_cwd("/a/b/c");
        let mut seen = Vec::new();
        let result = finder(&fs, options)
            .find_multiple_with_sync(|dir| {
                seen.push(dir.to_path_buf());
                Match::Stop
            })
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(seen, vec![PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let fs = Arc::new(MemoryFS::new());
        let result = finder(&fs, Options::default().with_cwd("/a")).find_sync("");
        assert!(matches!(result, Err(Error::EmptyName)));
        assert!(fs.probes().is_empty());
    }

    #[tokio::test]
    async fn test_async_walks_like_sync() {
        let fs = Arc::new(
            MemoryFS::new()
                .with_file("/a/b")
                .with_dir("/a/b/c/b")
                .with_file("/a/config.json"),
        );
        let options = Options::default().with_cwd("/a/b/c/d");
        let dirs = finder(&fs, options.clone().with_kind(EntryKind::Directory));
        assert_eq!(dirs.find("b").await.unwrap(), dirs.find_sync("b").unwrap());
        assert_eq!(dirs.find("b").await.unwrap(), Some(PathBuf::from("/a/b/c/b")));

        let files = finder(&fs, options);
        assert_eq!(
            files.find("config.json").await.unwrap(),
            Some(PathBuf::from("/a/config.json"))
        );
        assert_eq!(
            files.find_multiple("config.json").await.unwrap(),
            files.find_multiple_sync("config.json").unwrap()
        );
    }
}
