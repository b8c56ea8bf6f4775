use std::path::{Component, Path, PathBuf};

use path_absolutize::Absolutize;

use crate::RResult;

/// Resolves `path` against `base` lexically, `.` and `..` are folded and
/// symlinks are left alone.
pub fn resolve_from(base: &Path, path: &Path) -> RResult<PathBuf> {
    let absolute = path.absolutize_from(base)?;
    // Eliminate `\\?\` prefix in windows.
    Ok(dunce::simplified(&absolute).to_path_buf())
}

/// The root of an absolute path, `/` on unix or e.g. `C:\` on windows.
pub fn root_of(path: &Path) -> PathBuf {
    path.components()
        .take_while(|component| matches!(component, Component::Prefix(_) | Component::RootDir))
        .fold(PathBuf::new(), |mut acc, component| {
            acc.push(component.as_os_str());
            acc
        })
}

/// Parent of `path`, `None` once the root has been passed.
pub fn dirname(path: &Path) -> Option<&Path> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

pub fn is_absolute(name: &str) -> bool {
    Path::new(name).is_absolute()
}

/// The path probed in `dir`: `name` itself when absolute, otherwise `name`
/// joined onto `dir` with `.` and `..` folded.
pub fn candidate(dir: &Path, name: &str) -> RResult<PathBuf> {
    if is_absolute(name) {
        Ok(PathBuf::from(name))
    } else {
        resolve_from(dir, Path::new(name))
    }
}
