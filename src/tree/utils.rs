//! Shared utility functions for tree walking

use std::path::{Component, Path};

/// Number of directory levels between `path` and `root`.
///
/// The root itself is depth 0, its direct children depth 1, and so on.
/// A path that does not live under `root` is treated as the root.
pub fn depth_of(root: &Path, path: &Path) -> usize {
    path.strip_prefix(root)
        .map(|rel| rel.components().count())
        .unwrap_or(0)
}

/// Display name of the root directory, i.e. its basename.
///
/// `.` and `..` name themselves, a bare `/` has an empty basename so the
/// root line comes out as `/`.
pub fn root_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::Prefix(prefix)) => prefix.as_os_str().to_string_lossy().into_owned(),
        Some(Component::RootDir) | None => String::new(),
    }
}
