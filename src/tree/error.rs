//! Errors raised while walking a directory tree

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure modes of a walk.
///
/// `RootNotFound`, `RootUnreadable` and `Output` abort the walk.
/// `ReadPermissionDenied` is reported for a single branch, which is then skipped.
#[derive(Debug)]
pub enum WalkError {
    /// The root does not exist or is not a directory.
    RootNotFound { path: PathBuf },
    /// The root is a directory but cannot be listed.
    RootUnreadable { path: PathBuf, source: io::Error },
    /// A directory below the root cannot be listed.
    ReadPermissionDenied { path: PathBuf, source: io::Error },
    /// Writing a line to the output sink failed.
    Output(io::Error),
}

impl WalkError {
    /// The reader of our output went away (e.g. `treewalk | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, WalkError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::RootNotFound { path } => write!(
                f,
                "cannot access '{}': No such directory",
                path.display()
            ),
            WalkError::RootUnreadable { path, source } => {
                write!(f, "cannot open directory '{}': {}", path.display(), source)
            }
            WalkError::ReadPermissionDenied { path, source } => {
                write!(f, "skipping '{}': {}", path.display(), source)
            }
            WalkError::Output(e) => write!(f, "error writing output: {}", e),
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalkError::RootNotFound { .. } => None,
            WalkError::RootUnreadable { source, .. }
            | WalkError::ReadPermissionDenied { source, .. } => Some(source),
            WalkError::Output(e) => Some(e),
        }
    }
}

impl From<io::Error> for WalkError {
    fn from(e: io::Error) -> Self {
        WalkError::Output(e)
    }
}
