//! TreeWalker - pre-order depth-first walk that streams each node to a sink

use std::path::Path;

use log::{debug, trace, warn};

use crate::output::LineCollector;

use super::config::WalkerConfig;
use super::error::WalkError;
use super::streaming::{StreamingOutput, WalkSummary};
use super::traversal::{DirListing, read_listing};
use super::utils::{depth_of, root_name};

/// Tree walker that streams directories and files to a [`StreamingOutput`].
///
/// Only the listings along the current branch are held in memory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream every node to `output`.
    ///
    /// Fails up front if the root is missing or unreadable, in which case
    /// nothing is written. Unreadable subdirectories are printed, warned
    /// about, and not descended into.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary, WalkError> {
        if !root.is_dir() {
            return Err(WalkError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let listing =
            read_listing(root, &self.config).map_err(|source| WalkError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;

        debug!(
            "walking {} (ignoring {:?})",
            root.display(),
            self.config.ignore_dirs
        );

        let mut summary = WalkSummary::default();
        self.walk_dir(root, root, &root_name(root), listing, output, &mut summary)?;
        output.finish(&summary)?;

        debug!(
            "walked {} directories, {} files, {} skipped",
            summary.dirs, summary.files, summary.skipped
        );
        Ok(summary)
    }

    /// Walk `root` and return the rendered lines without trailing newlines.
    pub fn lines(&self, root: &Path) -> Result<Vec<String>, WalkError> {
        let mut collector = LineCollector::new();
        self.walk_streaming(root, &mut collector)?;
        Ok(collector.into_lines())
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        root: &Path,
        path: &Path,
        name: &str,
        listing: DirListing,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<(), WalkError> {
        let depth = depth_of(root, path);
        trace!("visiting {} at depth {}", path.display(), depth);

        output.output_dir(name, depth)?;
        summary.dirs += 1;
        summary.skipped += listing.skipped;

        for file in &listing.files {
            output.output_file(file, depth + 1)?;
            summary.files += 1;
        }

        for (child_name, child_path) in listing.dirs {
            match read_listing(&child_path, &self.config) {
                Ok(child) => {
                    self.walk_dir(root, &child_path, &child_name, child, output, summary)?;
                }
                Err(source) => {
                    let err = WalkError::ReadPermissionDenied {
                        path: child_path,
                        source,
                    };
                    warn!("{}", err);
                    output.output_dir(&child_name, depth + 1)?;
                    summary.dirs += 1;
                    summary.skipped += 1;
                }
            }
        }

        Ok(())
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Walk `root`, skipping directories named in `ignore`, and return one
/// rendered line per directory and file.
pub fn walk<I, S>(root: &Path, ignore: I) -> Result<Vec<String>, WalkError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TreeWalker::new(WalkerConfig::with_ignore_dirs(ignore)).lines(root)
}
