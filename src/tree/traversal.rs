//! Reading and filtering a single directory listing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{trace, warn};

use super::config::WalkerConfig;

/// Immediate contents of one directory after filtering.
#[derive(Debug, Default)]
pub struct DirListing {
    /// File names, emitted unfiltered.
    pub files: Vec<String>,
    /// Subdirectories that survived the ignore set, as (name, path).
    pub dirs: Vec<(String, PathBuf)>,
    /// Entries dropped because their type could not be read.
    pub skipped: usize,
}

/// Read `path`, split its entries into files and subdirectories, and drop
/// ignored subdirectories before anyone descends into them.
///
/// Only real directories count as directories; symlinks are never followed
/// and are listed with the files.
pub fn read_listing(path: &Path, config: &WalkerConfig) -> io::Result<DirListing> {
    let mut listing = DirListing::default();

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping entry in '{}': {}", path.display(), e);
                listing.skipped += 1;
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("skipping '{}': {}", entry.path().display(), e);
                listing.skipped += 1;
                continue;
            }
        };

        if file_type.is_dir() {
            if config.is_ignored(&name) {
                trace!("ignoring directory {}", entry.path().display());
                continue;
            }
            listing.dirs.push((name, entry.path()));
        } else {
            listing.files.push(name);
        }
    }

    if config.sort {
        listing.files.sort();
        listing.dirs.sort_by(|a, b| a.0.cmp(&b.0));
    }

    Ok(listing)
}
