//! Sink interface for streamed walk output

use std::io;

/// Counts gathered during a walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    /// Directories or entries that could not be read and were left out.
    pub skipped: usize,
}

/// Callback for streaming output - receives each node in traversal order.
pub trait StreamingOutput {
    /// A directory at `depth` (the root is depth 0).
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()>;

    /// A file inside a directory at `depth - 1`.
    fn output_file(&mut self, name: &str, depth: usize) -> io::Result<()>;

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        Ok(())
    }
}
