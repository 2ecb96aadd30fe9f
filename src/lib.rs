//! treewalk - print an indented directory tree, skipping ignored directories

pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use output::{LineCollector, OutputConfig, StreamingFormatter};
pub use tree::{
    DEFAULT_IGNORE_DIRS, StreamingOutput, TreeWalker, WalkError, WalkSummary, WalkerConfig, walk,
};
