//! Directory tree walking logic
//!
//! `TreeWalker` performs a pre-order, depth-first walk and streams each
//! directory and file to a `StreamingOutput` sink. Ignored directory names
//! are filtered out of each listing before the walker descends.

mod config;
mod error;
mod streaming;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_IGNORE_DIRS, WalkerConfig};
pub use error::WalkError;
pub use streaming::{StreamingOutput, WalkSummary};
pub use traversal::{DirListing, read_listing};
pub use utils::{depth_of, root_name};
pub use walker::{TreeWalker, walk};
