//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Indentation and line rendering
//! - `streaming` - Streaming formatter for console output
//! - `lines` - Sink that collects lines in memory

mod config;
mod lines;
mod streaming;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use lines::LineCollector;
pub use streaming::StreamingFormatter;
pub use utils::{INDENT_WIDTH, format_dir_line, format_file_line, indent};
