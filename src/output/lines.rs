//! In-memory sink that keeps each rendered line

use std::io;

use crate::tree::StreamingOutput;

use super::utils::{format_dir_line, format_file_line};

/// Collects plain-text lines instead of printing them.
#[derive(Debug, Default)]
pub struct LineCollector {
    lines: Vec<String>,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl StreamingOutput for LineCollector {
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        self.lines.push(format_dir_line(name, depth));
        Ok(())
    }

    fn output_file(&mut self, name: &str, depth: usize) -> io::Result<()> {
        self.lines.push(format_file_line(name, depth));
        Ok(())
    }
}
