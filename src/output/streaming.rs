//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each line as soon
//! as the walker reports it, for use with `TreeWalker::walk_streaming`.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{StreamingOutput, WalkSummary};

use super::config::OutputConfig;
use super::utils::indent;

/// Streaming output formatter - writes directly to a terminal stream.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    ///
    /// `use_color` is taken as already decided, so the environment is not
    /// consulted again here.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        write!(self.out, "{}", indent(depth))?;
        if self.config.use_color {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(self.out, "{}/", name)?;
        if self.config.use_color {
            self.out.reset()?;
        }
        writeln!(self.out)
    }

    fn output_file(&mut self, name: &str, depth: usize) -> io::Result<()> {
        writeln!(self.out, "{}{}", indent(depth), name)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;

    fn render(use_color: bool, buffer: Buffer) -> String {
        let mut formatter = StreamingFormatter::with_writer(OutputConfig { use_color }, buffer);
        formatter.output_dir("root", 0).unwrap();
        formatter.output_file("c.txt", 1).unwrap();
        formatter.output_dir("a", 1).unwrap();
        formatter.output_file("b.txt", 2).unwrap();
        formatter.finish(&WalkSummary::default()).unwrap();
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_plain_output_is_exact() {
        let output = render(false, Buffer::no_color());
        assert_eq!(output, "root/\n    c.txt\n    a/\n        b.txt\n");
    }

    #[test]
    fn test_color_only_wraps_directory_names() {
        let output = render(true, Buffer::ansi());
        assert!(output.contains('\u{1b}'), "expected ANSI escapes: {:?}", output);
        assert!(output.contains("    c.txt\n"));
        assert!(output.contains("        b.txt\n"));

        // Stripping escapes gives back the plain text.
        let mut plain = String::new();
        let mut in_escape = false;
        for c in output.chars() {
            match c {
                '\u{1b}' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if in_escape => {}
                _ => plain.push(c),
            }
        }
        assert_eq!(plain, "root/\n    c.txt\n    a/\n        b.txt\n");
    }

    #[test]
    fn test_color_setting_ignored_by_no_color_writer() {
        let output = render(true, Buffer::no_color());
        assert_eq!(output, "root/\n    c.txt\n    a/\n        b.txt\n");
    }
}
