//! Line-oriented source buffer with indentation.

use std::fmt::{Display, Write};

/// Builds generated source one line at a time.
///
/// Blank lines carry no indentation, so output never has trailing whitespace.
#[derive(Debug)]
pub(crate) struct CodeWriter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl CodeWriter {
    pub(crate) fn new(indent_str: &'static str) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str,
        }
    }

    /// Appends `text` at the current indentation, followed by a newline.
    pub(crate) fn line(&mut self, text: impl Display) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
        // Writing to a String cannot fail.
        let _ = writeln!(self.buffer, "{text}");
    }

    pub(crate) fn blank(&mut self) {
        self.buffer.push('\n');
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub(crate) fn finish(self) -> String {
        self.buffer
    }
}
