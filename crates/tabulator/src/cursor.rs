//! Per-column scan state.
//!
//! A [`ColumnCursor`] walks one column's text a byte at a time and decides
//! where each output line of that column ends. A line ends at:
//!
//! - an explicit `\n`,
//! - a space or tab when the word after it would not fit in what is left
//!   of the line,
//! - the column width, when a single word is wider than the column and has
//!   to be hard-wrapped.
//!
//! The byte that triggers a break is consumed but never written.
//!
//! Each whitespace runs a lookahead of at most `width` bytes, which keeps a
//! whole column scan linear in its length.

use std::io::{self, Write};

use crate::column::Column;

/// Returns true for horizontal whitespace (space and tab).
fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

fn is_break_candidate(byte: u8) -> bool {
    byte == b'\n' || is_blank(byte)
}

/// Scan position within one column.
///
/// `consumed` only ever grows and never passes the column length.
/// `line_pos` counts bytes written on the current output line and is reset by
/// [`break_line`](ColumnCursor::break_line).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnCursor {
    consumed: usize,
    line_pos: usize,
}

impl ColumnCursor {
    /// Create a cursor at the start of a column.
    pub fn new() -> Self {
        ColumnCursor::default()
    }

    /// Number of bytes consumed from the column text.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of bytes written on the current output line.
    pub fn line_pos(&self) -> usize {
        self.line_pos
    }

    /// The next byte without consuming it.
    pub fn peek(&self, column: &Column<'_>) -> Option<u8> {
        column.as_bytes().get(self.consumed).copied()
    }

    /// Take the next byte, or `None` once the text is exhausted.
    pub fn consume(&mut self, column: &Column<'_>) -> Option<u8> {
        let byte = self.peek(column)?;
        self.consumed += 1;
        Some(byte)
    }

    /// Returns true once every byte of the column has been consumed.
    pub fn at_end(&self, column: &Column<'_>) -> bool {
        self.consumed >= column.len()
    }

    /// Decide whether a just-consumed byte ends the current line.
    pub fn is_line_break(&self, byte: u8, column: &Column<'_>) -> bool {
        byte == b'\n' || (is_blank(byte) && !self.next_word_fits(column))
    }

    /// Returns true if the word starting at the scan position fits on the
    /// current line after a separating blank.
    ///
    /// The word ends at the next blank or the end of the text. A tail that
    /// reaches the end of the text before the width runs out fits.
    pub fn next_word_fits(&self, column: &Column<'_>) -> bool {
        let width = column.width();
        let mut pos = self.line_pos;

        for &byte in &column.as_bytes()[self.consumed..] {
            if pos >= width {
                break;
            }
            if is_blank(byte) {
                return true;
            }
            pos += 1;
        }

        pos < width
    }

    /// Write one byte and advance the line position.
    pub fn emit<W: Write + ?Sized>(&mut self, out: &mut W, byte: u8) -> io::Result<()> {
        out.write_all(&[byte])?;
        self.line_pos += 1;
        Ok(())
    }

    /// Start a new output line.
    pub fn break_line(&mut self) {
        self.line_pos = 0;
    }

    /// Write as much of the column as fits on the current line.
    ///
    /// Stops after consuming a breaking newline or blank, at the end of the
    /// text, or before a word byte that would overflow a non-empty line.
    pub fn emit_line<W: Write + ?Sized>(
        &mut self,
        column: &Column<'_>,
        out: &mut W,
    ) -> io::Result<()> {
        while let Some(byte) = self.peek(column) {
            if !is_break_candidate(byte) && self.line_full(column) {
                break;
            }
            self.consumed += 1;
            if self.is_line_break(byte, column) {
                break;
            }
            self.emit(out, byte)?;
        }
        Ok(())
    }

    // At least one byte is always placed per line, even with width 0.
    fn line_full(&self, column: &Column<'_>) -> bool {
        self.line_pos > 0 && self.line_pos >= column.width()
    }
}
