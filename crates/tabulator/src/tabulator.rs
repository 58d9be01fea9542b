//! Multi-column line emission.
//!
//! [`Tabulator`] drives one [`ColumnCursor`] per column. Each output line
//! takes, in column order, whatever the column's cursor can place on that
//! line, pads it to the column width with the fill byte and writes the
//! separator (except after the last column). Lines are emitted until every
//! column is exhausted; a column that runs out early keeps contributing blank,
//! padded cells so the columns stay aligned.

use std::io::{self, Write};

use log::debug;

use crate::column::Column;
use crate::cursor::ColumnCursor;
use crate::error::Result;

/// Logical width of one tab fill step.
const TAB_STEP: usize = 8;

/// Separator and fill configuration for writing columns side by side.
///
/// # Example
///
/// ```rust
/// use tabulator::{Column, Tabulator};
///
/// let out = Tabulator::new()
///     .separator(" | ")
///     .render(&[Column::new("abc def ghi", 6), Column::new("123 4432 17 8989", 4)])
///     .unwrap();
///
/// assert_eq!(
///     out,
///     "abc    | 123\ndef    | 4432\nghi    | 17\n       | 8989\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tabulator {
    separator: String,
    fill: u8,
}

impl Default for Tabulator {
    fn default() -> Self {
        Tabulator {
            separator: " ".to_string(),
            fill: b' ',
        }
    }
}

impl Tabulator {
    /// Create a tabulator with a single space as separator and fill.
    pub fn new() -> Self {
        Tabulator::default()
    }

    /// Set the string written between adjacent columns.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.separator = sep.into();
        self
    }

    /// Set the byte used to pad a column up to its width.
    ///
    /// A tab fill advances the logical position by 8 per byte written.
    pub fn fill(mut self, fill: u8) -> Self {
        self.fill = fill;
        self
    }

    /// Write all columns into `out`, one `\n`-terminated line at a time.
    ///
    /// Returns `out` so calls can be chained. Errors come only from the sink.
    pub fn write<'w, W: Write + ?Sized>(
        &self,
        out: &'w mut W,
        columns: &[Column<'_>],
    ) -> io::Result<&'w mut W> {
        let mut cursors = vec![ColumnCursor::new(); columns.len()];
        let last = columns.len().saturating_sub(1);
        let mut lines = 0usize;

        while is_unconsumed(&cursors, columns) {
            for (index, (column, cursor)) in columns.iter().zip(cursors.iter_mut()).enumerate() {
                cursor.emit_line(column, out)?;
                if index < last {
                    self.switch_column(out, cursor.line_pos(), column.width())?;
                }
                cursor.break_line();
            }
            out.write_all(b"\n")?;
            lines += 1;
        }

        debug!("tabulated {} columns into {} lines", columns.len(), lines);
        Ok(out)
    }

    /// Render all columns into a `String`.
    pub fn render(&self, columns: &[Column<'_>]) -> Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, columns)?;
        Ok(String::from_utf8(buf)?)
    }

    fn switch_column<W: Write + ?Sized>(
        &self,
        out: &mut W,
        line_pos: usize,
        width: usize,
    ) -> io::Result<()> {
        let step = if self.fill == b'\t' { TAB_STEP } else { 1 };
        for _ in (line_pos..width).step_by(step) {
            out.write_all(&[self.fill])?;
        }
        out.write_all(self.separator.as_bytes())
    }
}

fn is_unconsumed(cursors: &[ColumnCursor], columns: &[Column<'_>]) -> bool {
    cursors
        .iter()
        .zip(columns)
        .any(|(cursor, column)| !cursor.at_end(column))
}

/// Write columns with an explicit separator and fill byte.
///
/// # Example
///
/// ```rust
/// use tabulator::{tabulate_with, Column};
///
/// let mut out = Vec::new();
/// tabulate_with(&mut out, "|", b'.', &[Column::new("ab", 4), Column::new("c", 1)]).unwrap();
/// assert_eq!(out, b"ab..|c\n");
/// ```
pub fn tabulate_with<'w, W: Write + ?Sized>(
    out: &'w mut W,
    separator: &str,
    fill: u8,
    columns: &[Column<'_>],
) -> io::Result<&'w mut W> {
    Tabulator::new()
        .separator(separator)
        .fill(fill)
        .write(out, columns)
}

/// Write space-filled columns with the given separator.
pub fn tabulate_with_separator<'w, W: Write + ?Sized>(
    out: &'w mut W,
    separator: &str,
    columns: &[Column<'_>],
) -> io::Result<&'w mut W> {
    tabulate_with(out, separator, b' ', columns)
}

/// Write columns separated and padded with single spaces.
///
/// # Example
///
/// ```rust
/// use tabulator::{tabulate, Column};
///
/// let mut out = Vec::new();
/// tabulate(&mut out, &[Column::new("one two", 3), Column::new("x", 1)]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "one x\ntwo \n");
/// ```
pub fn tabulate<'w, W: Write + ?Sized>(
    out: &'w mut W,
    columns: &[Column<'_>],
) -> io::Result<&'w mut W> {
    tabulate_with(out, " ", b' ', columns)
}

/// Render columns into a `String` with the given separator and fill byte.
pub fn tabulate_to_string(separator: &str, fill: u8, columns: &[Column<'_>]) -> Result<String> {
    Tabulator::new()
        .separator(separator)
        .fill(fill)
        .render(columns)
}
