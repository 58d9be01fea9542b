//! # Tabulator - Side-by-Side Wrapped Text Columns
//!
//! `tabulator` writes one or more blocks of text next to each other, each
//! word-wrapped to its own width, left-aligned, padded with a fill character
//! and separated by a separator string. Output goes to any [`std::io::Write`]
//! sink, one `\n`-terminated line at a time.
//!
//! ## Core Concepts
//!
//! - [`Column`]: A borrowed view over some text plus its wrap width
//! - [`ColumnCursor`]: Per-column scan state that decides where lines break
//! - [`Tabulator`]: Separator and fill settings, writes columns into a sink
//! - [`Layout`]: Serializable widths, separator and fill, loadable from YAML/JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use tabulator::{tabulate_with_separator, Column};
//!
//! let mut out = Vec::new();
//! tabulate_with_separator(
//!     &mut out,
//!     " | ",
//!     &[Column::new("abc def ghi", 6), Column::new("123 4432 17 8989", 4)],
//! )
//! .unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().next(), Some("abc    | 123"));
//! assert_eq!(text.lines().count(), 4);
//! ```
//!
//! ## Line Breaking
//!
//! A column's line ends at an explicit newline, or at a space or tab when the
//! following word would not fit in what is left of the line. Words wider than
//! the column are hard-wrapped. The whitespace that causes a break is dropped.
//! Widths count bytes; there is no Unicode width handling.
//!
//! Columns that run out of text keep producing blank, padded cells until the
//! longest column is done, so every column yields the same number of lines.
//!
//! ## Entry Points
//!
//! | Function | Separator | Fill |
//! |----------|-----------|------|
//! | [`tabulate_with`] | given | given |
//! | [`tabulate_with_separator`] | given | `' '` |
//! | [`tabulate`] | `" "` | `' '` |
//! | [`tabulate_to_string`] | given | given |

mod column;
mod cursor;
mod error;
mod layout;
mod tabulator;

pub use column::Column;
pub use cursor::ColumnCursor;
pub use error::{Result, TabulateError};
pub use layout::Layout;
pub use tabulator::{
    tabulate, tabulate_to_string, tabulate_with, tabulate_with_separator, Tabulator,
};
