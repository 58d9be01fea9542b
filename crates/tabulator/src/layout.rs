//! Serializable column layouts.
//!
//! A [`Layout`] captures everything about a tabulation except the text: the
//! width of each column, the separator and the fill character. Layouts can be
//! built in code or loaded from YAML or JSON, then applied to any number of
//! texts.
//!
//! ```rust
//! use tabulator::Layout;
//!
//! let layout = Layout::from_yaml(r#"
//! separator: " | "
//! fill: "."
//! widths: [6, 1]
//! "#).unwrap();
//!
//! let out = layout.render(&["abc def", "1 2"]).unwrap();
//! assert_eq!(out, "abc... | 1\ndef... | 2\n");
//! ```

use std::io::Write;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::{Result, TabulateError};
use crate::tabulator::Tabulator;

/// Column widths plus separator and fill.
///
/// Missing fields take their defaults when deserializing: a single space for
/// both separator and fill, and no columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Separator between adjacent columns.
    pub separator: String,
    /// Character used to pad each column to its width. Must be ASCII.
    pub fill: char,
    /// Width of each column, in order.
    pub widths: Vec<usize>,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            separator: " ".to_string(),
            fill: ' ',
            widths: Vec::new(),
        }
    }
}

impl Layout {
    /// Create a layout with the given column widths and default decorations.
    pub fn new(widths: impl IntoIterator<Item = usize>) -> Self {
        Layout {
            widths: widths.into_iter().collect(),
            ..Layout::default()
        }
    }

    /// Parse a layout from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let layout: Layout = serde_yaml::from_str(yaml)?;
        trace!("loaded layout with {} columns from YAML", layout.num_columns());
        Ok(layout)
    }

    /// Parse a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: Layout = serde_json::from_str(json)?;
        trace!("loaded layout with {} columns from JSON", layout.num_columns());
        Ok(layout)
    }

    /// Add a column of the given width.
    pub fn column(mut self, width: usize) -> Self {
        self.widths.push(width);
        self
    }

    /// Set the column separator.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.separator = sep.into();
        self
    }

    /// Set the fill character.
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Get the number of columns.
    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    /// Build the [`Tabulator`] for this layout.
    ///
    /// Fails if the fill character is not ASCII.
    pub fn tabulator(&self) -> Result<Tabulator> {
        if !self.fill.is_ascii() {
            return Err(TabulateError::InvalidFill(self.fill));
        }
        Ok(Tabulator::new()
            .separator(self.separator.clone())
            .fill(self.fill as u8))
    }

    /// Pair each text with its configured width.
    pub fn columns<'a>(&self, texts: &[&'a str]) -> Result<Vec<Column<'a>>> {
        if texts.len() != self.num_columns() {
            return Err(TabulateError::ColumnCountMismatch {
                expected: self.num_columns(),
                actual: texts.len(),
            });
        }
        Ok(texts
            .iter()
            .zip(&self.widths)
            .map(|(&text, &width)| Column::new(text, width))
            .collect())
    }

    /// Write `texts` into `out` using this layout.
    pub fn write<'w, W: Write + ?Sized>(
        &self,
        out: &'w mut W,
        texts: &[&str],
    ) -> Result<&'w mut W> {
        let columns = self.columns(texts)?;
        Ok(self.tabulator()?.write(out, &columns)?)
    }

    /// Render `texts` into a `String` using this layout.
    pub fn render(&self, texts: &[&str]) -> Result<String> {
        let columns = self.columns(texts)?;
        self.tabulator()?.render(&columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults() {
        let layout = Layout::default();
        assert_eq!(layout.separator, " ");
        assert_eq!(layout.fill, ' ');
        assert_eq!(layout.num_columns(), 0);
    }

    #[test]
    fn layout_fluent_api() {
        let layout = Layout::new([6]).column(4).separator(" | ").fill('-');
        assert_eq!(layout.widths, vec![6, 4]);
        assert_eq!(layout.separator, " | ");
        assert_eq!(layout.fill, '-');
    }

    #[test]
    fn layout_from_yaml_fills_defaults() {
        let layout = Layout::from_yaml("widths: [3, 5]").unwrap();
        assert_eq!(layout, Layout::new([3, 5]));
    }

    #[test]
    fn layout_from_json() {
        let json = r#"{"separator": "|", "fill": "\t", "widths": [10]}"#;
        let layout = Layout::from_json(json).unwrap();
        assert_eq!(layout.separator, "|");
        assert_eq!(layout.fill, '\t');
        assert_eq!(layout.widths, vec![10]);
    }

    #[test]
    fn layout_serde_roundtrip() {
        let layout = Layout::new([4, 8]).separator(" : ");
        let yaml = serde_yaml::to_string(&layout).unwrap();
        assert_eq!(Layout::from_yaml(&yaml).unwrap(), layout);
    }

    #[test]
    fn layout_bad_yaml() {
        let err = Layout::from_yaml("widths: three").unwrap_err();
        assert!(matches!(err, TabulateError::Config(_)));
    }

    #[test]
    fn layout_rejects_non_ascii_fill() {
        let err = Layout::new([3]).fill('·').tabulator().unwrap_err();
        assert!(matches!(err, TabulateError::InvalidFill('·')));
    }

    #[test]
    fn layout_count_mismatch() {
        let err = Layout::new([3, 4]).render(&["only one"]).unwrap_err();
        assert!(matches!(
            err,
            TabulateError::ColumnCountMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn layout_write_into_sink() {
        let mut out = Vec::new();
        Layout::new([2, 2])
            .separator("|")
            .write(&mut out, &["ab", "cd"])
            .unwrap();
        assert_eq!(out, b"ab|cd\n");
    }
}
