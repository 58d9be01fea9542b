//! Column views over source text.

use std::ffi::CStr;

/// One logical block of text wrapped to its own width.
///
/// A `Column` borrows its text and never copies it; copying a `Column` is
/// a shallow copy of the view. Lengths and widths are counted in bytes.
///
/// # Example
///
/// ```rust
/// use tabulator::Column;
///
/// let col = Column::new("abc def ghi", 6);
/// assert_eq!(col.len(), 11);
/// assert_eq!(col.width(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column<'a> {
    text: &'a [u8],
    width: usize,
}

impl<'a> Column<'a> {
    /// Create a column from a string slice.
    pub fn new(text: &'a str, width: usize) -> Self {
        Column::from_bytes(text.as_bytes(), width)
    }

    /// Create a column from raw bytes.
    pub fn from_bytes(text: &'a [u8], width: usize) -> Self {
        Column { text, width }
    }

    /// Create a column from a nul-terminated buffer.
    ///
    /// The terminator is not part of the text.
    pub fn from_c_str(text: &'a CStr, width: usize) -> Self {
        Column::from_bytes(text.to_bytes(), width)
    }

    /// The source text.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    /// Length of the source text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the column has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Wrap width.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<'a> From<(&'a str, usize)> for Column<'a> {
    fn from((text, width): (&'a str, usize)) -> Self {
        Column::new(text, width)
    }
}

impl<'a> From<(&'a String, usize)> for Column<'a> {
    fn from((text, width): (&'a String, usize)) -> Self {
        Column::new(text, width)
    }
}

impl<'a> From<(&'a [u8], usize)> for Column<'a> {
    fn from((text, width): (&'a [u8], usize)) -> Self {
        Column::from_bytes(text, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_from_str() {
        let col = Column::new("hello", 3);
        assert_eq!(col.as_bytes(), b"hello");
        assert_eq!(col.len(), 5);
        assert_eq!(col.width(), 3);
        assert!(!col.is_empty());
    }

    #[test]
    fn column_from_c_str_excludes_terminator() {
        let raw = CStr::from_bytes_with_nul(b"ab cd\0").unwrap();
        let col = Column::from_c_str(raw, 4);
        assert_eq!(col.len(), 5);
        assert_eq!(col.as_bytes(), b"ab cd");
    }

    #[test]
    fn column_from_string_tuple() {
        let owned = String::from("owned text");
        let col: Column = (&owned, 7).into();
        assert_eq!(col.len(), owned.len());
        assert_eq!(col.width(), 7);
    }

    #[test]
    fn column_from_bytes_and_tuples() {
        let raw: &[u8] = b"\xffraw bytes";
        let col = Column::from_bytes(raw, 3);
        assert_eq!(col.len(), 10);
        assert_eq!(col.as_bytes(), raw);

        let from_bytes: Column = (raw, 3).into();
        assert_eq!(from_bytes, col);

        let from_str: Column = ("text", 2).into();
        assert_eq!(from_str, Column::new("text", 2));
        assert_eq!(from_str.as_bytes(), b"text");
    }

    #[test]
    fn column_copy_shares_text() {
        let text = "shared";
        let a = Column::new(text, 2);
        let b = a;
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_bytes(), b.as_bytes()));
    }

    #[test]
    fn empty_column() {
        let col = Column::new("", 5);
        assert!(col.is_empty());
        assert_eq!(col.len(), 0);
    }
}
