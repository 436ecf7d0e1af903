use std::fmt;

use crate::logging::Loggable;
use crate::util;

/// A position within some borrowed input text.
///
/// Cursors are cheap to copy. Moving a cursor never changes the text it points
/// into, so any two cursors built from the same input can be turned into a
/// [`Selection`] of the text between them. Selections are only made inside the
/// crate, where both ends are known to come from one input:
///
/// ```compile_fail
/// use pegchain::Cursor;
///
/// let (a, b) = (Cursor::from("abc"), Cursor::from("xyz"));
/// let _ = a.select_to(&b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    pub(crate) text: &'a str,
    pub(crate) pos: usize,
}

/// A matched span `[start, end)` of the input text, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> From<&'a str> for Cursor<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        let cur = Self { text: s, pos: 0 };
        cur.log_inputs("Cursor::from", "");
        cur
    }
}

impl<'a> From<Cursor<'a>> for &'a str {
    fn from(c: Cursor<'a>) -> Self {
        c.str()
    }
}

impl<'a> Cursor<'a> {
    /// the text not yet consumed
    #[inline]
    pub fn str(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// byte offset from the start of the text the cursor was built from
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    pub fn first(&self) -> Option<char> {
        self.str().chars().next()
    }

    /// Moves forward by `bytes`. The caller guarantees a char boundary.
    #[inline]
    pub(crate) fn advance(self, bytes: usize) -> Self {
        debug_assert!(self.text.is_char_boundary(self.pos + bytes));
        Self {
            text: self.text,
            pos: self.pos + bytes,
        }
    }

    /// The text between this cursor and a later one over the same input.
    #[inline]
    pub(crate) fn select_to(&self, end: &Cursor<'a>) -> Selection<'a> {
        debug_assert!(std::ptr::eq(self.text, end.text) && self.pos <= end.pos);
        Selection {
            text: self.text,
            start: self.pos,
            end: end.pos,
        }
    }

    /// An empty selection at the cursor.
    #[inline]
    pub fn empty_selection(&self) -> Selection<'a> {
        self.select_to(self)
    }
}

impl<'a> Selection<'a> {
    #[inline]
    pub fn str(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_adjacent_to(&self, next: &Selection<'a>) -> bool {
        self.end == next.start
    }

    /// Covers from the start of `self` to the end of `next`. For adjacent
    /// selections this is their concatenation.
    pub(crate) fn join(self, next: Selection<'a>) -> Self {
        Self {
            text: self.text,
            start: self.start,
            end: next.end.max(self.end),
        }
    }

    /// cursor positioned just after the selection
    pub fn end_cursor(&self) -> Cursor<'a> {
        Cursor {
            text: self.text,
            pos: self.end,
        }
    }
}

impl<'a> fmt::Display for Cursor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cursor({}@{})", util::formatter_str(self.str()).trim_end(), self.pos)
    }
}

impl<'a> fmt::Display for Selection<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Selection({}..{} {})",
            self.start,
            self.end,
            util::formatter_str(self.str()).trim_end()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_cursor() {
        let s = "Hello World!";
        let c1 = Cursor::from(s);
        let c2: Cursor = s.into();
        assert_eq!(c1, c2);
        assert_eq!(c1.str(), s);

        let s2: &str = c2.into();
        assert_eq!(s2, s);

        let c3 = c1.advance(6);
        assert_eq!(c3.str(), "World!");
        assert_eq!(c3.first(), Some('W'));
        assert_eq!(c3.position(), 6);
        assert!(!c3.is_empty());
        assert!(c3.advance(6).is_empty());
        assert_eq!(c3.advance(6).first(), None);
    }

    #[test]
    fn test_selection() {
        let c = Cursor::from("Hello World!");
        let hello = c.select_to(&c.advance(5));
        assert_eq!(hello.str(), "Hello");
        assert_eq!(hello.len(), 5);
        assert_eq!(hello.end_cursor().str(), " World!");

        let rest = hello.end_cursor().select_to(&c.advance(12));
        assert!(hello.is_adjacent_to(&rest));
        assert_eq!(hello.join(rest).str(), "Hello World!");

        let empty = c.advance(3).empty_selection();
        assert!(empty.is_empty());
        assert_eq!(empty.str(), "");
        assert_eq!(empty.start(), 3);
    }

    #[test]
    fn test_multibyte() {
        let c = Cursor::from("é!");
        let ch = c.first().unwrap();
        let c2 = c.advance(ch.len_utf8());
        assert_eq!(c2.str(), "!");
        assert_eq!(c.select_to(&c2).str(), "é");
    }
}
