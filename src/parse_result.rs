use std::fmt;

use crate::cursor::{Cursor, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

/// The outcome of applying a grammar node to some input.
///
/// On success the matched text is a prefix of the input given to that node and
/// the remainder is the text immediately after it. On failure the match is
/// whatever the failing rule reported (often empty) and the remainder is the
/// input that was active where matching stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<'a, V> {
    selection: Selection<'a>,
    remainder: Cursor<'a>,
    status: Status,
    attributes: Vec<V>,
}

impl<'a, V> ParseResult<'a, V> {
    pub(crate) fn success(selection: Selection<'a>, remainder: Cursor<'a>) -> Self {
        Self {
            selection,
            remainder,
            status: Status::Success,
            attributes: Vec::new(),
        }
    }

    pub(crate) fn failure(selection: Selection<'a>, remainder: Cursor<'a>) -> Self {
        Self {
            selection,
            remainder,
            status: Status::Failure,
            attributes: Vec::new(),
        }
    }

    /// Succeeds having consumed nothing.
    pub(crate) fn vacuous(input: Cursor<'a>) -> Self {
        Self::success(input.empty_selection(), input)
    }

    /// Matched text. Named `matched` as `match` is a keyword.
    #[inline]
    pub fn matched(&self) -> &'a str {
        self.selection.str()
    }

    #[inline]
    pub fn remainder(&self) -> &'a str {
        self.remainder.str()
    }

    #[inline]
    pub fn succeeded(&self) -> bool {
        self.status == Status::Success
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn attributes(&self) -> &[V] {
        &self.attributes
    }

    pub fn into_attributes(self) -> Vec<V> {
        self.attributes
    }

    #[inline]
    pub fn selection(&self) -> Selection<'a> {
        self.selection
    }

    /// The remainder as a cursor, keeping its offset into the original input.
    #[inline]
    pub fn remainder_cursor(&self) -> Cursor<'a> {
        self.remainder
    }

    pub(crate) fn take_attributes(&mut self) -> Vec<V> {
        std::mem::take(&mut self.attributes)
    }

    pub(crate) fn set_attributes(&mut self, attributes: Vec<V>) {
        self.attributes = attributes;
    }

    /// Appends `next` (parsed from this result's remainder) to this result.
    ///
    /// Only meaningful when `self` succeeded. The match runs from the start of
    /// this match to the end of `next`'s, the remainder and status are `next`'s,
    /// and the attribute lists are concatenated left to right.
    pub fn combine(mut self, mut next: ParseResult<'a, V>) -> Self {
        debug_assert!(self.succeeded(), "combine on a failed result");
        self.attributes.append(&mut next.attributes);
        Self {
            selection: self.selection.join(next.selection),
            remainder: next.remainder,
            status: next.status,
            attributes: self.attributes,
        }
    }
}

impl<'a, V> fmt::Display for ParseResult<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{status:?} match={m:?} remainder={r:?} attrs={n}",
            status = self.status,
            m = self.matched(),
            r = self.remainder(),
            n = self.attributes.len()
        )
    }
}
