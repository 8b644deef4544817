// src/block.rs
//! Balanced block locator and splice.
//!
//! Finds one element by its class attribute, then walks forward counting
//! nested same-name tags until the matching close tag brings the depth back
//! to zero. The result bounds the element's inner content, so a caller can
//! swap that content without reparsing or reformatting the rest of the page.
//!
//! A lookup is only valid for the exact text it was computed from. Any edit
//! shifts offsets; splice immediately and compute a fresh lookup next time.

use std::borrow::Cow;
use std::ops::Range;

use crate::core::html::{attr_value, has_class_tokens, next_close_tag, next_open_lexeme, next_open_tag};

/// How a target element is recognized by its `class` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<'a> {
    /// The whole attribute value, compared ASCII-case-insensitively.
    Exact(&'a str),
    /// Every token must be present; order and extra tokens don't matter.
    Tokens(&'a [&'a str]),
}

impl Selector<'_> {
    pub fn matches(&self, class_value: &str) -> bool {
        match self {
            Selector::Exact(want) => class_value.eq_ignore_ascii_case(want),
            Selector::Tokens(req) => has_class_tokens(class_value, req),
        }
    }
}

/// `start..end` of one tag in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagSpan {
    pub start: usize,
    pub end: usize,
}

impl From<Range<usize>> for TagSpan {
    fn from(r: Range<usize>) -> Self { TagSpan { start: r.start, end: r.end } }
}

/// A fully resolved element: `open.start <= open.end <= close.start <= close.end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSpan {
    pub open: TagSpan,
    pub close: TagSpan,
}

impl BlockSpan {
    pub fn open_start(&self) -> usize { self.open.start }
    pub fn open_end(&self) -> usize { self.open.end }
    pub fn close_start(&self) -> usize { self.close.start }
    pub fn close_end(&self) -> usize { self.close.end }

    /// Inner content, between the tags.
    pub fn inner(&self) -> Range<usize> { self.open.end..self.close.start }
    /// Whole element, tags included.
    pub fn outer(&self) -> Range<usize> { self.open.start..self.close.end }
}

/// Outcome of one locate call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// No opening tag satisfies the selector.
    NotFound,
    /// Opening tag found, but close tags ran out before depth reached zero.
    /// Not safe to splice.
    Unbalanced { open: TagSpan },
    Found(BlockSpan),
}

/// Sentinel used by `Lookup::offsets` for an unresolved boundary.
pub const NOT_FOUND: isize = -1;

impl Lookup {
    pub fn span(&self) -> Option<&BlockSpan> {
        match self {
            Lookup::Found(span) => Some(span),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool { matches!(self, Lookup::Found(_)) }

    /// `(open_start, open_end, close_start, close_end)` with `-1` for anything
    /// unresolved. Handy for logging and for callers that want the flat form.
    pub fn offsets(&self) -> (isize, isize, isize, isize) {
        match *self {
            Lookup::NotFound => (NOT_FOUND, NOT_FOUND, NOT_FOUND, NOT_FOUND),
            Lookup::Unbalanced { open } => (open.start as isize, open.end as isize, NOT_FOUND, NOT_FOUND),
            Lookup::Found(s) => (
                s.open.start as isize,
                s.open.end as isize,
                s.close.start as isize,
                s.close.end as isize,
            ),
        }
    }
}

/// Locate the first `<tag …>` whose class satisfies `selector`, and its
/// balancing `</tag>`. Never panics on malformed input.
pub fn locate(doc: &str, tag: &str, selector: Selector<'_>) -> Lookup {
    let Some(open) = find_open(doc, tag, selector) else {
        return Lookup::NotFound;
    };
    match find_balanced_close(doc, tag, open.end) {
        Some(close) => Lookup::Found(BlockSpan { open, close }),
        None => Lookup::Unbalanced { open },
    }
}

fn find_open(doc: &str, tag: &str, selector: Selector<'_>) -> Option<TagSpan> {
    let mut pos = 0;
    while let Some(r) = next_open_tag(doc, tag, pos) {
        let text = &doc[r.clone()];
        if attr_value(text, "class").is_some_and(|v| selector.matches(v)) {
            return Some(r.into());
        }
        pos = r.end;
    }
    None
}

/// Scan from `from` (just past the opening tag) with depth 1.
fn find_balanced_close(doc: &str, tag: &str, from: usize) -> Option<TagSpan> {
    let mut depth = 1usize;
    let mut idx = from;
    loop {
        let close = next_close_tag(doc, tag, idx)?;
        match next_open_lexeme(doc, tag, idx) {
            Some(open) if open.start < close.start => {
                depth += 1;
                idx = open.end;
            }
            _ => {
                depth -= 1;
                idx = close.end;
                if depth == 0 {
                    return Some(close.into());
                }
            }
        }
    }
}

/// Replace the inner content of a resolved block. Any other lookup leaves
/// the document untouched.
pub fn splice<'a>(doc: &'a str, lookup: &Lookup, replacement: &str) -> Cow<'a, str> {
    let Some(span) = lookup.span() else { return Cow::Borrowed(doc) };
    match (doc.get(..span.open.end), doc.get(span.close.start..)) {
        (Some(head), Some(tail)) => Cow::Owned(join!(head, replacement, tail)),
        _ => Cow::Borrowed(doc),
    }
}

/// Replace the whole element, tags included. Same no-op rule as `splice`.
pub fn replace_outer<'a>(doc: &'a str, lookup: &Lookup, replacement: &str) -> Cow<'a, str> {
    let Some(span) = lookup.span() else { return Cow::Borrowed(doc) };
    match (doc.get(..span.open.start), doc.get(span.close.end..)) {
        (Some(head), Some(tail)) => Cow::Owned(join!(head, replacement, tail)),
        _ => Cow::Borrowed(doc),
    }
}

/// Locate and splice in one step, so the span can never go stale.
pub fn replace_inner<'a>(doc: &'a str, tag: &str, selector: Selector<'_>, replacement: &str) -> Cow<'a, str> {
    let lookup = locate(doc, tag, selector);
    splice(doc, &lookup, replacement)
}
