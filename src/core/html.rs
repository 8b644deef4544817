// src/core/html.rs
//! Low-level HTML string scanning.
//!
//! Nothing here builds a tree. Helpers walk the raw text looking for tag
//! boundaries so that callers can splice by offset and leave every byte
//! outside the edited span exactly as it was. Tag and attribute names match
//! ASCII-case-insensitively; offsets are byte offsets and always land on an
//! ASCII `<`, `>` or quote, so they are valid `str` boundaries.

use std::ops::Range;

use memchr::memchr_iter;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn starts_with_ci(hay: &[u8], at: usize, needle: &[u8]) -> bool {
    hay.len() >= at + needle.len() && hay[at..at + needle.len()].eq_ignore_ascii_case(needle)
}

/// ASCII case-insensitive substring search starting at `from`.
pub fn find_ci(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let h = hay.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() { return (from <= h.len()).then_some(from); }
    let first = n[0];
    (from..h.len().checked_sub(n.len())? + 1)
        .find(|&i| h[i].eq_ignore_ascii_case(&first) && h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// ASCII case-insensitive search for the last occurrence of `needle`.
pub fn rfind_ci(hay: &str, needle: &str) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets, so indices carry over to `hay`
    to_lower(hay).rfind(&to_lower(needle))
}

/// Index just past the first `>` at or after `from`.
pub fn tag_end(doc: &str, from: usize) -> Option<usize> {
    doc.get(from..)?.find('>').map(|i| from + i + 1)
}

/// Next `<tag` (followed by a non-word byte) at or after `from`.
/// Returns the span of the `<tag` lexeme itself, not the whole opening tag.
pub fn next_open_lexeme(doc: &str, tag: &str, from: usize) -> Option<Range<usize>> {
    let b = doc.as_bytes();
    let t = tag.as_bytes();
    if from > b.len() { return None; }
    for rel in memchr_iter(b'<', &b[from..]) {
        let lt = from + rel;
        let name_end = lt + 1 + t.len();
        if starts_with_ci(b, lt + 1, t) && b.get(name_end).is_none_or(|&c| !is_word_byte(c)) {
            return Some(lt..name_end);
        }
    }
    None
}

/// Next complete opening tag `<tag␠…>` at or after `from` (whitespace required
/// after the name, so this only finds tags that carry attributes).
pub fn next_open_tag(doc: &str, tag: &str, from: usize) -> Option<Range<usize>> {
    let b = doc.as_bytes();
    let mut pos = from;
    while let Some(lex) = next_open_lexeme(doc, tag, pos) {
        if b.get(lex.end).is_some_and(|c| c.is_ascii_whitespace()) {
            let end = tag_end(doc, lex.end)?;
            return Some(lex.start..end);
        }
        pos = lex.end;
    }
    None
}

/// Next closing tag `</tag>` (whitespace allowed before `>`) at or after `from`.
pub fn next_close_tag(doc: &str, tag: &str, from: usize) -> Option<Range<usize>> {
    let b = doc.as_bytes();
    let t = tag.as_bytes();
    if from > b.len() { return None; }
    for rel in memchr_iter(b'<', &b[from..]) {
        let lt = from + rel;
        if b.get(lt + 1) != Some(&b'/') || !starts_with_ci(b, lt + 2, t) { continue; }
        let mut i = lt + 2 + t.len();
        while b.get(i).is_some_and(|c| c.is_ascii_whitespace()) { i += 1; }
        if b.get(i) == Some(&b'>') {
            return Some(lt..i + 1);
        }
    }
    None
}

/// Range of the value of attribute `name` inside a single tag's text
/// (quotes excluded). Accepts `"` or `'` quoting and spaces around `=`.
pub fn attr_value_range(tag: &str, name: &str) -> Option<Range<usize>> {
    let b = tag.as_bytes();
    let n = name.as_bytes();
    let mut from = 0;
    while let Some(at) = find_ci(tag, name, from) {
        from = at + 1;
        // must be a whole attribute name
        if at == 0 || !b[at - 1].is_ascii_whitespace() { continue; }
        let mut i = at + n.len();
        while b.get(i).is_some_and(|c| c.is_ascii_whitespace()) { i += 1; }
        if b.get(i) != Some(&b'=') { continue; }
        i += 1;
        while b.get(i).is_some_and(|c| c.is_ascii_whitespace()) { i += 1; }
        let quote = match b.get(i) { Some(&q @ (b'"' | b'\'')) => q, _ => continue };
        let start = i + 1;
        let len = tag[start..].bytes().position(|c| c == quote)?;
        return Some(start..start + len);
    }
    None
}

pub fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    attr_value_range(tag, name).map(|r| &tag[r])
}

/// True when every token in `required` is one of the whitespace-separated
/// tokens of `class_value`.
pub fn has_class_tokens(class_value: &str, required: &[&str]) -> bool {
    required
        .iter()
        .all(|want| class_value.split_ascii_whitespace().any(|have| have.eq_ignore_ascii_case(want)))
}

/// Set (or insert) an attribute on one opening tag's text.
pub fn set_attr(tag: &str, name: &str, value: &str) -> String {
    let value = escape_attr(value);
    if let Some(r) = attr_value_range(tag, name) {
        return join!(&tag[..r.start], &value, &tag[r.end..]);
    }
    let close = if tag.ends_with("/>") { tag.len() - 2 } else { tag.len().saturating_sub(1) };
    let head = tag[..close].trim_end();
    join!(head, " ", name, "=\"", &value, "\"", &tag[close..])
}

/// Escape text content (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an attribute value (text escapes plus `"`).
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
