// src/translate/html.rs
//! Translate the Chinese text of one page without touching its markup.
//!
//! Only leaf text is considered: the text directly between an allowed open
//! tag and its own close tag, plus a few human-readable attributes. All of a
//! page's texts go to the translator in one call.

use std::ops::Range;

use memchr::memchr;

use crate::core::html::{attr_value, attr_value_range, next_close_tag, next_open_tag, set_attr, tag_end, to_lower};
use crate::core::sanitize::has_chinese;

use super::{align_to, Translate};

const ATTRS: [&str; 4] = ["alt", "title", "aria-label", "placeholder"];
const TEXT_TAGS: [&str; 18] = [
    "title", "h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "span", "a", "blockquote", "button", "small",
    "strong", "em", "label", "figcaption",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind { Attr, Text }

#[derive(Clone, Debug, PartialEq, Eq)]
struct Edit {
    range: Range<usize>,
    kind: Kind,
}

/// `<html lang="zh">` / `lang="zh-CN"` → `lang="en"`. Other values are left alone.
pub fn fix_lang(html: &str) -> String {
    let Some(r) = next_open_tag(html, "html", 0) else { return s!(html) };
    let tag = &html[r.clone()];
    match attr_value(tag, "lang") {
        Some(v) if v.eq_ignore_ascii_case("zh") || v.eq_ignore_ascii_case("zh-cn") => {
            join!(&html[..r.start], &set_attr(tag, "lang", "en"), &html[r.end..])
        }
        _ => s!(html),
    }
}

/// Element name right after `<`, when `lt` starts an opening tag.
fn tag_name(html: &str, lt: usize) -> Option<&str> {
    let rest = html.get(lt + 1..)?;
    if !rest.as_bytes().first()?.is_ascii_alphabetic() { return None; }
    let len = rest.bytes().take_while(|c| c.is_ascii_alphanumeric() || *c == b'-').count();
    Some(&rest[..len])
}

fn trimmed(html: &str, r: Range<usize>) -> Range<usize> {
    let text = &html[r.clone()];
    let lead = text.len() - text.trim_start().len();
    let keep = text.trim_end().len();
    if lead >= keep { r.start..r.start } else { r.start + lead..r.start + keep }
}

fn collect_edits(html: &str) -> Vec<Edit> {
    let b = html.as_bytes();
    let mut edits = Vec::new();
    let mut pos = 0;

    while let Some(rel) = memchr(b'<', &b[pos..]) {
        let lt = pos + rel;
        if html[lt..].starts_with("<!--") {
            pos = html[lt..].find("-->").map_or(b.len(), |i| lt + i + 3);
            continue;
        }
        let Some(name) = tag_name(html, lt).map(to_lower) else {
            pos = lt + 1;
            continue;
        };
        let Some(end) = tag_end(html, lt) else { break };
        let tag = &html[lt..end];

        let mut attr = |r: Range<usize>| {
            if has_chinese(&tag[r.clone()]) {
                edits.push(Edit { range: lt + r.start..lt + r.end, kind: Kind::Attr });
            }
        };
        for a in ATTRS {
            if let Some(r) = attr_value_range(tag, a) { attr(r); }
        }
        if name == "meta" && attr_value(tag, "name").is_some_and(|n| n.eq_ignore_ascii_case("description")) {
            if let Some(r) = attr_value_range(tag, "content") { attr(r); }
        }

        if name == "script" || name == "style" {
            pos = next_close_tag(html, &name, end).map_or(b.len(), |r| r.end);
            continue;
        }

        if TEXT_TAGS.contains(&name.as_str()) && !tag.ends_with("/>") {
            let text_end = memchr(b'<', &b[end..]).map_or(b.len(), |i| end + i);
            let closes_here = next_close_tag(html, &name, text_end).is_some_and(|r| r.start == text_end);
            let text = trimmed(html, end..text_end);
            if closes_here && has_chinese(&html[text.clone()]) {
                edits.push(Edit { range: text, kind: Kind::Text });
            }
        }
        pos = end;
    }

    edits.sort_by_key(|e| e.range.start);
    // an attribute-looking run inside another attribute's value
    let mut last_end = 0;
    edits.retain(|e| {
        let keep = e.range.start >= last_end;
        if keep { last_end = e.range.end; }
        keep
    });
    edits
}

fn guard(kind: Kind, text: &str) -> String {
    match kind {
        Kind::Attr => text.replace('<', "&lt;").replace('"', "&quot;"),
        Kind::Text => text.replace('<', "&lt;"),
    }
}

/// Fix the `lang` attribute and translate every eligible text.
/// Returns the new page and the number of texts translated.
pub fn translate_page(html: &str, tr: &dyn Translate) -> (String, usize) {
    let html = fix_lang(html);
    let edits = collect_edits(&html);
    if edits.is_empty() { return (html, 0); }

    let texts: Vec<String> = edits.iter().map(|e| s!(&html[e.range.clone()])).collect();
    let translated = align_to(tr.translate(&texts), &texts);

    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for (e, t) in edits.iter().zip(&translated) {
        out.push_str(&html[last..e.range.start]);
        out.push_str(&guard(e.kind, t));
        last = e.range.end;
    }
    out.push_str(&html[last..]);
    (out, texts.len())
}
