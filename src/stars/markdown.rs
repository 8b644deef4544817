// src/stars/markdown.rs
//! Pull the per-subject sections out of the fun-facts Markdown.
//!
//! Expected shape, per subject:
//!
//! ```text
//! ## 4. Magic Johnson
//! **Fun Fact: …**
//!
//! One or more paragraphs.
//!
//! **More Details:**
//! - bullet
//! - bullet
//! ```

use std::collections::BTreeMap;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StarSection {
    /// Heading text after `N.`, e.g. "Magic Johnson".
    pub heading: String,
    /// Fun-fact paragraphs, blank-line separated.
    pub fun_fact: String,
    pub details: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Part { Preamble, FunFact, Details, Done }

/// `"4. Magic Johnson"` → `(4, "Magic Johnson")`.
fn numbered_heading(text: &str) -> Option<(u32, &str)> {
    let (num, rest) = text.trim().split_once('.')?;
    Some((num.trim().parse().ok()?, rest.trim()))
}

/// Sections keyed by their heading number. Level-2 headings without a
/// number (such as "Summary") close the current section.
pub fn parse_sections(source: &str) -> BTreeMap<u32, StarSection> {
    let mut out: BTreeMap<u32, StarSection> = BTreeMap::new();
    let mut current: Option<u32> = None;
    let mut part = Part::Preamble;

    let mut text = String::new();
    let mut in_heading = false;
    let mut item_depth = 0usize;
    let mut list_depth = 0usize;

    for event in Parser::new_ext(source, Options::empty()) {
        match event {
            Event::Start(Tag::Heading { level: HeadingLevel::H2, .. }) => {
                in_heading = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                in_heading = false;
                current = numbered_heading(&text).map(|(num, name)| {
                    out.insert(num, StarSection { heading: s!(name), ..Default::default() });
                    num
                });
                part = Part::Preamble;
            }
            Event::Start(Tag::Paragraph) if item_depth == 0 => text.clear(),
            Event::End(TagEnd::Paragraph) if item_depth == 0 => {
                let Some(section) = current.and_then(|n| out.get_mut(&n)) else { continue };
                let para = text.trim();
                if para.starts_with("Fun Fact") {
                    part = Part::FunFact;
                } else if para.starts_with("More Details") {
                    part = Part::Details;
                } else if part == Part::FunFact && !para.is_empty() {
                    if !section.fun_fact.is_empty() { section.fun_fact.push_str("\n\n"); }
                    section.fun_fact.push_str(para);
                }
            }
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 && part == Part::Details { part = Part::Done; }
            }
            Event::Start(Tag::Item) => {
                item_depth += 1;
                if item_depth == 1 { text.clear(); }
            }
            Event::End(TagEnd::Item) => {
                item_depth = item_depth.saturating_sub(1);
                if item_depth == 0 && part == Part::Details {
                    if let Some(section) = current.and_then(|n| out.get_mut(&n)) {
                        let item = text.trim();
                        if !item.is_empty() { section.details.push(s!(item)); }
                    }
                }
            }
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => {
                text.push(if in_heading || item_depth > 0 { ' ' } else { '\n' });
            }
            _ => {}
        }
    }
    out
}
