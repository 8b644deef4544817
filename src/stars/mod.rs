// src/stars/mod.rs
//! Star subject pages, generated from the fun-facts Markdown.

pub mod markdown;
pub mod roster;
pub mod template;

use crate::config::consts::STAR_PAGE_PREFIX;

pub use markdown::{parse_sections, StarSection};
pub use roster::{by_num, Star, STARS};
pub use template::render_star_page;

pub fn page_file_name(num: u32) -> String {
    format!("{STAR_PAGE_PREFIX}{num}.html")
}

/// One rendered page per subject numbered `from` or higher, in roster order.
pub fn render_pages(source: &str, from: u32) -> Vec<(String, String)> {
    let sections = parse_sections(source);
    let empty = StarSection::default();

    STARS
        .iter()
        .filter(|s| s.num >= from)
        .map(|star| {
            let section = match sections.get(&star.num) {
                Some(sec) if sec.heading.starts_with(star.name) => sec,
                Some(sec) => {
                    logw!("start.md section {} is '{}', expected {}", star.num, sec.heading, star.name);
                    &empty
                }
                None => {
                    logw!("start.md has no section for {}. {}", star.num, star.name);
                    &empty
                }
            };
            (page_file_name(star.num), render_star_page(star, section))
        })
        .collect()
}
