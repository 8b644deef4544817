// src/pages/related.rs
//! "Related facts" cards: the next three ids, wrapping past the last one.

use crate::block::{locate, splice, Selector};
use crate::config::consts::{CARD_SUMMARY_CHARS, PICSUM_BASE, RELATED_COUNT, RELATED_GRID_TOKENS};
use crate::core::html::{escape_attr, escape_text};
use crate::core::sanitize::take_chars;
use crate::store::{ContentStore, Record};

/// Ids `id+1 ..= id+3`; anything above `max_id` wraps to `((n - 1) mod max_id) + 1`.
/// Ids past `i64::MAX` are dropped.
pub fn related_ids(id: i64, max_id: i64) -> Vec<i64> {
    (1..=RELATED_COUNT)
        .filter_map(|k| id.checked_add(k))
        .map(|n| if n > max_id && max_id > 0 { (n - 1).rem_euclid(max_id) + 1 } else { n })
        .collect()
}

pub fn card_html(record: &Record, seed: i64) -> String {
    let title = escape_text(record.title());
    let summary = escape_text(&join!(take_chars(record.detail().unwrap_or(""), CARD_SUMMARY_CHARS), "..."));
    let href = escape_attr(record.local_link().unwrap_or("#"));
    let alt = escape_attr(record.title());
    lines!(
        &format!("                <a href=\"{href}\" class=\"block\">"),
        "                    <div class=\"bg-white rounded-lg shadow-md overflow-hidden card-hover\">",
        &format!("                        <img src=\"{PICSUM_BASE}/{seed}/600/300\" alt=\"{alt}\" class=\"w-full h-48 object-cover\">"),
        "                        <div class=\"p-4\">",
        &format!("                            <h4 class=\"font-bold text-lg mb-2\">{title}</h4>"),
        &format!("                            <p class=\"text-gray-600 text-sm\">{summary}</p>"),
        "                        </div>",
        "                    </div>",
        "                </a>",
    )
}

/// Rebuild the related grid for `record`. Records without an integer id,
/// pages without the grid, and empty neighbourhoods are left unchanged.
pub fn update_related(html: &str, record: &Record, store: &ContentStore) -> String {
    let Some(id) = record.int_id() else { return s!(html) };
    let max_id = store.max_id().unwrap_or(id);

    let related: Vec<&Record> = related_ids(id, max_id)
        .into_iter()
        .filter_map(|rid| store.by_id(rid))
        .collect();
    if related.is_empty() { return s!(html); }

    let lookup = locate(html, "div", Selector::Tokens(RELATED_GRID_TOKENS));
    if !lookup.is_found() {
        logd!("related: grid not usable {:?}", lookup.offsets());
        return s!(html);
    }

    let mut cards = s!("\n");
    for (idx, r) in related.iter().enumerate() {
        let seed = r.id().unwrap_or(idx as i64 + 1).rem_euclid(1000);
        cards.push_str(&card_html(r, seed));
    }
    cards.push_str("            ");
    splice(html, &lookup, &cards).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn store(n: i64) -> ContentStore {
        let items: Vec<String> = (1..=n)
            .map(|i| format!(r#"{{"id":{i},"title":"T{i}","detail":"detail text number {i} that is long enough","localLink":"nba_{i}.html"}}"#))
            .collect();
        ContentStore::parse(&format!("[{}]", items.join(",")), Path::new("nba.json")).unwrap()
    }

    #[test]
    fn wraps_past_max() {
        assert_eq!(related_ids(1, 10), vec![2, 3, 4]);
        assert_eq!(related_ids(9, 10), vec![10, 1, 2]);
        assert_eq!(related_ids(10, 10), vec![1, 2, 3]);
        assert_eq!(related_ids(2, 2), vec![1, 2, 1]);
    }

    #[test]
    fn card_summary_is_19_chars_plus_ellipsis() {
        let s = store(3);
        let card = card_html(s.by_id(2).unwrap(), 2);
        assert!(card.contains(">detail text number ...</p>"));
        assert!(card.contains("href=\"nba_2.html\""));
        assert!(card.contains("https://picsum.photos/id/2/600/300"));
    }

    #[test]
    fn grid_gets_three_cards() {
        let s = store(5);
        let html = r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"><a>old</a></div><p>tail</p>"#;
        let out = update_related(html, s.by_id(5).unwrap(), &s);
        assert_eq!(out.matches("card-hover").count(), 3);
        let order: Vec<_> = ["nba_1.html", "nba_2.html", "nba_3.html"].iter().map(|l| out.find(*l).unwrap()).collect();
        assert!(order[0] < order[1] && order[1] < order[2]);
        assert!(out.ends_with("            </div><p>tail</p>"));
        assert!(!out.contains("<a>old</a>"));
    }

    #[test]
    fn missing_grid_or_id_is_noop() {
        let s = store(3);
        let html = "<div class=\"grid gap-6\"></div>";
        assert_eq!(update_related(html, s.by_id(1).unwrap(), &s), html);
        assert_eq!(update_related(html, &Record::new(), &s), html);
    }

    #[test]
    fn id_at_i64_max_does_not_overflow() {
        assert_eq!(related_ids(i64::MAX, i64::MAX), Vec::<i64>::new());
        assert_eq!(related_ids(i64::MAX - 1, i64::MAX), vec![i64::MAX]);

        let s = ContentStore::parse(
            r#"[{"id":9223372036854775807,"title":"Big","detail":"d","localLink":"nba_9.html"}]"#,
            Path::new("nba.json"),
        )
        .unwrap();
        let html = r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"><a>old</a></div>"#;
        assert_eq!(update_related(html, &s.records[0], &s), html);
    }

    #[test]
    fn string_id_gets_no_cards() {
        let s = store(3);
        let page = ContentStore::parse(r#"[{"id":"1","title":"S","detail":"d"}]"#, Path::new("nba.json")).unwrap();
        let html = r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"><a>old</a></div>"#;
        assert_eq!(update_related(html, &page.records[0], &s), html);
    }
}
