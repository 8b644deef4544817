// src/pages/mod.rs
//! Rewrite a detail page from its store record.
//!
//! Every step takes the page text and returns the new text. A step whose
//! target is missing or unbalanced returns its input unchanged, so a page
//! from an older template still gets every step that can apply.

pub mod content;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod related;

use crate::config::options::ApplyOptions;
use crate::store::{ContentStore, Record};

pub use nav::{NavLabels, EN_LABELS, ZH_LABELS};

/// Site-wide inputs shared by every page in one run.
pub struct Site<'a> {
    pub store: &'a ContentStore,
    /// Footer taken from index.html, if it has one.
    pub footer: Option<&'a str>,
    pub options: &'a ApplyOptions,
    pub labels: NavLabels,
}

impl<'a> Site<'a> {
    pub fn new(store: &'a ContentStore, footer: Option<&'a str>, options: &'a ApplyOptions) -> Self {
        Self { store, footer, options, labels: ZH_LABELS }
    }

    fn is_plain(&self, link: &str) -> bool {
        self.options.plain_pages.iter().any(|p| p == link)
    }

    fn keeps_nav(&self, link: &str) -> bool {
        self.options.nav_keep_pages.iter().any(|p| p == link)
    }
}

/// Run the whole pipeline for one page. `link` is the page's file name as
/// stored in the record's `localLink`.
pub fn apply_details(html: &str, link: &str, record: &Record, site: &Site<'_>) -> String {
    let title = record.title();
    let detail = record.detail().unwrap_or("");

    let mut page = content::update_content(html, title, detail, site.is_plain(link));
    page = hero::update_hero(&page, title);
    page = related::update_related(&page, record, site.store);
    page = nav::ensure_nav_links(&page, &site.labels);
    if let Some(f) = site.footer {
        page = footer::replace_footer(&page, f);
    }
    page = nav::make_horizontal(&page);
    page = nav::inject_mobile_menu(&page);
    page = nav::inject_mobile_script(&page);
    if !site.keeps_nav(link) {
        page = nav::rebuild_nav(&page, &site.labels);
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const PAGE: &str = r#"<html><body>
<nav class="bg-nba-purple"><div class="container"><div class="flex"><h1>x</h1></div><div><a href="index.html">首页</a></div></div></nav>
<img class="w-full h-full object-cover" src="old.jpg">
<div class="p-6 md:p-8"><p>old</p></div>
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"></div>
<footer class="bg-nba-dark"><p>old footer</p></footer>
</body></html>"#;

    fn store() -> ContentStore {
        ContentStore::parse(
            r#"[{"id":1,"title":"姚明的第一场","detail":"姚明首秀。两分。","localLink":"nba_2.html"},
                {"id":2,"title":"B","detail":"bee","localLink":"nba_3.html"}]"#,
            Path::new("nba.json"),
        )
        .unwrap()
    }

    #[test]
    fn full_pipeline_touches_every_region() {
        let store = store();
        let opts = ApplyOptions::default();
        let site = Site::new(&store, Some("<footer class=\"bg-nba-dark\">NEW</footer>"), &opts);
        let out = apply_details(PAGE, "nba_2.html", &store.records[0], &site);

        assert!(out.contains("first-letter:float-left\">姚明首秀。</p>"));
        assert!(out.contains("https://ui-avatars.com/api/?name="));
        assert!(out.contains("href=\"nba_3.html\""));
        assert!(out.contains("<footer class=\"bg-nba-dark\">NEW</footer>"));
        assert!(out.contains("NBA冷门知识库"));
        assert_eq!(out.matches("id=\"mobile-menu\"").count(), 1);
        assert_eq!(out.matches("id=\"mobile-menu-toggle\"").count(), 1);
        assert_eq!(out.matches("function toggleMobileMenu").count(), 1);
        assert!(!out.contains("old footer"));
    }

    #[test]
    fn plain_and_kept_pages() {
        let store = store();
        let opts = ApplyOptions {
            plain_pages: vec![s!("nba_2.html")],
            nav_keep_pages: vec![s!("nba_2.html")],
        };
        let site = Site::new(&store, None, &opts);
        let out = apply_details(PAGE, "nba_2.html", &store.records[0], &site);
        assert!(!out.contains("first-letter"));
        assert!(!out.contains("NBA冷门知识库"));
        // hand-made nav kept, but made responsive
        assert!(out.contains("<h1>x</h1>"));
        assert!(out.contains("class=\"hidden md:flex items-center space-x-6\""));
        assert!(out.contains("old footer"));
    }

    #[test]
    fn second_run_does_not_stack_fragments() {
        let store = store();
        let opts = ApplyOptions::default();
        let site = Site::new(&store, None, &opts);
        let once = apply_details(PAGE, "nba_2.html", &store.records[0], &site);
        let twice = apply_details(&once, "nba_2.html", &store.records[0], &site);
        assert_eq!(once, twice);
    }
}
