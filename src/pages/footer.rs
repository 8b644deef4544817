// src/pages/footer.rs
use crate::block::{locate, replace_outer, Selector};
use crate::config::consts::FOOTER_TOKENS;

fn footer_lookup(html: &str) -> crate::block::Lookup {
    locate(html, "footer", Selector::Tokens(FOOTER_TOKENS))
}

/// The site footer, tags included, as it appears in `index_html`.
pub fn extract_footer(index_html: &str) -> Option<String> {
    let span = *footer_lookup(index_html).span()?;
    index_html.get(span.outer()).map(String::from)
}

/// Replace the page's own site footer with `footer`.
pub fn replace_footer(html: &str, footer: &str) -> String {
    replace_outer(html, &footer_lookup(html), footer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_index_footer_into_page() {
        let index = r#"<main></main><footer class="bg-nba-dark text-white pt-16"><p>new</p></footer>"#;
        let page = r#"<body><footer class="text-white bg-nba-dark"><p>old</p></footer></body>"#;
        let footer = extract_footer(index).unwrap();
        assert!(footer.starts_with("<footer class=\"bg-nba-dark"));
        assert_eq!(
            replace_footer(page, &footer),
            r#"<body><footer class="bg-nba-dark text-white pt-16"><p>new</p></footer></body>"#
        );
    }

    #[test]
    fn page_without_site_footer_is_unchanged() {
        let page = "<body><footer>plain</footer></body>";
        assert_eq!(replace_footer(page, "<footer>x</footer>"), page);
        assert_eq!(extract_footer(page), None);
    }
}
