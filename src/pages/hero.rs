// src/pages/hero.rs
use url::Url;

use crate::config::consts::{AVATAR_BASE, HERO_IMG_TOKENS};
use crate::core::html::{attr_value, has_class_tokens, next_open_tag, set_attr};
use crate::core::sanitize::probable_player_name;

/// Generated avatar for `name` in the site's purple and white.
pub fn avatar_url(name: &str) -> Option<String> {
    let url = Url::parse_with_params(
        AVATAR_BASE,
        &[("name", name), ("background", "552583"), ("color", "ffffff"), ("size", "512")],
    )
    .ok()?;
    Some(url.into())
}

/// Point the first full-bleed hero `<img>` at an avatar of the player the
/// title is about. Titles without a recognisable name are left alone.
pub fn update_hero(html: &str, title: &str) -> String {
    let Some(src) = probable_player_name(title).and_then(|n| avatar_url(&n)) else {
        return s!(html);
    };

    let mut pos = 0;
    while let Some(r) = next_open_tag(html, "img", pos) {
        let tag = &html[r.clone()];
        if attr_value(tag, "class").is_some_and(|c| has_class_tokens(c, HERO_IMG_TOKENS)) {
            return join!(&html[..r.start], &set_attr(tag, "src", &src), &html[r.end..]);
        }
        pos = r.end;
    }
    s!(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_encodes_name() {
        let url = avatar_url("乔丹").unwrap();
        assert!(url.starts_with("https://ui-avatars.com/api/?name=%E4%B9%94%E4%B8%B9&"));
        assert!(url.ends_with("background=552583&color=ffffff&size=512"));
    }

    #[test]
    fn replaces_src_of_first_hero_image() {
        let html = r#"<img class="logo" src="l.png"><img src="old.jpg" class="w-full h-full object-cover" alt="x"><img class="w-full h-full object-cover" src="2nd.jpg">"#;
        let out = update_hero(html, "科比的最后一战");
        assert!(out.starts_with(r#"<img class="logo" src="l.png"><img src="https://ui-avatars.com/api/?name="#));
        assert!(out.contains("&amp;size=512\" class=\"w-full h-full object-cover\" alt=\"x\">"));
        assert!(out.ends_with(r#"src="2nd.jpg">"#));
    }

    #[test]
    fn inserts_missing_src() {
        let html = r#"<div><img alt="h" class="object-cover w-full h-full"></div>"#;
        let out = update_hero(html, "Magic Johnson rookie");
        assert!(out.contains(r#"<img alt="h" class="object-cover w-full h-full" src="https://ui-avatars.com/api/?name=Magic+Johnson&amp;"#));
    }

    #[test]
    fn no_name_no_change() {
        let html = r#"<img class="w-full h-full object-cover" src="a.jpg">"#;
        assert_eq!(update_hero(html, "1997"), html);
    }
}
