// src/core/sanitize.rs

/// CJK Unified Ideographs block, the range the site's Chinese copy lives in.
#[inline]
pub fn is_cjk(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

pub fn has_chinese(s: &str) -> bool {
    s.chars().any(is_cjk)
}

/// First `n` chars (not bytes).
pub fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// First `n` chars, with `...` appended only when something was cut.
pub fn truncate_with_ellipsis(s: &str, n: usize) -> String {
    let head = take_chars(s, n);
    if head.len() < s.len() { join!(head, "...") } else { s!(head) }
}

/// Guess the player a trivia title is about.
///
/// Takes the first run of 2–4 CJK characters (greedy, so a leading name wins),
/// otherwise a leading `Word Word` Latin pair.
pub fn probable_player_name(title: &str) -> Option<String> {
    let mut run = String::new();
    let mut run_len = 0;
    for ch in title.chars() {
        if is_cjk(ch) {
            run.push(ch);
            run_len += 1;
            if run_len == 4 { break; }
        } else if run_len >= 2 {
            break;
        } else {
            run.clear();
            run_len = 0;
        }
    }
    if run_len >= 2 {
        return Some(run);
    }

    let first: String = title.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    let rest = &title[first.len()..];
    let after_ws = rest.trim_start();
    if first.is_empty() || after_ws.len() == rest.len() {
        return None;
    }
    let second: String = after_ws.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    if second.is_empty() { None } else { Some(join!(&first, " ", &second)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_cjk() {
        assert!(has_chinese("NBA冷知识"));
        assert!(!has_chinese("NBA fun facts — «ok»"));
    }

    #[test]
    fn leading_cjk_name() {
        assert_eq!(probable_player_name("乔丹的三分大赛").as_deref(), Some("乔丹的三"));
        assert_eq!(probable_player_name("姚明").as_deref(), Some("姚明"));
    }

    #[test]
    fn inner_cjk_run() {
        assert_eq!(probable_player_name("NBA 科比 trivia").as_deref(), Some("科比"));
    }

    #[test]
    fn latin_pair() {
        assert_eq!(probable_player_name("Michael Jordan's 63").as_deref(), Some("Michael Jordan"));
        assert_eq!(probable_player_name("Kobe"), None);
        assert_eq!(probable_player_name("123 point game"), None);
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(take_chars("乔丹乔丹", 2), "乔丹");
        assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
        assert_eq!(truncate_with_ellipsis("abc", 3), "abc");
    }
}
