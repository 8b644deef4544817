// src/translate/phrases.rs
//! Offline localization of the site's fixed UI strings.

use super::html::fix_lang;

/// Multi-line headings, matched before the phrase table breaks them up.
const HEADINGS: [(&str, &str); 2] = [
    ("探索NBA不为人知的\n冷门知识点", "Explore NBA's lesser-known fun facts"),
    ("探索NBA不为人知的<br>冷门知识点", "Explore NBA's lesser-known fun facts"),
];

const PHRASES: &[(&str, &str)] = &[
    ("订阅我们的 newsletter，每周收到精选的NBA冷门知识点和趣闻", "Subscribe to our newsletter for weekly curated NBA fun facts and stories"),
    ("探索NBA不为人知的有趣故事，让你成为真正的篮球专家", "Explore lesser-known NBA stories and become a true hoops expert"),
    ("本网站仅供学习交流使用，与NBA官方无任何关联", "For learning and communication only; not affiliated with the NBA"),
    ("获取更多NBA冷门知识", "Get more NBA fun facts"),
    ("关于NBA冷门知识库", "About NBA Fun Facts"),
    ("深圳市龙华区130号", "Longhua District, Shenzhen"),
    ("NBA冷门知识库", "NBA Fun Facts"),
    ("输入你的邮箱地址", "Enter your email address"),
    ("加载失败，重试", "Load failed, retry"),
    ("未找到匹配结果", "No matching results found"),
    ("搜索标题...", "Search titles..."),
    ("知识点列表区", "Facts"),
    ("冷门知识点", "Fun Facts"),
    ("知识点分类", "Categories"),
    ("我们的使命", "Our Mission"),
    ("我们如何做", "How We Work"),
    ("留言...", "Message..."),
    ("冷门知识", "Fun Facts"),
    ("隐私政策", "Privacy Policy"),
    ("关于我们", "About"),
    ("快速链接", "Quick Links"),
    ("联系我们", "Contact Us"),
    ("加载更多", "Load more"),
    ("加载完成", "All loaded"),
    ("阅读更多", "Read more"),
    ("开始探索", "Start Exploring"),
    ("立即订阅", "Subscribe Now"),
    ("你的名字", "Your name"),
    ("你的邮箱", "Your email"),
    ("球员故事", "Player Stories"),
    ("球员轶事", "Player Anecdotes"),
    ("趣味故事", "Fun Stories"),
    ("场外趣闻", "Off-court Trivia"),
    ("球员才华", "Player Talents"),
    ("球员往事", "Player Past"),
    ("我们是谁", "Who We Are"),
    ("小贴士", "Tip"),
    ("英雄区", "Hero"),
    ("首页", "Home"),
    ("搜索", "Search"),
    ("发送", "Send"),
];

/// Apply the `lang` fix and the phrase table. Longer phrases come first in
/// the table so a short phrase never splits a longer one.
pub fn localize(html: &str) -> String {
    let mut out = fix_lang(html);
    for (zh, en) in HEADINGS.iter().chain(PHRASES) {
        if out.contains(zh) {
            out = out.replace(zh, en);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_longest_first() {
        let lens: Vec<usize> = PHRASES.iter().map(|(zh, _)| zh.chars().count()).collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]), "{lens:?}");
    }

    #[test]
    fn longer_phrases_win() {
        let html = r#"<html lang="zh-CN"><h1>关于NBA冷门知识库</h1><a alt="首页">首页</a><h2>探索NBA不为人知的<br>冷门知识点</h2></html>"#;
        assert_eq!(
            localize(html),
            r#"<html lang="en"><h1>About NBA Fun Facts</h1><a alt="Home">Home</a><h2>Explore NBA's lesser-known fun facts</h2></html>"#
        );
    }

    #[test]
    fn unknown_text_is_kept() {
        let html = "<p>乔丹很强</p>";
        assert_eq!(localize(html), html);
    }
}
