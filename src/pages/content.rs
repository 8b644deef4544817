// src/pages/content.rs
//! The detail body inside the `p-6 md:p-8` content container.

use crate::block::{locate, splice, Selector};
use crate::config::consts::{CONTENT_CLASS, QUOTE_CHARS};
use crate::core::html::escape_text;
use crate::core::sanitize::{probable_player_name, truncate_with_ellipsis};

const FULL_STOP: char = '。';
const TOPIC_BADGE: &str = "冷知识";
const FIRST_PARA_CLASS: &str = "text-lg leading-relaxed whitespace-pre-line first-letter:text-5xl first-letter:font-bold first-letter:text-nba-purple first-letter:mr-2 first-letter:float-left";
const PARA_CLASS: &str = "text-lg leading-relaxed whitespace-pre-line";

/// Non-empty parts split on `。`, each ending in `。`. The raw text comes
/// back as one paragraph only when every part is empty.
fn sentences(detail: &str) -> Vec<String> {
    let parts: Vec<String> = detail
        .split(FULL_STOP)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("{p}{FULL_STOP}"))
        .collect();
    if parts.is_empty() { vec![s!(detail)] } else { parts }
}

/// Badges, divider, one paragraph per sentence, tip box and a pull quote.
pub fn enhanced_inner(title: &str, detail: &str) -> String {
    let parts = sentences(detail);

    let mut paras = String::new();
    for (i, p) in parts.iter().enumerate() {
        let class = if i == 0 { FIRST_PARA_CLASS } else { PARA_CLASS };
        paras.push_str(&format!("                    <p class=\"{class}\">{}</p>\n", escape_text(p)));
    }

    let quote = escape_text(&truncate_with_ellipsis(parts[0].trim(), QUOTE_CHARS));
    let name = probable_player_name(title).unwrap_or_else(|| s!(TOPIC_BADGE));

    let header = lines!(
        "                <!-- 信息徽章与阅读提示 -->",
        "                <div class=\"flex flex-wrap items-center gap-2 mb-6 text-sm\">",
        &format!("                    <span class=\"px-3 py-1 rounded-full bg-nba-purple/10 text-nba-purple\">{}</span>", escape_text(&name)),
        &format!("                    <span class=\"px-3 py-1 rounded-full bg-nba-gold/10 text-nba-gold\">{TOPIC_BADGE}</span>"),
        "                    <span class=\"ml-auto text-gray-500 flex items-center\"><i class=\"fa fa-clock-o mr-1\"></i> 3 min read</span>",
        "                </div>",
        "",
        "                <!-- 渐变分隔线 -->",
        "                <div class=\"relative mb-6\">",
        "                    <div class=\"h-1 w-24 bg-gradient-to-r from-nba-purple to-nba-gold rounded\"></div>",
        "                </div>",
        "",
        "                <!-- 正文（首字下沉、美化排版） -->",
        "                <div class=\"prose lg:prose-xl max-w-none text-gray-800\">",
    );
    let footer = lines!(
        "                </div>",
        "",
        "                <!-- 侧栏引述与提示 -->",
        "                <div class=\"mt-8 grid md:grid-cols-5 gap-6 items-start\">",
        "                    <div class=\"md:col-span-3\">",
        "                        <div class=\"bg-nba-light/60 border border-gray-100 rounded-lg p-4\">",
        "                            <div class=\"flex items-center text-nba-purple font-medium mb-2\"><i class=\"fa fa-lightbulb-o mr-2\"></i>小贴士</div>",
        "                            <p class=\"text-gray-700 leading-relaxed\">持续的基本功与专注力，决定了稳定的比赛表现。</p>",
        "                        </div>",
        "                    </div>",
        "                    <div class=\"md:col-span-2\">",
        "                        <blockquote class=\"rounded-lg bg-gradient-to-br from-nba-purple/10 to-nba-gold/10 border-l-4 border-nba-purple p-4 italic text-gray-700\">",
        &format!("                            \"{quote}\""),
        "                        </blockquote>",
        "                    </div>",
        "                </div>",
    );
    join!(&header, &paras, &footer)
}

/// One pre-formatted paragraph with the whole detail text.
pub fn plain_inner(detail: &str) -> String {
    join!(
        "\n                <div class=\"prose lg:prose-xl max-w-none\">\n",
        &format!("                    <p class=\"{PARA_CLASS}\">{}</p>\n", escape_text(detail)),
        "                </div>\n"
    )
}

/// Swap the content container's inner HTML. Missing or unbalanced
/// containers leave the page as it was.
pub fn update_content(html: &str, title: &str, detail: &str, plain: bool) -> String {
    let lookup = locate(html, "div", Selector::Exact(CONTENT_CLASS));
    if !lookup.is_found() {
        logd!("content: container not usable {:?}", lookup.offsets());
        return s!(html);
    }
    let inner = if plain { plain_inner(detail) } else { enhanced_inner(title, detail) };
    splice(html, &lookup, &inner).into_owned()
}
