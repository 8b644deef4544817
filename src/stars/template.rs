// src/stars/template.rs
//! Full English page for one star subject.

use crate::config::consts::{HEADSHOT_BASE, PICSUM_BASE};
use crate::core::html::{escape_attr, escape_text};
use crate::core::sanitize::take_chars;
use crate::pages::nav::{standard_mobile_menu, standard_nav_inner, EN_LABELS, MOBILE_SCRIPT};

use super::markdown::StarSection;
use super::roster::{by_num, Star};

const HEAD_ASSETS: &str = r##"    <script src="https://cdn.tailwindcss.com"></script>
    <link href="https://cdn.jsdelivr.net/npm/font-awesome@4.7.0/css/font-awesome.min.css" rel="stylesheet">
    <script>
        tailwind.config = {
            theme: {
                extend: {
                    colors: {
                        nba: {
                            purple: '#552583',
                            gold: '#FDB927',
                            dark: '#171717',
                            light: '#F5F5F5'
                        }
                    },
                    fontFamily: {
                        sans: ['Inter', 'system-ui', 'sans-serif'],
                    },
                }
            }
        }
    </script>
    <style type="text/tailwindcss">
        @layer utilities {
            .text-shadow {
                text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.5);
            }
            .card-hover {
                transition: transform 0.3s ease, box-shadow 0.3s ease;
            }
            .card-hover:hover {
                transform: translateY(-5px);
                box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
            }
        }
    </style>
<!-- Google tag (gtag.js) -->
<script async src="https://www.googletagmanager.com/gtag/js?id=G-8WF0S87W7F"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){dataLayer.push(arguments);}
  gtag('js', new Date());

  gtag('config', 'G-8WF0S87W7F');
</script>
    <link rel="icon" href="favicon.ico">
<script async src="https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client=ca-pub-7274710287377352"
     crossorigin="anonymous"></script>
</head>
<body class="bg-gray-100 font-sans">
    <!-- 导航栏 -->
"##;

const FOOTER: &str = r##"    <!-- 页脚 -->
    <footer class="bg-nba-dark text-white pt-16 pb-8">
        <div class="container mx-auto px-4">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-12">
                <div>
                    <div class="flex items-center space-x-2 mb-4">
                        <i class="fa fa-basketball-ball text-2xl text-nba-gold"></i>
                        <span class="font-bold text-xl">NBA Fun Facts</span>
                    </div>
                    <p class="text-gray-400 mb-4">Explore lesser-known NBA stories and become a true hoops expert</p>
                    <div class="flex space-x-4">
                        <a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">
                            <i class="fa fa-facebook"></i>
                        </a>
                        <a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">
                            <i class="fa fa-twitter"></i>
                        </a>
                        <a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">
                            <i class="fa fa-instagram"></i>
                        </a>
                        <a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">
                            <i class="fa fa-youtube-play"></i>
                        </a>
                    </div>
                </div>

                <div>
                    <h4 class="font-bold text-lg mb-4">Quick Links</h4>
                    <ul class="space-y-2">
                        <li><a href="index.html" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">Home</a></li>
                        <li><a href="index.html#facts" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">Fun Facts</a></li>
                        <li><a href="about.html" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">About</a></li>
                        <li><a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">Contact Us</a></li>
                    </ul>
                </div>

                <div>
                    <h4 class="font-bold text-lg mb-4">Categories</h4>
                    <ul class="space-y-2">
                        <li><a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">Player Stories</a></li>
                        <li><a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">Team History</a></li>
                        <li><a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">Stats Trivia</a></li>
                        <li><a href="#" class="text-gray-400 hover:text-nba-gold transition-colors duration-300">Rules Fun Facts</a></li>
                    </ul>
                </div>

                <div>
                    <h4 class="font-bold text-lg mb-4">Contact Us</h4>
                    <ul class="space-y-2">
                        <li class="flex items-center text-gray-400">
                            <i class="fa fa-envelope mr-2"></i> hcf@foxmail.com
                        </li>
                        <li class="flex items-center text-gray-400">
                            <i class="fa fa-twitter mr-2"></i> @nbacoldfacts
                        </li>
                        <li class="flex items-center text-gray-400">
                            <i class="fa fa-map-marker mr-2"></i> Longhua District, Shenzhen
                        </li>
                    </ul>
                </div>
            </div>

            <div class="border-t border-gray-700 pt-8 text-center text-gray-400 text-sm">
                <p>© 2023 NBA Fun Facts - For learning and communication only; not affiliated with the NBA</p>
            </div>
        </div>
    </footer>
"##;

fn head(star: &Star) -> String {
    lines!(
        "<!DOCTYPE html>",
        "<html lang=\"en\">",
        "<head>",
        "    <meta charset=\"UTF-8\">",
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
        &format!("    <title>{} - NBA Fun Facts</title>", escape_text(star.title)),
    )
}

fn image_tag(star: &Star, class: &str, fallback_size: &str) -> String {
    format!(
        "<img src=\"{HEADSHOT_BASE}/{id}.png\" alt=\"{alt}\" class=\"{class}\" onerror=\"this.onerror=null;this.src='{PICSUM_BASE}/{id}/{fallback_size}';\">",
        id = star.image_id,
        alt = escape_attr(star.name),
    )
}

/// Card for one related subject; titles are cut at 50 and 60 chars.
pub fn related_card(star: &Star) -> String {
    join!(
        &format!("\n                <a href=\"start_{}.html\" class=\"block\">\n", star.num),
        "                    <div class=\"bg-white rounded-lg shadow-md overflow-hidden card-hover\">\n",
        &format!("                        {}\n", image_tag(star, "w-full h-48 object-cover", "600/300")),
        "                        <div class=\"p-4\">\n",
        &format!("                            <h4 class=\"font-bold text-lg mb-2\">{}...</h4>\n", escape_text(take_chars(star.title, 50))),
        &format!(
            "                            <p class=\"text-gray-600 text-sm\">{} - {}...</p>\n",
            escape_text(star.name),
            escape_text(take_chars(star.title, 60))
        ),
        "                        </div>\n",
        "                    </div>\n",
        "                </a>"
    )
}

fn main_block(star: &Star, section: &StarSection) -> String {
    let details = section
        .details
        .iter()
        .map(|d| format!("                        <li>{}</li>", escape_text(d)))
        .collect::<Vec<_>>()
        .join("\n");
    let related: String = star.related.iter().filter_map(|n| by_num(*n)).map(related_card).collect();
    let name = escape_text(star.name);

    lines!(
        "    <!-- 主内容区 -->",
        "    <main class=\"container mx-auto px-4 py-8\">",
        "        <div class=\"max-w-4xl mx-auto bg-white rounded-lg shadow-lg overflow-hidden\">",
        "            <!-- 标题区 -->",
        "            <div class=\"relative h-64 md:h-80\">",
        &join!("                ", &image_tag(star, "w-full h-full object-cover", "1200/400")),
        "                <div class=\"absolute inset-0 bg-gradient-to-t from-black/80 to-transparent flex items-end\">",
        &format!("                    <h2 class=\"text-2xl md:text-4xl font-bold text-white p-6 text-shadow\">{}</h2>", escape_text(star.title)),
        "                </div>",
        "            </div>",
        "            ",
        "            <!-- 内容区 -->",
        "            <div class=\"p-6 md:p-8\">",
        "                <!-- 徽章 + 阅读时长 -->",
        "                <div class=\"flex items-center gap-2 mb-6 text-sm\">",
        &format!("                    <span class=\"px-3 py-1 rounded-full bg-nba-purple/10 text-nba-purple\">{name}</span>"),
        "                    <span class=\"px-3 py-1 rounded-full bg-nba-gold/10 text-nba-gold\">Fun Fact</span>",
        "                    <span class=\"ml-auto text-gray-500 flex items-center\"><i class=\"fa fa-clock-o mr-1\"></i> 5 min read</span>",
        "                </div>",
        "",
        "                <!-- 渐变分隔线 -->",
        "                <div class=\"relative mb-6\">",
        "                    <div class=\"h-1 w-24 bg-gradient-to-r from-nba-purple to-nba-gold rounded\"></div>",
        "                </div>",
        "",
        "                <!-- 正文分段 -->",
        "                <div class=\"prose lg:prose-xl max-w-none\">",
        &format!("                    <p class=\"text-lg leading-relaxed whitespace-pre-line\">{}</p>", escape_text(&section.fun_fact)),
        "                    ",
        "                    <h3 class=\"text-2xl font-bold mt-8 mb-4 text-gray-800\">More Details</h3>",
        "                    <ul class=\"list-disc list-inside space-y-2 text-lg leading-relaxed text-gray-700\">",
        &details,
        "                    </ul>",
        "                </div>",
        "",
        "                <!-- 侧栏引述与提示 -->",
        "                <div class=\"mt-8 grid md:grid-cols-5 gap-6 items-start\">",
        "                    <div class=\"md:col-span-3\">",
        "                        <div class=\"bg-nba-light/60 border border-gray-100 rounded-lg p-4\">",
        "                            <div class=\"flex items-center text-nba-purple font-medium mb-2\"><i class=\"fa fa-lightbulb-o mr-2\"></i>Tip</div>",
        "                            <p class=\"text-gray-700 leading-relaxed\">These fun facts reveal the human side of NBA legends and their unique journeys.</p>",
        "                        </div>",
        "                    </div>",
        "                    <div class=\"md:col-span-2\">",
        "                        <blockquote class=\"rounded-lg bg-gradient-to-br from-nba-purple/10 to-nba-gold/10 border-l-4 border-nba-purple p-4 italic text-gray-700\">",
        &format!("                            \"{name}'s story shows that greatness comes in many forms, each with its own unique path.\""),
        "                        </blockquote>",
        "                    </div>",
        "                </div>",
        "            </div>",
        "        </div>",
        "        ",
        "        <!-- 相关知识点 -->",
        "        <div class=\"mt-12\">",
        "            <h3 class=\"text-2xl font-bold mb-6 text-gray-800\">Related Fun Facts</h3>",
        "            <div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\">",
        &related,
        "            </div>",
        "        </div>",
        "    </main>",
        "",
    )
}

/// Render the complete page. A subject with no Markdown section still
/// renders, with an empty body.
pub fn render_star_page(star: &Star, section: &StarSection) -> String {
    join!(
        &head(star),
        HEAD_ASSETS,
        "    <nav class=\"bg-nba-purple text-white shadow-md\">",
        &standard_nav_inner(&EN_LABELS),
        "</nav>\n",
        &standard_mobile_menu(&EN_LABELS),
        "\n",
        &main_block(star, section),
        FOOTER,
        MOBILE_SCRIPT,
        "</body>\n</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{locate, Selector};

    fn magic() -> &'static Star { by_num(4).unwrap() }

    #[test]
    fn page_has_expected_regions() {
        let section = StarSection {
            heading: s!("Magic Johnson"),
            fun_fact: s!("Won at 20 & played center."),
            details: vec![s!("Rookie <year>"), s!("Finals MVP")],
        };
        let page = render_star_page(magic(), &section);

        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page.contains("<title>Magic Won the NBA Championship and Finals MVP at Age 20 - NBA Fun Facts</title>"));
        assert!(page.contains("tailwind.config = {\n"));
        assert!(page.contains("https://cdn.nba.com/headshots/nba/latest/1040x760/77142.png"));
        assert!(page.contains("this.src='https://picsum.photos/id/77142/1200/400';"));
        assert!(page.contains(">Won at 20 &amp; played center.</p>"));
        assert!(page.contains("                        <li>Rookie &lt;year&gt;</li>\n                        <li>Finals MVP</li>\n                    </ul>"));
        assert!(page.contains("href=\"start_3.html\""));
        assert!(page.contains("href=\"start_9.html\""));
        assert!(page.contains("href=\"start_5.html\""));
        assert!(page.contains("</nav>\n\n    <div id=\"mobile-menu\""));
        assert!(page.ends_with("</script>\n</body>\n</html>"));

        // the generated page is itself editable by the page pipeline
        assert!(locate(&page, "div", Selector::Exact("p-6 md:p-8")).is_found());
        assert!(locate(&page, "div", Selector::Tokens(crate::config::consts::RELATED_GRID_TOKENS)).is_found());
    }

    #[test]
    fn related_titles_are_truncated() {
        let kareem = by_num(3).unwrap();
        let card = related_card(kareem);
        let want = format!(">{}...</h4>", take_chars(kareem.title, 50));
        assert!(card.contains(&want));
        assert!(card.contains("Kareem Abdul-Jabbar - "));
    }
}
