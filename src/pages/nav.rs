// src/pages/nav.rs
//! Navbar upkeep: desktop links, horizontal layout, mobile menu and its script.

use std::ops::Range;

use crate::block::{locate, splice, Selector};
use crate::config::consts::NAV_DESKTOP_TOKENS;
use crate::core::html::{find_ci, next_close_tag, next_open_lexeme, rfind_ci, tag_end};

const HOME_HREF: &str = r#"href="index.html""#;
const TOGGLE_ID: &str = r#"id="mobile-menu-toggle""#;
const MENU_ID: &str = r#"id="mobile-menu""#;
const DESKTOP_OPEN: &str = r#"<div class="hidden md:flex items-center space-x-6">"#;
const LINK_CLASS: &str = "text-white hover:text-nba-gold transition-colors duration-300 flex items-center";

/// Visible text of the navbar, per site language.
#[derive(Clone, Copy, Debug)]
pub struct NavLabels {
    pub brand: &'static str,
    pub home: &'static str,
    pub about: &'static str,
    pub privacy: &'static str,
}

pub const ZH_LABELS: NavLabels = NavLabels {
    brand: "NBA冷门知识库",
    home: "首页",
    about: "关于我们",
    privacy: "隐私政策",
};

pub const EN_LABELS: NavLabels = NavLabels {
    brand: "NBA Fun Facts",
    home: "Home",
    about: "About",
    privacy: "Privacy Policy",
};

pub const MOBILE_TOGGLE: &str = concat!(
    "\n            <div class=\"md:hidden\">\n",
    "                <button id=\"mobile-menu-toggle\" class=\"text-white hover:text-nba-gold transition-colors duration-300\">\n",
    "                    <i class=\"fa fa-bars text-xl\"></i>\n",
    "                </button>\n",
    "            </div>",
);

pub const MOBILE_SCRIPT: &str = concat!(
    "\n<script>\n",
    "function toggleMobileMenu(){\n",
    "  var btn=document.getElementById(\"mobile-menu-toggle\");\n",
    "  var menu=document.getElementById(\"mobile-menu\");\n",
    "  if(!btn||!menu) return;\n",
    "  menu.classList.toggle(\"hidden\");\n",
    "}\n",
    "document.addEventListener(\"DOMContentLoaded\",function(){\n",
    "  var btn=document.getElementById(\"mobile-menu-toggle\");\n",
    "  if(btn){ btn.addEventListener(\"click\", toggleMobileMenu); }\n",
    "});\n",
    "</script>\n",
);

fn link(indent: &str, href: &str, icon: &str, label: &str) -> String {
    format!(
        "{indent}<a href=\"{href}\" class=\"{LINK_CLASS}\">\n{indent}    <i class=\"fa {icon} mr-1\"></i> {label}\n{indent}</a>"
    )
}

/// Home, about and privacy links, one per line, no trailing newline.
pub fn nav_links(labels: &NavLabels, indent: &str) -> String {
    [
        link(indent, "index.html", "fa-home", labels.home),
        link(indent, "about.html", "fa-info-circle", labels.about),
        link(indent, "privacy.html", "fa-shield", labels.privacy),
    ]
    .join("\n")
}

fn extra_links(labels: &NavLabels) -> String {
    let pad = "                ";
    join!(
        "\n",
        &link(pad, "about.html", "fa-info-circle", labels.about),
        "\n",
        &link(pad, "privacy.html", "fa-shield", labels.privacy)
    )
}

/// Everything between `<nav …>` and `</nav>` on a standard page.
pub fn standard_nav_inner(labels: &NavLabels) -> String {
    lines!(
        "",
        "        <div class=\"container mx-auto px-4 py-3 flex justify-between items-center\">",
        "            <div class=\"flex items-center space-x-2\">",
        "                <i class=\"fa fa-basketball-ball text-2xl text-nba-gold\"></i>",
        &format!("                <h1 class=\"text-xl font-bold\">{}</h1>", labels.brand),
        "            </div>",
        &join!("            ", DESKTOP_OPEN),
        &nav_links(labels, "                "),
        &join!("            </div>", MOBILE_TOGGLE),
        "        </div>",
    )
}

/// The `#mobile-menu` block that follows `</nav>`, built from `links`.
fn mobile_menu(links: &str) -> String {
    join!(
        "\n    <div id=\"mobile-menu\" class=\"md:hidden bg-nba-purple text-white px-4 py-3 hidden\">\n",
        "        <div class=\"flex flex-col space-y-3\">\n",
        "            ", links, "\n",
        "        </div>\n",
        "    </div>"
    )
}

/// Standard mobile menu with the three site links.
pub fn standard_mobile_menu(labels: &NavLabels) -> String {
    join!(&mobile_menu(nav_links(labels, "            ").trim_start()), "\n")
}

/// First attribute-less `<div>` whose text, up to its first `</div>`,
/// holds the home link. Returns (tag, inner, close-tag) ranges.
fn bare_home_div(html: &str) -> Option<(Range<usize>, Range<usize>, Range<usize>)> {
    let mut pos = 0;
    while let Some(at) = find_ci(html, "<div>", pos) {
        let inner_start = at + "<div>".len();
        let close = next_close_tag(html, "div", inner_start)?;
        if html[inner_start..close.start].contains(HOME_HREF) {
            return Some((at..inner_start, inner_start..close.start, close));
        }
        pos = inner_start;
    }
    None
}

/// Make sure the desktop nav links to the about and privacy pages.
pub fn ensure_nav_links(html: &str, labels: &NavLabels) -> String {
    let lookup = locate(html, "div", Selector::Tokens(NAV_DESKTOP_TOKENS));
    if let Some(span) = lookup.span() {
        let inner = &html[span.inner()];
        if inner.contains("about.html") && inner.contains("privacy.html") {
            return s!(html);
        }
        return splice(html, &lookup, &join!(inner, &extra_links(labels))).into_owned();
    }

    match bare_home_div(html) {
        Some((_, inner, close)) if !html[inner.clone()].contains("about.html") => {
            join!(&html[..close.start], &extra_links(labels), &html[close.start..])
        }
        _ => s!(html),
    }
}

/// Give the bare right-hand link container the responsive desktop class.
pub fn make_horizontal(html: &str) -> String {
    match bare_home_div(html) {
        Some((open, _, _)) => join!(&html[..open.start], DESKTOP_OPEN, &html[open.end..]),
        None => s!(html),
    }
}

/// Add the hamburger button after the desktop links and a mobile menu
/// holding the same links after `</nav>`. No-op if a toggle already exists.
pub fn inject_mobile_menu(html: &str) -> String {
    if html.contains(TOGGLE_ID) { return s!(html); }

    let lookup = locate(html, "div", Selector::Tokens(NAV_DESKTOP_TOKENS));
    let (container_end, links) = match lookup.span() {
        Some(span) => (span.close_end(), span.inner()),
        None => match bare_home_div(html) {
            Some((_, inner, close)) => (close.end, inner),
            None => return s!(html),
        },
    };
    let Some(nav_close) = next_close_tag(html, "nav", container_end) else {
        return s!(html);
    };

    join!(
        &html[..container_end],
        MOBILE_TOGGLE,
        &html[container_end..nav_close.end],
        &mobile_menu(&html[links]),
        &html[nav_close.end..]
    )
}

/// Insert the toggle script before the last `</body>` unless the page
/// already has both the button and the handler.
pub fn inject_mobile_script(html: &str) -> String {
    if html.contains("mobile-menu-toggle") && html.contains("toggleMobileMenu") {
        return s!(html);
    }
    match rfind_ci(html, "</body>") {
        Some(at) => join!(&html[..at], MOBILE_SCRIPT, &html[at..]),
        None => s!(html),
    }
}

/// Replace the first `<nav>`'s content with the standard navbar, keeping the
/// opening tag. Adds the standard mobile menu and script when missing.
pub fn rebuild_nav(html: &str, labels: &NavLabels) -> String {
    let Some(lex) = next_open_lexeme(html, "nav", 0) else { return s!(html) };
    let Some(open_end) = tag_end(html, lex.end) else { return s!(html) };
    let Some(close) = next_close_tag(html, "nav", open_end) else { return s!(html) };

    let head = join!(&html[..open_end], &standard_nav_inner(labels), "</nav>");
    let tail = &html[close.end..];
    let out = if html[..lex.start].contains(MENU_ID) || tail.contains(MENU_ID) {
        join!(&head, tail)
    } else {
        join!(&head, &standard_mobile_menu(labels), tail)
    };
    inject_mobile_script(&out)
}
