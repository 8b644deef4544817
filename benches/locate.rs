// benches/locate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use hoops_facts::block::{self, Selector};
use hoops_facts::config::consts::{CONTENT_CLASS, RELATED_GRID_TOKENS};

/// A page shaped like the site's: deep div nesting before and around the targets.
fn synthetic_page(cards: usize) -> String {
    let mut doc = String::from("<html><body><nav class=\"bg-nba-purple\"><div class=\"container\"></div></nav>\n");
    for i in 0..cards {
        doc.push_str(&format!(
            "<div class=\"card\"><div class=\"inner\"><div><p>card {i}</p></div></div></div>\n"
        ));
    }
    doc.push_str("<div class=\"p-6 md:p-8\">");
    for i in 0..cards {
        doc.push_str(&format!("<div><div><p>para {i}</p></div></div>"));
    }
    doc.push_str("</div>\n<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\">");
    for i in 0..3 {
        doc.push_str(&format!("<a href=\"nba_{i}.html\"><div><h3>{i}</h3></div></a>"));
    }
    doc.push_str("</div>\n</body></html>");
    doc
}

fn bench_locate(c: &mut Criterion) {
    let doc = synthetic_page(500);

    c.bench_function("locate_content_exact", |b| {
        b.iter(|| black_box(block::locate(black_box(&doc), "div", Selector::Exact(CONTENT_CLASS))))
    });

    c.bench_function("locate_related_tokens", |b| {
        b.iter(|| black_box(block::locate(black_box(&doc), "div", Selector::Tokens(RELATED_GRID_TOKENS))))
    });

    c.bench_function("replace_inner_content", |b| {
        b.iter(|| {
            let out = block::replace_inner(black_box(&doc), "div", Selector::Exact(CONTENT_CLASS), "<p>new</p>");
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
