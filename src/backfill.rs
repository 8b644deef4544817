// src/backfill.rs
//! Fill in `detail` for records that have none, or only a stub.

use crate::config::Language;
use crate::config::consts::{MIN_DETAIL_CHARS, TARGET_DETAIL_CHARS};
use crate::store::{ContentStore, Record};

// `{title}` is substituted verbatim.
const EN_TEMPLATE: &str = "About {title} this NBA trivia, it shows many little-known historical records and interesting details in professional basketball. In the NBA, a highly competitive league, every detail contains profound meaning, and {title} is undoubtedly one of the most representative. This seemingly simple trivia actually reflects the complexity and diversity of NBA history. It not only records history but also reflects the development of the times. In NBA history, few events can maintain their importance for such a long time like {title}. This trivia not only helps us understand the historical development of the NBA but also gives us a deeper understanding of the charm and complexity of professional sports. In NBA history, {title} is not only an important historical record but also an important component of the NBA development process.";

const EN_FILLER: &str = " This trivia not only gives us a deeper understanding of NBA history and culture but also makes us realize the complexity and diversity of professional sports. In NBA history, details like this often contain profound meaning. They not only record history but also reflect the development of the times.";

const ZH_TEMPLATES: [&str; 3] = [
    "关于{title}这个NBA冷知识，展现了职业篮球运动中许多鲜为人知的历史记录和有趣细节。在NBA这个充满竞争的联盟中，每个细节都蕴含着深刻的意义，而{title}无疑是其中最具代表性的之一。这个看似简单的冷知识实际上反映了NBA历史的复杂性和多样性，它不仅记录了历史，也反映了时代的发展。在NBA的历史上，很少有事件能够像{title}一样在如此长的时间内保持其重要性。这个冷知识不仅让我们了解了NBA的历史发展，也让我们更深入地认识了职业体育运动的魅力和复杂性。在NBA的历史上，{title}不仅是一个重要的历史记录，也是NBA发展历程中的重要组成部分。",
    "作为NBA历史发展中的重要组成部分，{title}在NBA的历史上有着特殊的地位。关于{title}这个冷知识，展现了NBA历史发展中的复杂性和多样性。在NBA的历史上，有许多重要的时刻和事件，而{title}无疑是其中最具代表性的之一。这个历史性的事件不仅记录了NBA的发展历程，也反映了美国职业体育的演变。在NBA的历史上，很少有事件能够像{title}一样在如此长的时间内保持其重要性。这个冷知识不仅让我们了解了NBA的历史，也让我们更深入地认识了职业体育发展的规律。在NBA的历史上，{title}不仅是一个重要的历史事件，也是NBA发展历程中的重要里程碑。",
    "关于{title}这个NBA冷知识，展现了NBA联盟发展历程中的重要时刻和里程碑事件。在NBA的历史上，有许多重要的时刻标志着联盟的发展和进步，而{title}无疑是其中最重要的之一。这个历史性的事件不仅改变了NBA的面貌，也影响了整个美国职业体育的发展。在NBA的历史上，很少有事件能够像{title}一样对联盟产生如此深远的影响。这个冷知识不仅让我们了解了NBA的历史发展，也让我们更深入地认识了职业体育联盟的发展规律。在NBA的历史上，{title}不仅是一个重要的历史事件，也是NBA发展历程中的重要转折点。",
];

const ZH_FILLER: &str = "这个冷知识不仅让我们更深入地了解了NBA的历史和文化，也让我们认识到了职业体育运动的复杂性和多样性。在NBA的历史上，像这样的细节往往蕴含着深刻的意义，它们不仅记录了历史，也反映了时代的发展。";

/// A detail is missing when absent, empty, or under the stub threshold
/// once trimmed. Lengths are in chars.
pub fn needs_detail(record: &Record) -> bool {
    match record.detail() {
        None => true,
        Some(d) => d.trim().chars().count() < MIN_DETAIL_CHARS,
    }
}

/// Build filler text for `title`. Always at least `TARGET_DETAIL_CHARS` chars
/// and always contains `title` verbatim. `seed` picks among the Chinese templates.
pub fn synthesize_detail(title: &str, lang: Language, seed: u64) -> String {
    let (template, filler) = match lang {
        Language::En => (EN_TEMPLATE, EN_FILLER),
        Language::Zh => (ZH_TEMPLATES[(seed % ZH_TEMPLATES.len() as u64) as usize], ZH_FILLER),
    };

    let mut content = template.replace("{title}", title);
    let mut len = content.chars().count();
    let filler_len = filler.chars().count();
    while len < TARGET_DETAIL_CHARS {
        content.push_str(filler);
        len += filler_len;
    }
    content
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BackfillReport {
    /// (id, title) of every record filled, in store order.
    pub filled: Vec<(Option<i64>, String)>,
}

/// Fill every record that needs it. The store is modified in place.
pub fn backfill(store: &mut ContentStore, lang: Language) -> BackfillReport {
    let mut report = BackfillReport::default();
    for (idx, record) in store.records.iter_mut().enumerate() {
        if !needs_detail(record) { continue; }

        let id = record.id();
        let seed = id.map(|i| i.unsigned_abs()).unwrap_or(idx as u64);
        let title = s!(record.title());
        let detail = synthesize_detail(&title, lang, seed);
        logd!("Backfill: id={:?} '{}' -> {} chars", id, title, detail.chars().count());
        record.set_detail(detail);
        report.filled.push((id, title));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn foo_play_reaches_target_length() {
        let d = synthesize_detail("Foo Play", Language::En, 0);
        assert!(d.chars().count() >= 300);
        assert!(d.contains("Foo Play"));
    }

    #[test]
    fn short_chinese_template_gets_padded() {
        for seed in 0..3 {
            let d = synthesize_detail("姚明", Language::Zh, seed);
            assert!(d.chars().count() >= TARGET_DETAIL_CHARS, "seed {seed}");
            assert!(d.contains("姚明"));
        }
    }

    #[test]
    fn chinese_template_is_deterministic() {
        assert_eq!(
            synthesize_detail("科比", Language::Zh, 4),
            synthesize_detail("科比", Language::Zh, 1),
        );
    }

    #[test]
    fn only_missing_or_stub_details_are_filled() {
        let long = "x".repeat(60);
        let text = format!(
            r#"[{{"id":1,"title":"A","detail":"{long}"}},{{"id":2,"title":"B","detail":"  short  "}},{{"id":3,"title":"C"}},{{"id":4,"title":"D","detail":""}}]"#
        );
        let mut store = ContentStore::parse(&text, Path::new("nba.json")).unwrap();
        let report = backfill(&mut store, Language::En);

        let ids: Vec<_> = report.filled.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![Some(2), Some(3), Some(4)]);
        assert_eq!(store.records[0].detail(), Some(long.as_str()));
        assert!(store.records.iter().all(|r| !needs_detail(r)));
    }

    #[test]
    fn stub_threshold_counts_chars_not_bytes() {
        let mut r = Record::new();
        // 20 CJK chars = 60 bytes, still a stub
        r.set_detail("冷".repeat(20));
        assert!(needs_detail(&r));
    }
}
