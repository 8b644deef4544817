// tests/translate_store.rs
use std::cell::Cell;
use std::fs;

use hoops_facts::config::AppOptions;
use hoops_facts::runner::{run_localize, run_translate_html, run_translate_json, translate_html_with, translate_json_with};
use hoops_facts::store;
use hoops_facts::translate::Translate;

/// Tags each text instead of calling a service.
#[derive(Default)]
struct Tagger {
    calls: Cell<usize>,
}

impl Translate for Tagger {
    fn translate(&self, texts: &[String]) -> Vec<String> {
        self.calls.set(self.calls.get() + 1);
        texts.iter().map(|t| format!("EN({})", t.chars().count())).collect()
    }
}

const STORE: &str = r#"[{"id":1,"title":"姚明","detail":"很高","localLink":"nba_1.html"},{"id":2,"title":"Plain","detail":"english"}]"#;

#[test]
fn store_translation_backs_up_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nba.json");
    fs::write(&path, STORE).unwrap();
    let opts = AppOptions::with_root(dir.path());

    let tr = Tagger::default();
    let summary = translate_json_with(&opts, &tr, None).unwrap();
    assert_eq!(summary.texts, 2);
    assert_eq!(tr.calls.get(), 1);

    let backup = opts.backup_path();
    assert_eq!(fs::read_to_string(&backup).unwrap(), STORE);

    let data = store::load(&path).unwrap();
    let first = data.by_id(1).unwrap();
    assert_eq!(first.title(), "EN(2)");
    assert_eq!(first.detail(), Some("EN(2)"));
    assert_eq!(first.local_link(), Some("nba_1.html"));
    assert_eq!(data.by_id(2).unwrap().detail(), Some("english"));

    // a second run finds nothing Chinese and keeps the first backup
    let again = translate_json_with(&opts, &tr, None).unwrap();
    assert_eq!(again.texts, 0);
    assert_eq!(fs::read_to_string(&backup).unwrap(), STORE);
}

#[test]
fn no_backend_leaves_everything_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nba.json");
    fs::write(&path, STORE).unwrap();
    fs::write(dir.path().join("index.html"), "<p>首页</p>").unwrap();
    let opts = AppOptions::with_root(dir.path());
    assert!(opts.translate.backend.is_none());

    let json = run_translate_json(&opts, None).unwrap();
    assert!(json.guidance.is_some());
    let html = run_translate_html(&opts, None).unwrap();
    assert!(html.guidance.is_some());

    assert_eq!(fs::read_to_string(&path).unwrap(), STORE);
    assert!(!opts.backup_path().exists());
    assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), "<p>首页</p>");
}

#[test]
fn page_translation_only_rewrites_chinese_pages() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.html"), r#"<html lang="zh-CN"><h1>冷门</h1><p>english</p></html>"#).unwrap();
    fs::write(dir.path().join("b.html"), "<p>english only</p>").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.html"), "<p>冷门</p>").unwrap();

    let opts = AppOptions::with_root(dir.path());
    let summary = translate_html_with(&opts, &Tagger::default(), None).unwrap();
    assert_eq!(summary.texts, 1);
    assert_eq!(summary.files_changed, vec![dir.path().join("a.html")]);

    let a = fs::read_to_string(dir.path().join("a.html")).unwrap();
    assert_eq!(a, r#"<html lang="en"><h1>EN(2)</h1><p>english</p></html>"#);
    assert_eq!(fs::read_to_string(dir.path().join("sub").join("c.html")).unwrap(), "<p>冷门</p>");
}

#[test]
fn localize_swaps_fixed_phrases() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), r#"<html lang="zh"><a href="index.html">首页</a><p>乔丹</p></html>"#).unwrap();
    fs::write(dir.path().join("about.html"), "<p>nothing here</p>").unwrap();

    let opts = AppOptions::with_root(dir.path());
    let summary = run_localize(&opts, None).unwrap();
    assert_eq!(summary.files_changed, vec![dir.path().join("index.html")]);
    assert_eq!(
        fs::read_to_string(dir.path().join("index.html")).unwrap(),
        r#"<html lang="en"><a href="index.html">Home</a><p>乔丹</p></html>"#
    );
}
