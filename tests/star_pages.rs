// tests/star_pages.rs
use std::fs;

use hoops_facts::config::AppOptions;
use hoops_facts::runner::run_stars;

const SOURCE: &str = "# NBA Stars

## 11. Kobe Bryant
**Fun Fact: Free throws**

Kobe's first and last NBA points both came from the free-throw line.

**More Details**

- Drafted 13th in 1996.
- Scored 60 in his final game.

## 12. Hakeem Olajuwon
**Fun Fact: First overall**

Olajuwon started out as a soccer goalkeeper.
";

#[test]
fn pages_are_written_from_threshold() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("start.md"), SOURCE).unwrap();

    let mut opts = AppOptions::with_root(dir.path());
    opts.stars.from = 11;
    let summary = run_stars(&opts, None).unwrap();

    let names: Vec<_> = summary
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["start_11.html", "start_12.html"]);
    assert!(!dir.path().join("start_10.html").exists());

    let kobe = fs::read_to_string(dir.path().join("start_11.html")).unwrap();
    assert!(kobe.contains("Kobe Bryant"));
    assert!(kobe.contains("Drafted 13th in 1996."));
    assert!(kobe.contains("function toggleMobileMenu"));

    let hakeem = fs::read_to_string(dir.path().join("start_12.html")).unwrap();
    assert!(hakeem.contains("Olajuwon started out as a soccer goalkeeper."));
}

#[test]
fn rerun_overwrites_generated_pages() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("start.md"), SOURCE).unwrap();
    fs::write(dir.path().join("start_12.html"), "stale").unwrap();

    let mut opts = AppOptions::with_root(dir.path());
    opts.stars.from = 12;
    run_stars(&opts, None).unwrap();
    let page = fs::read_to_string(dir.path().join("start_12.html")).unwrap();
    assert_ne!(page, "stale");
}

#[test]
fn missing_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = AppOptions::with_root(dir.path());
    assert!(matches!(run_stars(&opts, None), Err(hoops_facts::Error::Missing(_))));
}
