// src/runner.rs
//! One entry point per maintenance job. Each loads what it needs from the
//! site root, does its work, writes files, and returns a summary.

use std::path::PathBuf;

use crate::{
    backfill,
    config::{consts::MISSING_PREVIEW, AppOptions, TranslateConfig},
    error::{Error, Result},
    file::{file_name, read_text, root_html_files, write_if_changed, write_text},
    pages::{self, Site},
    progress::Progress,
    stars, store,
    translate::{self, ApiTranslator, Translate},
};

#[derive(Debug, Default)]
pub struct BackfillSummary {
    pub total: usize,
    /// (id, title) of each record that got a generated detail.
    pub filled: Vec<(Option<i64>, String)>,
}

#[derive(Debug, Default)]
pub struct ApplySummary {
    pub updated: Vec<String>,
    /// `localLink` values with no file behind them.
    pub missing: Vec<String>,
}

#[derive(Debug, Default)]
pub struct StarsSummary {
    pub written: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct TranslateSummary {
    /// Set when no backend is configured; nothing was touched.
    pub guidance: Option<String>,
    pub texts: usize,
    pub files_changed: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct LocalizeSummary {
    pub files_changed: Vec<PathBuf>,
}

/* ---------------- backfill ---------------- */

pub fn run_backfill(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<BackfillSummary> {
    let path = opts.store_path();
    let mut data = store::load(&path)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Loaded {} records", data.len()));
    }

    let report = backfill::backfill(&mut data, opts.backfill.lang);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} records need a detail", report.filled.len()));
        for (id, title) in report.filled.iter().take(MISSING_PREVIEW) {
            let id = id.map_or_else(|| s!("-"), |i| i.to_string());
            p.log(&format!("  - ID {id}: {title}"));
        }
    }

    if !report.filled.is_empty() {
        store::save(&path, &data)?;
        logf!("Backfilled {} of {} records", report.filled.len(), data.len());
    }
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(BackfillSummary { total: data.len(), filled: report.filled })
}

/* ---------------- apply details ---------------- */

pub fn run_apply(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<ApplySummary> {
    let data = store::load(&opts.store_path())?;

    let index = opts.index_path();
    let footer = match read_text(&index) {
        Ok(text) => pages::footer::extract_footer(&text),
        Err(e) => {
            logw!("No footer source: {e}");
            None
        }
    };
    if footer.is_none() {
        logd!("index.html has no site footer; footers left as they are");
    }
    let site = Site::new(&data, footer.as_deref(), &opts.apply);

    let targets: Vec<_> = data
        .records
        .iter()
        .filter_map(|r| r.local_link().map(|l| (l, r)))
        .collect();
    if let Some(p) = progress.as_deref_mut() { p.begin(targets.len()); }

    let mut summary = ApplySummary::default();
    for (link, record) in targets {
        let path = opts.site_file(link);
        if !path.is_file() {
            summary.missing.push(s!(link));
            continue;
        }
        if record.detail().is_none_or(str::is_empty) { continue; }

        let html = read_text(&path)?;
        let new_html = pages::apply_details(&html, link, record, &site);
        if write_if_changed(&path, &html, &new_html)? {
            logd!("Updated {}", path.display());
            if let Some(p) = progress.as_deref_mut() { p.item_done(link); }
            summary.updated.push(s!(link));
        }
    }

    logf!("Updated files: {}", summary.updated.len());
    if !summary.missing.is_empty() {
        logw!("Missing html files: {}", summary.missing.join(", "));
    }
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(summary)
}

/* ---------------- star pages ---------------- */

pub fn run_stars(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<StarsSummary> {
    let src_path = opts.stars_source_path();
    if !src_path.is_file() {
        return Err(Error::Missing(src_path));
    }
    let source = read_text(&src_path)?;
    let pages = stars::render_pages(&source, opts.stars.from);
    if let Some(p) = progress.as_deref_mut() { p.begin(pages.len()); }

    let mut written = Vec::with_capacity(pages.len());
    for (name, html) in pages {
        let path = opts.site_file(&name);
        write_text(&path, &html)?;
        logf!("Generated {name}");
        if let Some(p) = progress.as_deref_mut() { p.item_done(&name); }
        written.push(path);
    }
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(StarsSummary { written })
}

/* ---------------- translation ---------------- */

fn translator(cfg: &TranslateConfig) -> Option<ApiTranslator> {
    cfg.backend.clone().map(ApiTranslator::new)
}

fn no_backend(progress: Option<&mut dyn Progress>) -> TranslateSummary {
    let msg = TranslateConfig::guidance();
    logw!("{msg}");
    if let Some(p) = progress { p.log(&msg); }
    TranslateSummary { guidance: Some(msg), ..Default::default() }
}

/// Translate the store through the configured backend.
pub fn run_translate_json(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<TranslateSummary> {
    match translator(&opts.translate) {
        Some(tr) => {
            logf!("Translating store via {}", tr.backend_name());
            translate_json_with(opts, &tr, progress)
        }
        None => Ok(no_backend(progress)),
    }
}

/// Store translation with any translator. Backs the store up once first.
pub fn translate_json_with(
    opts: &AppOptions,
    tr: &dyn Translate,
    mut progress: Option<&mut dyn Progress>,
) -> Result<TranslateSummary> {
    let path = opts.store_path();
    let mut data = store::load(&path)?;
    store::backup_once(&path, &opts.backup_path())?;

    let texts = translate::json::translate_store(&mut data, tr);
    let mut summary = TranslateSummary { texts, ..Default::default() };
    if texts == 0 {
        logf!("No Chinese content found in {}", file_name(&path));
    } else {
        store::save(&path, &data)?;
        logf!("Translated {} fields across {} items", texts, data.len());
        summary.files_changed.push(path);
    }
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(summary)
}

/// Translate every root-level page through the configured backend.
pub fn run_translate_html(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<TranslateSummary> {
    match translator(&opts.translate) {
        Some(tr) => {
            logf!("Translating pages via {}", tr.backend_name());
            translate_html_with(opts, &tr, progress)
        }
        None => Ok(no_backend(progress)),
    }
}

pub fn translate_html_with(
    opts: &AppOptions,
    tr: &dyn Translate,
    mut progress: Option<&mut dyn Progress>,
) -> Result<TranslateSummary> {
    let files = root_html_files(opts.root())?;
    if files.is_empty() {
        logf!("No root-level HTML files found");
    }
    if let Some(p) = progress.as_deref_mut() { p.begin(files.len()); }

    let mut summary = TranslateSummary::default();
    for path in files {
        let html = read_text(&path)?;
        let (new_html, n) = translate::html::translate_page(&html, tr);
        summary.texts += n;
        if write_if_changed(&path, &html, &new_html)? {
            if let Some(p) = progress.as_deref_mut() { p.item_done(&file_name(&path)); }
            summary.files_changed.push(path);
        }
    }
    logf!("Processed {} files", summary.files_changed.len());
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(summary)
}

/* ---------------- offline localize ---------------- */

pub fn run_localize(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<LocalizeSummary> {
    let files = root_html_files(opts.root())?;
    if let Some(p) = progress.as_deref_mut() { p.begin(files.len()); }

    let mut summary = LocalizeSummary::default();
    for path in files {
        let html = read_text(&path)?;
        let new_html = translate::phrases::localize(&html);
        if write_if_changed(&path, &html, &new_html)? {
            if let Some(p) = progress.as_deref_mut() { p.item_done(&file_name(&path)); }
            summary.files_changed.push(path);
        }
    }
    logf!("Updated {} root HTML files", summary.files_changed.len());
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(summary)
}
