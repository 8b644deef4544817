// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{AppOptions, Language, TranslateConfig};
use crate::error::{Error, Result};
use crate::progress::{ConsoleProgress, Progress};
use crate::runner;

#[derive(Parser)]
#[command(name = "hoops_facts", version, about = "Maintenance jobs for the NBA Fun Facts site")]
struct Cli {
    /// Site root holding nba.json, index.html, start.md and the pages
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a detail for records with a missing or stub one
    Backfill {
        #[arg(long, value_enum, default_value_t = Lang::En)]
        lang: Lang,
    },
    /// Patch every record's page: detail, hero, related cards, nav, footer
    Apply {
        /// Pages that get the plain detail block (repeatable; replaces the default)
        #[arg(long = "plain")]
        plain: Vec<String>,
    },
    /// Generate the star subject pages from start.md
    Stars {
        /// First subject number to generate
        #[arg(long, default_value_t = 4)]
        from: u32,
    },
    /// Translate Chinese titles and details in nba.json
    TranslateJson,
    /// Translate Chinese text in the root-level pages
    TranslateHtml,
    /// Swap the site's fixed UI phrases for English, no API needed
    Localize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Lang { En, Zh }

impl From<Lang> for Language {
    fn from(l: Lang) -> Self {
        match l {
            Lang::En => Language::En,
            Lang::Zh => Language::Zh,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose, cli.log_file.as_deref()).map_err(|e| {
        Error::io(cli.log_file.as_deref().unwrap_or(cli.root.as_path()), e)
    })?;

    let mut opts = AppOptions::with_root(cli.root);
    opts.translate = TranslateConfig::from_env();
    let mut console = ConsoleProgress::default();
    let progress: &mut dyn Progress = &mut console;

    match cli.command {
        Command::Backfill { lang } => {
            opts.backfill.lang = lang.into();
            let s = runner::run_backfill(&opts, Some(progress))?;
            println!("Filled {} of {} records", s.filled.len(), s.total);
        }
        Command::Apply { plain } => {
            if !plain.is_empty() { opts.apply.plain_pages = plain; }
            let s = runner::run_apply(&opts, Some(progress))?;
            println!("Updated files: {}", s.updated.len());
            if !s.missing.is_empty() {
                println!("Missing html files: {}", s.missing.join(", "));
            }
        }
        Command::Stars { from } => {
            opts.stars.from = from;
            let s = runner::run_stars(&opts, Some(progress))?;
            println!("Generated {} pages", s.written.len());
        }
        Command::TranslateJson => {
            let s = runner::run_translate_json(&opts, Some(progress))?;
            if s.guidance.is_none() {
                println!("Translated {} fields", s.texts);
            }
        }
        Command::TranslateHtml => {
            let s = runner::run_translate_html(&opts, Some(progress))?;
            if s.guidance.is_none() {
                println!("Translated {} texts in {} files", s.texts, s.files_changed.len());
            }
        }
        Command::Localize => {
            let s = runner::run_localize(&opts, Some(progress))?;
            println!("Updated {} root HTML files", s.files_changed.len());
        }
    }
    Ok(())
}
