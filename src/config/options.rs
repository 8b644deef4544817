// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Site root: holds nba.json, index.html, start.md and the pages.
    pub root: PathBuf,
    pub backfill: BackfillOptions,
    pub apply: ApplyOptions,
    pub stars: StarOptions,
    pub translate: TranslateConfig,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            backfill: BackfillOptions::default(),
            apply: ApplyOptions::default(),
            stars: StarOptions::default(),
            translate: TranslateConfig::default(),
        }
    }
}

impl AppOptions {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    pub fn site_file(&self, name: &str) -> PathBuf { self.root.join(name) }
    pub fn store_path(&self) -> PathBuf { self.site_file(STORE_FILE) }
    pub fn backup_path(&self) -> PathBuf { self.site_file(STORE_BACKUP_FILE) }
    pub fn index_path(&self) -> PathBuf { self.site_file(INDEX_FILE) }
    pub fn stars_source_path(&self) -> PathBuf { self.site_file(STARS_SOURCE_FILE) }
    pub fn root(&self) -> &Path { &self.root }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BackfillOptions {
    pub lang: Language,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Pages that get the plain detail block instead of the enhanced layout.
    pub plain_pages: Vec<String>,
    /// Pages whose navbar is never rebuilt.
    pub nav_keep_pages: Vec<String>,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            plain_pages: PLAIN_DETAIL_PAGES.iter().map(|s| s!(*s)).collect(),
            nav_keep_pages: NAV_KEEP_PAGES.iter().map(|s| s!(*s)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarOptions {
    /// First subject number to generate; earlier pages are maintained by hand.
    pub from: u32,
}

impl Default for StarOptions {
    fn default() -> Self { Self { from: 4 } }
}

/// Which translation service to call. Chosen once at the edge, then passed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    DeepL { api_key: String },
    Azure { api_key: String, endpoint: String },
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::DeepL { .. } => "deepl",
            Backend::Azure { .. } => "azure",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TranslateConfig {
    pub backend: Option<Backend>,
}

impl TranslateConfig {
    /// Resolve the backend from variables. DeepL wins when both are configured;
    /// Azure needs both key and endpoint. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        let backend = if let Some(api_key) = get(ENV_DEEPL_KEY) {
            Some(Backend::DeepL { api_key })
        } else {
            match (get(ENV_AZURE_KEY), get(ENV_AZURE_ENDPOINT)) {
                (Some(api_key), Some(endpoint)) => Some(Backend::Azure { api_key, endpoint }),
                _ => None,
            }
        };
        Self { backend }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn guidance() -> String {
        format!(
            "No translation backend configured. Set {ENV_DEEPL_KEY} or {ENV_AZURE_KEY} + {ENV_AZURE_ENDPOINT} to enable translation."
        )
    }
}
