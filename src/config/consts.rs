// src/config/consts.rs

// Site files (relative to the site root)
pub const STORE_FILE: &str = "nba.json";
pub const STORE_BACKUP_FILE: &str = "nba_zh_backup.json";
pub const INDEX_FILE: &str = "index.html";
pub const STARS_SOURCE_FILE: &str = "start.md";
pub const STAR_PAGE_PREFIX: &str = "start_";

// Pages that keep their own hand-made navbar
pub const NAV_KEEP_PAGES: &[&str] = &["index.html", "about.html", "privacy.html"];
// Pages that get the plain detail block instead of the enhanced layout
pub const PLAIN_DETAIL_PAGES: &[&str] = &["nba_1.html"];

// Block selectors
pub const CONTENT_CLASS: &str = "p-6 md:p-8";
pub const RELATED_GRID_TOKENS: &[&str] = &["grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-6"];
pub const HERO_IMG_TOKENS: &[&str] = &["w-full", "h-full", "object-cover"];
pub const NAV_DESKTOP_TOKENS: &[&str] = &["hidden", "md:flex"];
pub const FOOTER_TOKENS: &[&str] = &["bg-nba-dark"];

// Backfill
pub const MIN_DETAIL_CHARS: usize = 50;
pub const TARGET_DETAIL_CHARS: usize = 300;
pub const MISSING_PREVIEW: usize = 10;

// Page fragments
pub const RELATED_COUNT: i64 = 3;
pub const CARD_SUMMARY_CHARS: usize = 19;
pub const QUOTE_CHARS: usize = 60;
pub const AVATAR_BASE: &str = "https://ui-avatars.com/api/";
pub const PICSUM_BASE: &str = "https://picsum.photos/id";
pub const HEADSHOT_BASE: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760";

// Translation
pub const DEEPL_URL: &str = "https://api-free.deepl.com/v2/translate";
pub const AZURE_API_VERSION: &str = "3.0";
pub const ENV_DEEPL_KEY: &str = "DEEPL_API_KEY";
pub const ENV_AZURE_KEY: &str = "AZURE_TRANSLATOR_KEY";
pub const ENV_AZURE_ENDPOINT: &str = "AZURE_TRANSLATOR_ENDPOINT";
pub const TRANSLATE_BATCH: usize = 50;
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("hoops_facts/", env!("CARGO_PKG_VERSION"));
