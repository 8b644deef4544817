// src/store.rs
//! The site's content store (`nba.json`): a JSON array of trivia records.
//!
//! Records are kept as ordered JSON objects so that fields this tool does not
//! know about, and the original key order, survive a rewrite.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub const FIELD_ID: &str = "id";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DETAIL: &str = "detail";
pub const FIELD_LOCAL_LINK: &str = "localLink";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self { Self(Map::new()) }

    /// Integer id, when the record has one that fits `i64`.
    /// Numeric strings count, as the site tooling has always accepted them.
    pub fn id(&self) -> Option<i64> {
        match self.0.get(FIELD_ID)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Id only when stored as a JSON integer.
    pub fn int_id(&self) -> Option<i64> {
        self.0.get(FIELD_ID).and_then(Value::as_i64)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn title(&self) -> &str { self.text(FIELD_TITLE).unwrap_or("") }
    pub fn detail(&self) -> Option<&str> { self.text(FIELD_DETAIL) }

    pub fn local_link(&self) -> Option<&str> {
        self.text(FIELD_LOCAL_LINK).filter(|s| !s.is_empty())
    }

    /// Set a string field, keeping its position if it already exists.
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(s!(field), Value::String(value.into()));
    }

    pub fn set_detail(&mut self, value: impl Into<String>) {
        self.set_text(FIELD_DETAIL, value);
    }

}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentStore {
    pub records: Vec<Record>,
}

impl ContentStore {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn by_id(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    pub fn max_id(&self) -> Option<i64> {
        self.records.iter().filter_map(Record::id).max()
    }

    /// Parse store text. `path` only labels errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| Error::json(path, e))?;
        let Value::Array(items) = value else {
            return Err(Error::shape(path, "expected a list of items"));
        };
        let mut records = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(m) => records.push(Record(m)),
                other => return Err(Error::shape(path, format!("item {i} is {}", kind_of(&other)))),
            }
        }
        Ok(Self { records })
    }

    /// Two-space indentation, non-ASCII written as-is.
    pub fn to_json(&self) -> String {
        // Serializing a Vec of string-keyed maps cannot fail
        serde_json::to_string_pretty(&self.records).unwrap_or_else(|_| s!("[]"))
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn load(path: &Path) -> Result<ContentStore> {
    if !path.exists() {
        return Err(Error::Missing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    ContentStore::parse(&text, path)
}

pub fn save(path: &Path, store: &ContentStore) -> Result<()> {
    fs::write(path, store.to_json()).map_err(|e| Error::io(path, e))
}

/// Copy `src` to `backup` unless a backup already exists.
/// Returns true when a new backup was written.
pub fn backup_once(src: &Path, backup: &Path) -> Result<bool> {
    if backup.exists() {
        return Ok(false);
    }
    fs::copy(src, backup).map_err(|e| Error::io(backup, e))?;
    logf!("Backup created at {}", backup.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
  {"id": 2, "title": "乔丹", "localLink": "nba_2.html", "views": 10},
  {"title": "no id", "id": "7"}
]"#;

    #[test]
    fn parses_records_and_accessors() {
        let store = ContentStore::parse(SAMPLE, Path::new("nba.json")).unwrap();
        assert_eq!(store.len(), 2);
        let first = &store.records[0];
        assert_eq!(first.id(), Some(2));
        assert_eq!(first.title(), "乔丹");
        assert_eq!(first.detail(), None);
        assert_eq!(first.local_link(), Some("nba_2.html"));
        assert_eq!(store.records[1].id(), Some(7));
        assert_eq!(first.int_id(), Some(2));
        assert_eq!(store.records[1].int_id(), None);
        assert_eq!(store.max_id(), Some(7));
    }

    #[test]
    fn rewrite_keeps_key_order_and_unicode() {
        let mut store = ContentStore::parse(SAMPLE, Path::new("nba.json")).unwrap();
        store.records[0].set_detail("细节");
        let out = store.to_json();
        let id = out.find("\"id\"").unwrap();
        let views = out.find("\"views\"").unwrap();
        let detail = out.find("\"detail\"").unwrap();
        assert!(id < views && views < detail);
        assert!(out.contains("细节"));
        assert!(out.contains("\n  {\n    \"id\": 2,"));
    }

    #[test]
    fn rejects_non_array() {
        let err = ContentStore::parse(r#"{"id": 1}"#, Path::new("nba.json")).unwrap_err();
        assert!(matches!(err, Error::StoreShape { .. }));
        let err = ContentStore::parse("[1]", Path::new("nba.json")).unwrap_err();
        assert!(err.to_string().contains("item 0 is a number"));
    }
}
