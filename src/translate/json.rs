// src/translate/json.rs
use crate::core::sanitize::has_chinese;
use crate::store::{ContentStore, FIELD_DETAIL, FIELD_TITLE};

use super::Translate;

const FIELDS: [&str; 2] = [FIELD_TITLE, FIELD_DETAIL];

/// Translate every Chinese `title` and `detail` in one pass.
/// Returns how many fields were sent for translation.
pub fn translate_store(store: &mut ContentStore, tr: &dyn Translate) -> usize {
    let mut texts = Vec::new();
    let mut slots = Vec::new();
    for (i, record) in store.records.iter().enumerate() {
        for field in FIELDS {
            if let Some(v) = record.text(field).filter(|v| has_chinese(v)) {
                texts.push(s!(v));
                slots.push((i, field));
            }
        }
    }
    if texts.is_empty() { return 0; }

    let translated = tr.translate(&texts);
    for ((i, field), value) in slots.into_iter().zip(translated) {
        store.records[i].set_text(field, value);
    }
    texts.len()
}
