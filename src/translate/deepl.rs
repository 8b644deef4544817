// src/translate/deepl.rs
use serde::Deserialize;

use crate::config::consts::DEEPL_URL;
use crate::core::net::{post_form, NetError};

#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    translations: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    text: String,
}

/// One request; texts go as repeated `text` form fields.
pub fn translate(agent: &ureq::Agent, api_key: &str, texts: &[String]) -> Result<Vec<String>, NetError> {
    let auth = format!("DeepL-Auth-Key {api_key}");
    let mut form: Vec<(&str, &str)> = Vec::with_capacity(texts.len() + 1);
    form.push(("target_lang", "EN"));
    form.extend(texts.iter().map(|t| ("text", t.as_str())));

    let reply: Reply = post_form(agent, DEEPL_URL, &[("Authorization", auth.as_str())], &form)?;
    Ok(reply.translations.into_iter().map(|i| i.text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_shape() {
        let r: Reply = serde_json::from_str(r#"{"translations":[{"detected_source_language":"ZH","text":"Hello"}]}"#).unwrap();
        assert_eq!(r.translations[0].text, "Hello");
        let empty: Reply = serde_json::from_str("{}").unwrap();
        assert!(empty.translations.is_empty());
    }
}
