// src/translate/azure.rs
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::config::consts::AZURE_API_VERSION;
use crate::core::net::{post_json, NetError};

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    translations: Vec<Text>,
}

#[derive(Debug, Deserialize)]
struct Text {
    #[serde(default)]
    text: String,
}

pub fn endpoint_url(endpoint: &str) -> Result<Url, url::ParseError> {
    let base = format!("{}/translate", endpoint.trim_end_matches('/'));
    Url::parse_with_params(&base, &[("api-version", AZURE_API_VERSION), ("to", "en")])
}

/// One request; one reply item per input text, first translation wins.
pub fn translate(agent: &ureq::Agent, api_key: &str, endpoint: &str, texts: &[String]) -> Result<Vec<String>, NetError> {
    let url = endpoint_url(endpoint)?;
    let body = Value::Array(texts.iter().map(|t| json!({ "text": t })).collect());

    let reply: Vec<Item> = post_json(agent, url.as_str(), &[("Ocp-Apim-Subscription-Key", api_key)], &body)?;
    Ok(reply
        .into_iter()
        .map(|item| item.translations.into_iter().next().map(|t| t.text).unwrap_or_default())
        .collect())
}
