use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::ScrapeError;

pub const NEXT_DATA_SCRIPT_ID: &str = "__NEXT_DATA__";

/// Pulls the JSON payload a server-rendered page embeds in `<script id="__NEXT_DATA__">`.
pub fn extract_next_data(html_content: &str) -> Result<Value, ScrapeError> {
    let html_document = Html::parse_document(html_content);
    let script_selector =
        Selector::parse(r#"script[id="__NEXT_DATA__"]"#).expect("Static selector is valid");

    let Some(script_tag) = html_document.select(&script_selector).next() else {
        log::error!("Couldn't find the '{}' script tag.", NEXT_DATA_SCRIPT_ID);
        return Err(ScrapeError::MissingScriptTag);
    };

    let payload: String = script_tag.text().collect();

    serde_json::from_str(&payload).map_err(|e| {
        log::error!("Failed to parse JSON data: {}", e);
        ScrapeError::MalformedJson(e.to_string())
    })
}
