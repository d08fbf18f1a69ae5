use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{
    http,
    translate::{MAX_CHUNK_CHARS, TranslateError, Translator},
};

/// Google's public web translation endpoint, with automatic source
/// language detection.
pub struct GoogleTranslate {
    client: Client,
    base_url: String,
}

impl GoogleTranslate {
    pub fn new() -> Self {
        Self {
            client: http::client(),
            base_url: "https://translate.googleapis.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let len = text.chars().count();
        if len > MAX_CHUNK_CHARS {
            return Err(TranslateError::TooLong {
                len,
                max: MAX_CHUNK_CHARS,
            });
        }

        let resp = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranslateError::Api { status, message });
        }

        let body = resp.json::<Value>().await?;
        parse_translation(&body)
    }
}

/// Concatenates the translated segments of a `translate_a/single` response.
fn parse_translation(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Malformed(truncate(body.to_string())))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

fn truncate(mut text: String) -> String {
    if let Some((idx, _)) = text.char_indices().nth(200) {
        text.truncate(idx);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_translation_joins_segments() {
        let body = json!([
            [
                ["Hallo Welt. ", "Hello world. ", null, null, 10],
                ["Wie geht's?", "How are you?", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&body).unwrap(), "Hallo Welt. Wie geht's?");
    }

    #[test]
    fn test_parse_translation_rejects_unexpected_shape() {
        let body = json!({"error": "quota"});
        assert!(matches!(
            parse_translation(&body),
            Err(TranslateError::Malformed(_))
        ));
    }
}
