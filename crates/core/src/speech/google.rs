use async_trait::async_trait;
use reqwest::Client;

use crate::{
    http,
    speech::{SpeechEngine, SpeechError, SpeechRate},
};

/// Longest text the endpoint accepts in one request.
const MAX_PIECE_CHARS: usize = 100;

/// Google Translate's text-to-speech endpoint.
pub struct GoogleTts {
    client: Client,
    base_url: String,
}

impl GoogleTts {
    pub fn new() -> Self {
        Self {
            client: http::client(),
            base_url: "https://translate.google.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for GoogleTts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechEngine for GoogleTts {
    async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        rate: SpeechRate,
    ) -> Result<Vec<u8>, SpeechError> {
        let speed = match rate {
            SpeechRate::Slow => "0.3",
            SpeechRate::Normal => "1",
        };

        let pieces = split_pieces(text, MAX_PIECE_CHARS);
        let total = pieces.len().to_string();
        let mut audio = Vec::new();

        for (idx, piece) in pieces.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = piece.chars().count().to_string();

            let resp = self
                .client
                .get(format!("{}/translate_tts", self.base_url))
                .query(&[
                    ("ie", "UTF-8"),
                    ("q", piece.as_str()),
                    ("tl", lang),
                    ("client", "tw-ob"),
                    ("ttsspeed", speed),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                ])
                .send()
                .await?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let message = resp.text().await.unwrap_or_default();
                return Err(SpeechError::Api { status, message });
            }

            audio.extend_from_slice(&resp.bytes().await?);
        }

        Ok(audio)
    }
}

/// Splits text into pieces of at most `max_chars` characters, breaking at
/// whitespace where possible. Words longer than the limit are cut.
fn split_pieces(text: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();

        while word_len > max_chars {
            if current_len > 0 {
                pieces.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let cut = word
                .char_indices()
                .nth(max_chars)
                .map_or(word.len(), |(idx, _)| idx);
            pieces.push(word[..cut].to_string());
            word = &word[cut..];
            word_len -= max_chars;
        }

        if word_len == 0 {
            continue;
        }

        let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 {
        pieces.push(current);
    }

    pieces
}
