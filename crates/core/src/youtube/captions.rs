use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use crate::{
    content::{TranscriptError, TranscriptSnippet, TranscriptSource},
    http,
    video::VideoReference,
    youtube::player::{WatchPage, caption_tracks, select_track},
};

static TIMED_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<text\b([^>]*)>(.*?)</text>"#).unwrap()
});
static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(start|dur)="([^"]*)""#).unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap());

/// Transcript source backed by the caption tracks listed on a video's
/// watch page.
pub struct WatchPageTranscripts {
    client: Client,
    languages: Vec<String>,
}

impl WatchPageTranscripts {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            client: http::client(),
            languages,
        }
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video: &VideoReference) -> Result<WatchPage, TranscriptError> {
        let html = self
            .client
            .get(video.watch_url())
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(html.into())
    }
}

impl Default for WatchPageTranscripts {
    fn default() -> Self {
        Self::new(vec!["en".to_string()])
    }
}

#[async_trait]
impl TranscriptSource for WatchPageTranscripts {
    async fn fetch(
        &self,
        video: &VideoReference,
    ) -> Result<Vec<TranscriptSnippet>, TranscriptError> {
        let page = self.fetch_watch_page(video).await?;
        let player = page.player_response()?;
        let tracks = caption_tracks(video.as_str(), &player)?;

        let track = select_track(&tracks, &self.languages).ok_or_else(|| {
            TranscriptError::NotFound {
                video_id: video.to_string(),
                languages: self.languages.clone(),
            }
        })?;
        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        let xml = self
            .client
            .get(track.base_url.replace("&fmt=srv3", ""))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if xml.trim().is_empty() {
            return Err(TranscriptError::Service(
                "Caption track returned an empty document".into(),
            ));
        }

        Ok(parse_timed_text(&xml))
    }
}

/// Parses a timed-text XML document into snippets, dropping empty ones.
pub fn parse_timed_text(xml: &str) -> Vec<TranscriptSnippet> {
    TIMED_TEXT_RE
        .captures_iter(xml)
        .filter_map(|cap| {
            let attrs = cap.get(1).map_or("", |m| m.as_str());
            let raw = cap.get(2).map_or("", |m| m.as_str());

            // timed text is XML-escaped and then HTML-escaped again
            let text = unescape_entities(&unescape_entities(raw));
            let text = TAG_RE.replace_all(&text, "").trim().to_string();
            if text.is_empty() {
                return None;
            }

            let mut start = 0.0;
            let mut duration = 0.0;
            for attr in ATTR_RE.captures_iter(attrs) {
                let value = attr[2].parse::<f64>().unwrap_or(0.0);
                match &attr[1] {
                    "start" => start = value,
                    _ => duration = value,
                }
            }

            Some(TranscriptSnippet {
                text,
                start,
                duration,
            })
        })
        .collect()
}

pub fn unescape_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |cap: &regex::Captures| {
            let entity = &cap[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ if entity.starts_with("#x") || entity.starts_with("#X") => {
                    u32::from_str_radix(&entity[2..], 16).ok().and_then(char::from_u32)
                }
                _ if entity.starts_with('#') => {
                    entity[1..].parse::<u32>().ok().and_then(char::from_u32)
                }
                _ => None,
            };
            decoded.map_or_else(|| cap[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}
