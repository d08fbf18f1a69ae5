//! # Watch page parsing
//!
//! Extracts the `ytInitialPlayerResponse` object embedded in a watch page and
//! the caption tracks it advertises.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::content::TranscriptError;

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)ytInitialPlayerResponse\s*=\s*(\{.+?\})\s*;\s*(?:var\s+meta\b|</script>)")
        .unwrap()
});

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// Speech-recognition tracks are marked with `kind: "asr"`.
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

pub struct WatchPage(String);

impl Deref for WatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for WatchPage {
    fn from(value: String) -> Self {
        WatchPage(value)
    }
}

impl WatchPage {
    pub fn player_response(&self) -> Result<Value, TranscriptError> {
        let json = PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str::<Value>(m.as_str()).ok());

        match json {
            Some(json) => Ok(json),
            None if self.contains("class=\"g-recaptcha\"") => Err(TranscriptError::Service(
                "YouTube is rate limiting requests from this address".into(),
            )),
            None => Err(TranscriptError::Service(
                "Failed to extract ytInitialPlayerResponse from the watch page".into(),
            )),
        }
    }
}

/// Reads the caption tracks out of a player response.
///
/// A response without a caption renderer means captions are disabled for
/// the video.
pub fn caption_tracks(
    video_id: &str,
    player: &Value,
) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let status = player["playabilityStatus"]["status"].as_str().unwrap_or("OK");
    if status != "OK" {
        let reason = player["playabilityStatus"]["reason"]
            .as_str()
            .unwrap_or("unknown reason");
        return Err(TranscriptError::Service(format!(
            "Video {video_id} is unplayable ({status}): {reason}"
        )));
    }

    let tracks = &player["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"];
    if tracks.is_null() {
        return Err(TranscriptError::Disabled(video_id.to_string()));
    }

    let tracks = serde_json::from_value::<Vec<CaptionTrack>>(tracks.clone())
        .map_err(|e| TranscriptError::Service(format!("Malformed caption tracks: {e}")))?;

    if tracks.is_empty() {
        return Err(TranscriptError::Disabled(video_id.to_string()));
    }

    Ok(tracks)
}

/// Picks the first track matching `languages` in order, preferring manually
/// created captions over generated ones for each language.
pub fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    languages: &[String],
) -> Option<&'a CaptionTrack> {
    languages.iter().find_map(|lang| {
        let matching = || tracks.iter().filter(move |t| &t.language_code == lang);
        matching()
            .find(|t| !t.is_generated())
            .or_else(|| matching().find(|t| t.is_generated()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(player: &str) -> WatchPage {
        WatchPage::from(format!(
            r#"<html><script nonce="abc">var ytInitialPlayerResponse = {player};var meta = document.createElement('meta');</script></html>"#
        ))
    }

    #[test]
    fn test_player_response_extraction() {
        let doc = page(r#"{"videoDetails": {"videoId": "abc"}, "text": "a };b"}"#);
        let json = doc.player_response().expect("player response");
        assert_eq!(json["videoDetails"]["videoId"], "abc");
        assert_eq!(json["text"], "a };b");
    }

    #[test]
    fn test_player_response_before_script_end() {
        let doc = WatchPage::from(
            r#"<script>var ytInitialPlayerResponse = {"key": 1};</script>"#.to_string(),
        );
        assert_eq!(doc.player_response().unwrap(), json!({"key": 1}));
    }

    #[test]
    fn test_missing_player_response() {
        let doc = WatchPage::from("<html><body>nothing</body></html>".to_string());
        assert!(matches!(
            doc.player_response(),
            Err(TranscriptError::Service(_))
        ));
    }

    #[test]
    fn test_captcha_page_is_reported() {
        let doc = WatchPage::from(r#"<div class="g-recaptcha"></div>"#.to_string());
        let err = doc.player_response().unwrap_err();
        assert!(err.to_string().contains("rate limiting"));
    }

    #[test]
    fn test_no_captions_means_disabled() {
        let player = json!({"playabilityStatus": {"status": "OK"}});
        assert!(matches!(
            caption_tracks("vid", &player),
            Err(TranscriptError::Disabled(_))
        ));
    }

    #[test]
    fn test_unplayable_video_is_service_error() {
        let player = json!({
            "playabilityStatus": {"status": "ERROR", "reason": "Video unavailable"}
        });
        let err = caption_tracks("vid", &player).unwrap_err();
        assert!(!err.is_missing_transcript());
        assert!(err.to_string().contains("Video unavailable"));
    }

    #[test]
    fn test_track_selection_prefers_manual_per_language() {
        let player = json!({
            "captions": {"playerCaptionsTracklistRenderer": {"captionTracks": [
                {"baseUrl": "https://x/asr-en", "languageCode": "en", "kind": "asr"},
                {"baseUrl": "https://x/de", "languageCode": "de"},
                {"baseUrl": "https://x/en", "languageCode": "en"}
            ]}}
        });
        let tracks = caption_tracks("vid", &player).unwrap();

        let en = select_track(&tracks, &["en".into()]).unwrap();
        assert_eq!(en.base_url, "https://x/en");

        let de_first = select_track(&tracks, &["fr".into(), "de".into(), "en".into()]).unwrap();
        assert_eq!(de_first.base_url, "https://x/de");

        assert!(select_track(&tracks, &["ja".into()]).is_none());
    }

    #[test]
    fn test_generated_track_used_when_no_manual() {
        let tracks = vec![CaptionTrack {
            base_url: "https://x/asr".into(),
            language_code: "en".into(),
            kind: Some("asr".into()),
        }];
        assert!(select_track(&tracks, &["en".into()]).unwrap().is_generated());
    }
}
