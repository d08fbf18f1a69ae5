//! # Video references
//!
//! Turns the many URL shapes a YouTube video can be shared under into the
//! bare video id the rest of the pipeline works with.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Recognized URL shapes, tried in order. The id runs up to the first
/// `&`, `?`, `/`, `#` or whitespace.
static URL_SHAPES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    let id = r"([^&?/#\s]+)";
    [
        shape(&format!(r"youtube\.com/watch\?v={id}")),
        shape(&format!(r"youtu\.be/{id}")),
        shape(&format!(r"youtube\.com/shorts/{id}")),
        shape(&format!(r"youtube\.com/embed/{id}")),
        shape(&format!(r"youtube\.com/v/{id}")),
    ]
});

fn shape(pattern: &str) -> Regex {
    Regex::new(pattern).expect("video URL pattern is valid")
}

/// Canonical identifier of a video, extracted from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoReference(String);

impl VideoReference {
    const THUMBNAIL_BASE_URL: &str = "https://img.youtube.com/vi";
    const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";

    /// Extracts the video id from `url`, or `None` when no known shape matches.
    pub fn resolve(url: &str) -> Option<Self> {
        URL_SHAPES.iter().find_map(|re| {
            re.captures(url)
                .and_then(|cap| cap.get(1))
                .map(|m| VideoReference(m.as_str().to_string()))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{}/{}/0.jpg", Self::THUMBNAIL_BASE_URL, self.0)
    }

    pub fn watch_url(&self) -> String {
        format!("{}?v={}", Self::WATCH_BASE_URL, self.0)
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
