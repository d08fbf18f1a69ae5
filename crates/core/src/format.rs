use crate::{history::HistoryEntry, translate::TranslationResult, video::VideoReference};

/// Render history newest first, numbered as in the order they were made.
pub fn format_history_readable(entries: &[HistoryEntry]) -> String {
    let mut output = String::new();

    for (i, entry) in entries.iter().enumerate().rev() {
        output.push_str(&format!("## Video {}: {}\n\n", i + 1, entry.youtube_link));
        if let Some(timestamp) = &entry.timestamp {
            output.push_str(&format!("**Date:** {}\n\n", timestamp));
        }
        if let Some(video) = VideoReference::resolve(&entry.youtube_link) {
            output.push_str(&format!("**Thumbnail:** {}\n\n", video.thumbnail_url()));
        }
        output.push_str("**Summary:**\n\n");
        output.push_str(entry.summary.trim());
        output.push_str("\n\n");
    }

    output
}

pub fn format_translation_readable(translation: &TranslationResult, language_name: &str) -> String {
    let mut output = format!("## Translated Summary ({})\n\n", language_name);
    if let TranslationResult::Degraded { reason, .. } = translation {
        output.push_str(&format!(
            "_Translation failed ({}), showing the original text._\n\n",
            reason
        ));
    }
    output.push_str(translation.text());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(link: &str, summary: &str, timestamp: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            youtube_link: link.into(),
            summary: summary.into(),
            timestamp: timestamp.map(Into::into),
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let entries = vec![
            entry("https://youtu.be/first", "one", Some("2025-01-01 10:00:00")),
            entry("not a link", "two", None),
        ];
        let out = format_history_readable(&entries);

        let second = out.find("## Video 2: not a link").unwrap();
        let first = out.find("## Video 1: https://youtu.be/first").unwrap();
        assert!(second < first);
        assert!(out.contains("**Date:** 2025-01-01 10:00:00"));
        assert!(out.contains("https://img.youtube.com/vi/first/0.jpg"));
        assert_eq!(out.matches("**Thumbnail:**").count(), 1);
    }

    #[test]
    fn test_degraded_translation_is_flagged() {
        let degraded = TranslationResult::Degraded {
            text: "original".into(),
            language: "de".into(),
            reason: "timeout".into(),
        };
        let out = format_translation_readable(&degraded, "German");
        assert!(out.starts_with("## Translated Summary (German)"));
        assert!(out.contains("Translation failed (timeout)"));
        assert!(out.ends_with("original\n"));
    }
}
