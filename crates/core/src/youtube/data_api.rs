use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    content::{MetadataError, MetadataSource, VideoSnippet},
    http,
    video::VideoReference,
};

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: VideoSnippetResource,
}

#[derive(Debug, Deserialize)]
struct VideoSnippetResource {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

/// YouTube Data API v3 client, used for video titles and descriptions.
pub struct YouTubeDataApi {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeDataApi {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: http::client(),
            api_key,
            base_url: "https://www.googleapis.com/youtube/v3".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl MetadataSource for YouTubeDataApi {
    #[tracing::instrument(skip(self))]
    async fn snippet(&self, video: &VideoReference) -> Result<VideoSnippet, MetadataError> {
        let api_key = self.api_key.as_deref().ok_or(MetadataError::MissingApiKey)?;

        let resp = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[("part", "snippet"), ("id", video.as_str()), ("key", api_key)])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(MetadataError::Api { status, message });
        }

        let list = resp.json::<VideoListResponse>().await?;
        let item = list
            .items
            .into_iter()
            .next()
            .ok_or_else(|| MetadataError::VideoNotFound(video.to_string()))?;

        Ok(VideoSnippet {
            title: item.snippet.title,
            description: item.snippet.description,
        })
    }
}
