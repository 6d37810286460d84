use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::VideoRef,
};

pub const DEFAULT_MAX_RESULTS: u8 = 3;

/// Video enrichment source. Best-effort by contract: implementations recover
/// every failure to an empty list so enrichment can never fail the request
/// that asked for it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, topic: &str, max_results: u8) -> Vec<VideoRef>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: ItemId,
    snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default, rename = "channelTitle")]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    #[serde(default)]
    url: String,
}

/// Client for the YouTube Data v3 search endpoint.
pub struct YoutubeClient {
    http: reqwest::Client,
    search_url: String,
    api_key: SecretString,
    timeout: Duration,
}

impl YoutubeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            search_url: config.youtube_search_url.clone(),
            api_key: config.youtube_api_key.clone(),
            timeout: Duration::from_secs(config.outbound_timeout_secs),
        }
    }

    async fn request_search(
        &self,
        topic: &str,
        max_results: u8,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let max_results = max_results.to_string();
        self.http
            .get(&self.search_url)
            .timeout(self.timeout)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", topic),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await
    }

    async fn fetch(&self, topic: &str, max_results: u8) -> AppResult<Vec<VideoRef>> {
        let response = match self.request_search(topic, max_results).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Video search request failed, retrying once: {}", err);
                self.request_search(topic, max_results)
                    .await
                    .map_err(|e| AppError::Enrichment(e.to_string()))?
            }
        };

        let response = response
            .error_for_status()
            .map_err(|e| AppError::Enrichment(e.to_string()))?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Enrichment(e.to_string()))?;

        Ok(videos_from_items(body.items))
    }
}

/// Items missing a video id or snippet are skipped.
fn videos_from_items(items: Vec<SearchItem>) -> Vec<VideoRef> {
    items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            let snippet = item.snippet?;

            Some(VideoRef {
                title: snippet.title,
                channel: snippet.channel_title,
                thumbnail_url: snippet
                    .thumbnails
                    .medium
                    .map(|thumb| thumb.url)
                    .unwrap_or_default(),
                video_url: VideoRef::watch_url(&video_id),
                embed_url: VideoRef::embed_url(&video_id),
            })
        })
        .collect()
}

#[async_trait]
impl VideoSearch for YoutubeClient {
    async fn search(&self, topic: &str, max_results: u8) -> Vec<VideoRef> {
        match self.fetch(topic, max_results).await {
            Ok(videos) => videos,
            Err(err) => {
                log::warn!("Video search failed for '{}': {}", topic, err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_items(json: &str) -> Vec<SearchItem> {
        let body: SearchResponse = serde_json::from_str(json).unwrap();
        body.items
    }

    #[test]
    fn complete_item_maps_to_video_ref() {
        let items = parse_items(
            r#"{"items": [{
                "id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"},
                "snippet": {
                    "title": "Newton's Laws Explained",
                    "channelTitle": "Physics Hub",
                    "thumbnails": {"medium": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg"}}
                }
            }]}"#,
        );

        let videos = videos_from_items(items);
        assert_eq!(videos.len(), 1);

        let video = &videos[0];
        assert_eq!(video.title, "Newton's Laws Explained");
        assert_eq!(video.channel, "Physics Hub");
        assert_eq!(
            video.video_url,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(video.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn item_without_video_id_is_skipped() {
        let items = parse_items(
            r#"{"items": [
                {"id": {"kind": "youtube#channel"}, "snippet": {"title": "A channel"}},
                {"id": {"videoId": "abc123"}, "snippet": {"title": "Kept"}}
            ]}"#,
        );

        let videos = videos_from_items(items);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Kept");
    }

    #[test]
    fn item_without_snippet_is_skipped() {
        let items = parse_items(r#"{"items": [{"id": {"videoId": "abc123"}}]}"#);
        assert!(videos_from_items(items).is_empty());
    }

    #[test]
    fn missing_thumbnail_defaults_to_empty() {
        let items = parse_items(
            r#"{"items": [{"id": {"videoId": "abc123"}, "snippet": {"title": "No thumb"}}]}"#,
        );

        let videos = videos_from_items(items);
        assert_eq!(videos[0].thumbnail_url, "");
    }

    #[test]
    fn empty_body_parses_to_no_items() {
        assert!(videos_from_items(parse_items("{}")).is_empty());
    }
}
