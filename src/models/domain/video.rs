use serde::{Deserialize, Serialize};

/// Normalized reference to an external video, derived from one search API
/// item. Only constructed when the item carries both a video id and a
/// snippet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoRef {
    pub title: String,
    pub channel: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub embed_url: String,
}

impl VideoRef {
    pub fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", video_id)
    }

    pub fn embed_url(video_id: &str) -> String {
        format!("https://www.youtube.com/embed/{}", video_id)
    }
}
