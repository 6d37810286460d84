use serde::{Deserialize, Serialize};

use crate::models::domain::VideoRef;

/// Shape of one module as emitted by the model: topic, description and key
/// points only. All fields serde-defaulted, same best-effort stance as quiz
/// questions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleOutline {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Locked,
    Unlocked,
}

/// A learning module as served to the front end: the generated outline plus
/// video enrichment and an unlock status.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Module {
    pub topic: String,
    pub description: String,
    pub key_points: Vec<String>,
    pub youtube_videos: Vec<VideoRef>,
    pub status: ModuleStatus,
}

impl Module {
    pub fn from_outline(
        outline: ModuleOutline,
        youtube_videos: Vec<VideoRef>,
        status: ModuleStatus,
    ) -> Self {
        Module {
            topic: outline.topic,
            description: outline.description,
            key_points: outline.key_points,
            youtube_videos,
            status,
        }
    }
}
