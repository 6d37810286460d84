use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        content_service::ContentService, model_service::OllamaClient,
        video_service::YoutubeClient,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = Arc::new(OllamaClient::new(&config));
        let videos = Arc::new(YoutubeClient::new(&config));
        let content_service = Arc::new(ContentService::new(model, videos));

        Self {
            content_service,
            config: Arc::new(config),
        }
    }

    #[cfg(test)]
    pub fn with_content_service(content_service: Arc<ContentService>) -> Self {
        Self {
            content_service,
            config: Arc::new(Config::test_config()),
        }
    }
}
