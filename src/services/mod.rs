pub mod content_service;
pub mod json_extract;
pub mod model_service;
pub mod video_service;
