use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_base_url: String,
    pub model_name: String,
    pub youtube_api_key: SecretString,
    pub youtube_search_url: String,
    pub outbound_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            model_base_url: env::var("MODEL_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "mistral".to_string()),
            // Absence is not validated; video searches fail (to an empty
            // result list) at request time instead.
            youtube_api_key: SecretString::from(env::var("YOUTUBE_API_KEY").unwrap_or_default()),
            youtube_search_url: env::var("YOUTUBE_SEARCH_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3/search".to_string()),
            outbound_timeout_secs: env::var("OUTBOUND_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            model_base_url: "http://localhost:11434".to_string(),
            model_name: "mistral".to_string(),
            youtube_api_key: SecretString::from("test_api_key".to_string()),
            youtube_search_url: "https://www.googleapis.com/youtube/v3/search".to_string(),
            outbound_timeout_secs: 5,
        }
    }
}
