use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Text-completion source for the generation endpoints. Mocked in handler
/// tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for a local Ollama-compatible `/api/generate` endpoint.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.model_base_url.clone(),
            model: config.model_name.clone(),
            timeout: Duration::from_secs(config.outbound_timeout_secs),
        }
    }

    async fn request_completion(
        &self,
        prompt: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.http
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.timeout)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await
    }
}

#[async_trait]
impl CompletionModel for OllamaClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        // One retry on transport failure; HTTP error statuses are not
        // retried.
        let response = match self.request_completion(prompt).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Inference request failed, retrying once: {}", err);
                self.request_completion(prompt)
                    .await
                    .map_err(|e| AppError::ModelUnavailable(e.to_string()))?
            }
        };

        let response = response
            .error_for_status()
            .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;

        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_wire_shape() {
        let request = GenerateRequest {
            model: "mistral",
            prompt: "Say hi",
            stream: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mistral");
        assert_eq!(json["prompt"], "Say hi");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn generate_response_reads_response_field() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"model": "mistral", "created_at": "2024-01-01T00:00:00Z", "response": "Hello!", "done": true}"#,
        )
        .unwrap();

        assert_eq!(body.response, "Hello!");
    }

    #[test]
    fn client_takes_endpoint_from_config() {
        let client = OllamaClient::new(&Config::test_config());
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.model, "mistral");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }
}
