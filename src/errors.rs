use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("Enrichment error: {0}")]
    Enrichment(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::ModelUnavailable("connection refused".into());
        assert_eq!(err.to_string(), "Model unavailable: connection refused");

        let err = AppError::MalformedModelOutput("no JSON array found".into());
        assert_eq!(
            err.to_string(),
            "Malformed model output: no JSON array found"
        );
    }
}
