use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{LearnerType, Module, ModuleOutline, ModuleStatus, QuizQuestion},
    services::{
        json_extract,
        model_service::CompletionModel,
        video_service::{VideoSearch, DEFAULT_MAX_RESULTS},
    },
};

/// Orchestrates prompt building, model calls, JSON extraction and video
/// enrichment for the generation endpoints. Holds no per-request state.
pub struct ContentService {
    model: Arc<dyn CompletionModel>,
    videos: Arc<dyn VideoSearch>,
}

impl ContentService {
    pub fn new(model: Arc<dyn CompletionModel>, videos: Arc<dyn VideoSearch>) -> Self {
        Self { model, videos }
    }

    pub async fn generate_quiz(
        &self,
        subject: &str,
        grade: &str,
    ) -> AppResult<Vec<QuizQuestion>> {
        let prompt = prompts::quiz_prompt(subject, grade);
        let completion = self.model.generate(&prompt).await?;

        let value = json_extract::extract_array(completion.trim())?;
        let questions: Vec<QuizQuestion> = serde_json::from_value(value)
            .map_err(|err| AppError::MalformedModelOutput(err.to_string()))?;

        Ok(questions)
    }

    pub async fn generate_modules(
        &self,
        subject: &str,
        grade: &str,
        score: i64,
    ) -> AppResult<(Vec<Module>, LearnerType)> {
        let learner_type = LearnerType::from_score(score);

        let prompt = prompts::modules_prompt(subject, grade, learner_type.label());
        let completion = self.model.generate(&prompt).await?;

        let value = json_extract::extract_array(completion.trim())?;
        let outlines: Vec<ModuleOutline> = serde_json::from_value(value)
            .map_err(|err| AppError::MalformedModelOutput(err.to_string()))?;

        let mut modules = Vec::with_capacity(outlines.len());
        for (index, outline) in outlines.into_iter().enumerate() {
            let query = if outline.topic.is_empty() {
                format!("{} Grade {}", subject, grade)
            } else {
                outline.topic.clone()
            };
            let youtube_videos = self.videos.search(&query, DEFAULT_MAX_RESULTS).await;

            // Exactly the first module of a batch starts unlocked.
            let status = if index == 0 {
                ModuleStatus::Unlocked
            } else {
                ModuleStatus::Locked
            };

            modules.push(Module::from_outline(outline, youtube_videos, status));
        }

        Ok((modules, learner_type))
    }

    /// Returns the extracted object verbatim, apart from the inserted
    /// `is_fallback: false` marker.
    pub async fn generate_final_assessment(
        &self,
        subject: &str,
        grade: &str,
        learner_type: &str,
    ) -> AppResult<Value> {
        let prompt = prompts::final_assessment_prompt(subject, grade, learner_type);
        let completion = self.model.generate(&prompt).await?;

        let mut value = json_extract::extract_object(completion.trim())?;
        if let Value::Object(map) = &mut value {
            map.insert("is_fallback".to_string(), Value::Bool(false));
        }

        Ok(value)
    }

    pub async fn chat(&self, message: &str, context: &str) -> AppResult<String> {
        let prompt = prompts::chat_prompt(context, message);
        let completion = self.model.generate(&prompt).await?;

        Ok(completion.trim().to_string())
    }
}
