use serde::Deserialize;

fn default_subject() -> String {
    "Science".to_string()
}

fn default_grade() -> String {
    "10".to_string()
}

fn default_learner_type() -> String {
    "Intermediate Learner".to_string()
}

// No validation beyond defaulting: absent fields take the defaults and the
// model sees whatever the client sent.

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuizRequest {
    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_grade")]
    pub grade: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateModulesRequest {
    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_grade")]
    pub grade: String,

    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateFinalAssessmentRequest {
    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_grade")]
    pub grade: String,

    #[serde(default = "default_learner_type")]
    pub learner_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub score: i64,

    #[serde(default)]
    pub total: i64,

    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_grade")]
    pub grade: String,
}
