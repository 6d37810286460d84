use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssessmentQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// Final assessment payload. The success path passes the model's JSON object
/// through verbatim; this struct backs the placeholder returned when
/// generation fails, flagged via `is_fallback`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FinalAssessment {
    pub quiz_title: String,
    pub subject: String,
    pub grade: String,
    pub questions: Vec<AssessmentQuestion>,
    pub is_fallback: bool,
}

impl FinalAssessment {
    pub fn fallback(subject: &str, grade: &str) -> Self {
        FinalAssessment {
            quiz_title: format!("Sample {} Assessment", subject),
            subject: subject.to_string(),
            grade: grade.to_string(),
            questions: Vec::new(),
            is_fallback: true,
        }
    }
}
