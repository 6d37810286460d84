use serde::{Deserialize, Serialize};

/// A single multiple-choice question as returned by the model. Fields are
/// serde-defaulted: model output is best-effort and a missing field must not
/// fail the whole generation request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
}
