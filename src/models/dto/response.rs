use serde::Serialize;

use crate::models::domain::{Module, QuizQuestion};

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct ModulesResponse {
    pub modules: Vec<Module>,
    pub learner_type: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
