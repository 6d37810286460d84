use actix_web::{post, web, HttpResponse};
use serde_json::json;

use crate::{
    app_state::AppState,
    models::{
        domain::FinalAssessment,
        dto::{
            request::{
                ChatRequest, GenerateFinalAssessmentRequest, GenerateModulesRequest,
                GenerateQuizRequest,
            },
            response::{ChatResponse, ModulesResponse, QuizResponse},
        },
    },
};

// Failure shaping is per-endpoint and deliberate: quiz/modules/chat answer
// 500 with an empty collection of the expected shape, the final assessment
// answers 200 with an is_fallback placeholder. Front-end rendering depends
// on the distinction.

#[post("/generate-quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    match state
        .content_service
        .generate_quiz(&request.subject, &request.grade)
        .await
    {
        Ok(questions) => HttpResponse::Ok().json(QuizResponse { questions }),
        Err(err) => {
            log::error!("Quiz generation failed: {}", err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": err.to_string(), "questions": [] }))
        }
    }
}

#[post("/generate-modules")]
async fn generate_modules(
    state: web::Data<AppState>,
    request: web::Json<GenerateModulesRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    match state
        .content_service
        .generate_modules(&request.subject, &request.grade, request.score)
        .await
    {
        Ok((modules, learner_type)) => HttpResponse::Ok().json(ModulesResponse {
            modules,
            learner_type: learner_type.label().to_string(),
        }),
        Err(err) => {
            log::error!("Module generation failed: {}", err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": err.to_string(), "modules": [] }))
        }
    }
}

#[post("/generate-final-assessment")]
async fn generate_final_assessment(
    state: web::Data<AppState>,
    request: web::Json<GenerateFinalAssessmentRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    match state
        .content_service
        .generate_final_assessment(&request.subject, &request.grade, &request.learner_type)
        .await
    {
        Ok(assessment) => HttpResponse::Ok().json(assessment),
        Err(err) => {
            log::error!("Final assessment generation failed: {}", err);
            HttpResponse::Ok().json(FinalAssessment::fallback(&request.subject, &request.grade))
        }
    }
}

#[post("/chat")]
async fn chat(state: web::Data<AppState>, request: web::Json<ChatRequest>) -> HttpResponse {
    let request = request.into_inner();

    match state
        .content_service
        .chat(&request.message, &request.context)
        .await
    {
        Ok(reply) => HttpResponse::Ok().json(ChatResponse { reply }),
        Err(err) => {
            log::error!("Chat failed: {}", err);
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}
