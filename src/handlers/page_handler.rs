use actix_web::{get, web, HttpResponse};
use chrono::Local;

use crate::models::dto::request::ReportQuery;

fn page(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
async fn index() -> HttpResponse {
    page(include_str!("../../assets/index.html"))
}

#[get("/signup.html")]
async fn signup() -> HttpResponse {
    page(include_str!("../../assets/signup.html"))
}

#[get("/login")]
async fn login() -> HttpResponse {
    page(include_str!("../../assets/login.html"))
}

#[get("/streams")]
async fn streams() -> HttpResponse {
    page(include_str!("../../assets/streams.html"))
}

#[get("/streams11_12")]
async fn streams11_12() -> HttpResponse {
    page(include_str!("../../assets/streams11-12.html"))
}

#[get("/quiz")]
async fn quiz_page() -> HttpResponse {
    page(include_str!("../../assets/quiz.html"))
}

#[get("/modules")]
async fn modules_page() -> HttpResponse {
    page(include_str!("../../assets/modules.html"))
}

#[get("/final-assessment")]
async fn final_assessment_page() -> HttpResponse {
    page(include_str!("../../assets/final_assessment.html"))
}

#[get("/report")]
async fn report(query: web::Query<ReportQuery>) -> HttpResponse {
    let query = query.into_inner();
    let percentage = report_percentage(query.score, query.total);
    let current_date = Local::now().format("%B %d, %Y").to_string();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_report(
            &query.subject,
            &query.grade,
            query.score,
            query.total,
            percentage,
            &current_date,
        ))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn report_percentage(score: i64, total: i64) -> i64 {
    if total > 0 {
        ((score as f64 / total as f64) * 100.0).round() as i64
    } else {
        0
    }
}

fn render_report(
    subject: &str,
    grade: &str,
    score: i64,
    total: i64,
    percentage: i64,
    current_date: &str,
) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Performance Report</title>
  <style>
    body {{ font-family: 'Segoe UI', sans-serif; background: #f4f6fb; margin: 0; }}
    .card {{ max-width: 560px; margin: 4rem auto; background: #fff; border-radius: 12px;
             padding: 2rem; box-shadow: 0 4px 16px rgba(0,0,0,0.08); }}
    .score {{ font-size: 3rem; color: #3b5bdb; margin: 0.5rem 0; }}
    .meta {{ color: #666; }}
    a.button {{ display: inline-block; margin-top: 1.5rem; padding: 0.6rem 1.2rem;
                background: #3b5bdb; color: #fff; border-radius: 6px; text-decoration: none; }}
  </style>
</head>
<body>
  <div class="card">
    <h1>Performance Report</h1>
    <p class="meta">{subject} &middot; Grade {grade} &middot; {current_date}</p>
    <p class="score">{percentage}%</p>
    <p>You answered {score} out of {total} questions correctly.</p>
    <a class="button" href="/modules">Continue to modules</a>
  </div>
</body>
</html>"##
    )
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;
    use crate::test_utils::test_helpers;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn index_serves_html() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        test_helpers::assert_success_status(resp.status());
        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn report_renders_percentage() {
        let app = test::init_service(App::new().service(report)).await;

        let req = test::TestRequest::get()
            .uri("/report?score=7&total=10&subject=Science&grade=10")
            .to_request();

        let resp = test::call_service(&app, req).await;
        test_helpers::assert_success_status(resp.status());

        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("70%"));
        assert!(body.contains("7 out of 10"));
    }

    #[::core::prelude::v1::test]
    fn percentage_rounds_to_nearest_integer() {
        assert_eq!(report_percentage(7, 10), 70);
        assert_eq!(report_percentage(1, 3), 33);
        assert_eq!(report_percentage(2, 3), 67);
    }

    #[::core::prelude::v1::test]
    fn zero_total_yields_zero_percentage() {
        assert_eq!(report_percentage(0, 0), 0);
        assert_eq!(report_percentage(5, 0), 0);
    }
}
