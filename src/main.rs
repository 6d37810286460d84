use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use gurukul_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(handlers::generate_quiz)
            .service(handlers::generate_modules)
            .service(handlers::generate_final_assessment)
            .service(handlers::chat)
            .service(handlers::index)
            .service(handlers::signup)
            .service(handlers::login)
            .service(handlers::streams)
            .service(handlers::streams11_12)
            .service(handlers::quiz_page)
            .service(handlers::modules_page)
            .service(handlers::final_assessment_page)
            .service(handlers::report)
            .service(handlers::health_check)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
