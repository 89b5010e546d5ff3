use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod greeting;
pub mod students;
pub mod upstream;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: greetings, student CRUD and pass-through routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/hello", get(greeting::hello))
        .route("/greeting", get(greeting::greeting));

    let students = Router::new()
        .route("/students/all", get(students::list))
        .route("/students/create", post(students::create))
        .route("/students/update/:id", put(students::update))
        .route("/students/delete/:id", delete(students::delete))
        .route("/students/:id", get(students::get));

    let relays = Router::new()
        .route("/quote", get(upstream::quote))
        .route("/univ", get(upstream::universities))
        .route("/countries", get(upstream::countries));

    public
        .merge(students)
        .merge(relays)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
