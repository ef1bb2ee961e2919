use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::store::TriviaStore;
use crate::shared::types::MessageResponse;

/// Service greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "home"
)]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::success("Home page"))
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Assemble the full application router over the given store
pub fn build_router(
    config: &AppConfig,
    swagger: &SwaggerConfig,
    store: Arc<dyn TriviaStore>,
) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&store)));
    let quiz_service = Arc::new(QuizService::new(store));

    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };
    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let docs = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    let api = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(categories_routes::routes(category_service))
        .merge(questions_routes::routes(question_service))
        .merge(quizzes_routes::routes(quiz_service));

    Router::new()
        .merge(docs)
        .merge(api)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(axum::middleware::map_response(
            middleware::access_control_headers,
        ))
        .layer(middleware::cors_layer(&config.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
