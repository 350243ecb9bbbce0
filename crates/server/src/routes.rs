use std::sync::Arc;

use axum::{routing::get, Json, Router};
use configs::DocsConfig;
use service::user::{InMemoryUserRepository, UserRepository, UserService};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::{ApiDoc, HealthResponse};

pub mod users;

/// Shared handler state. The store is only reachable through the service.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService<dyn UserRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { users: UserService::new(repo) }
    }

    /// Empty process-lifetime store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()))
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: users resource, API description and optional docs viewer.
pub fn build_router(state: AppState, docs: &DocsConfig, serve_ui: bool, cors: CorsLayer) -> Router {
    let api_doc = Arc::new(ApiDoc::openapi());

    let users = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/", get(users::list))
        .route(
            "/users/:user_id",
            get(users::get)
                .put(users::update)
                .post(users::create_with_id)
                .delete(users::delete),
        )
        .with_state(state);

    let mut public = Router::new()
        .route("/health", get(health))
        .route(
            &docs.api_path,
            get(move || {
                let doc = api_doc.as_ref().clone();
                async move { Json(doc) }
            }),
        );
    if serve_ui {
        public = public.nest_service("/apidocs", ServeDir::new(&docs.ui_dir));
    }

    public
        .merge(users)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
