pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::ServerConfig;
use crate::services::storage::DiskStorage;
use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::uploads::upload_single_file,
        handlers::uploads::upload_multiple_files,
        handlers::uploads::upload_img,
    ),
    components(
        schemas(
            models::UploadedFile,
        )
    ),
    tags(
        (name = "uploads", description = "Multipart file upload endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<DiskStorage>,
    pub config: ServerConfig,
}

pub fn create_app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(
            "/upload-single-file",
            post(handlers::uploads::upload_single_file),
        )
        .route(
            "/upload-multiple-files",
            post(handlers::uploads::upload_multiple_files),
        )
        .route("/upload-img", post(handlers::uploads::upload_img))
        .fallback_service(static_files)
        .with_state(state)
}
