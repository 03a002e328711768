use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use super::AppState;

pub fn router(assets_dir: &Path) -> Router<AppState> {
    Router::new().nest_service("/assets", ServeDir::new(assets_dir))
}
