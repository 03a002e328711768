use axum::{routing::post, Router};

use super::AppState;

mod message;
pub mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(route::contact))
}
