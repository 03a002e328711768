use axum::{extract::State, routing::get, Json, Router};

use super::AppState;
use crate::domain::portfolio::Portfolio;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/portfolio", get(portfolio))
}

#[tracing::instrument(name = "Portfolio content", skip(state))]
pub async fn portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}
