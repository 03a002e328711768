use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use super::{message, schema};
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::contact::ContactRequest,
    email::SendError,
};

/// Relay a visitor's message to the owner and confirm receipt to the visitor.
///
/// The body is read as JSON whatever its `Content-Type`: browsers posting a bare
/// `JSON.stringify` send it as `text/plain`.
#[tracing::instrument(name = "Relay contact message", skip(state, payload))]
pub async fn contact(
    State(state): State<AppState>,
    payload: Bytes,
) -> AppResult<Json<schema::ContactResponse>> {
    let body: Value =
        serde_json::from_slice(&payload).map_err(|e| AppError::unexpected(e, state.mode))?;

    let request = ContactRequest::try_from(schema::ContactForm::from_json(body))
        .map_err(AppError::ValidationError)?;

    tracing::info!(
        sender_name = %request.name(),
        sender_email = %request.email(),
        "relaying contact message"
    );

    let notification = message::notification(&state.sender, &request)
        .map_err(|e| AppError::unexpected(e, state.mode))?;
    let acknowledgment = message::acknowledgment(
        &state.sender,
        &state.owner,
        &state.portfolio.personal_info,
        &request,
    )
    .map_err(|e| AppError::unexpected(e, state.mode))?;

    state
        .email_transport
        .send(&notification)
        .await
        .map_err(|e| log_failure(e, "notification"))
        .map_err(|e| AppError::unexpected(e, state.mode))?;

    state
        .email_transport
        .send(&acknowledgment)
        .await
        .map_err(|e| log_failure(e, "acknowledgment"))
        .map_err(|e| AppError::unexpected(e, state.mode))?;

    tracing::info!("contact message delivered");
    Ok(Json(schema::ContactResponse::delivered()))
}

fn log_failure(error: SendError, kind: &str) -> SendError {
    tracing::error!(detail = %error, "failed to send the {} email", kind);
    error
}
