//! Router for the contact API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use http::{HeaderValue, StatusCode, header};

use super::public::{ContactRequest, ContactResponse};
use super::validate::{ValidationResult, validate};
use crate::api::state::AppState;
use crate::mail;

type SharedState = Arc<RwLock<AppState>>;

/// Handle a contact form submission
async fn submit_contact(State(state): State<SharedState>, body: Bytes) -> Response {
    // A malformed body decodes to an empty submission which then fails
    // validation; the JSON layer never rejects on its own
    let request: ContactRequest = serde_json::from_slice(&body).unwrap_or_default();

    let submission = match validate(&request) {
        ValidationResult::Spam => {
            // Decoy success so automated senders learn nothing
            tracing::info!("Honeypot triggered, suppressing submission");
            return (StatusCode::OK, Json(ContactResponse::accepted())).into_response();
        }
        ValidationResult::Invalid => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::rejected("Invalid input")),
            )
                .into_response();
        }
        ValidationResult::Valid(submission) => submission,
    };

    let (message, mailer) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            mail::contact_notification(&submission, &shared_state.config),
            Arc::clone(&shared_state.mailer),
        )
    };

    match mailer.send(&message).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::accepted())).into_response(),
        Err(err) => {
            tracing::error!("Email send failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::rejected("Email send failed")),
            )
                .into_response()
        }
    }
}

/// Reject anything but POST, advertising the allowed method
async fn reject_method() -> Response {
    let mut response = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ContactResponse::rejected("Method Not Allowed")),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST"));
    response
}

/// Create the contact router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/",
        axum::routing::post(submit_contact).fallback(reject_method),
    )
}
