//! Contact form submission client
//!
//! Mirrors the site's form handler: serialize the form, short-circuit
//! on the honeypot, POST to the endpoint, then toggle the success or
//! error region from the outcome.

use std::collections::HashMap;

use reqwest::StatusCode;

pub mod form;

use form::serialize;
pub use form::{ContactForm, FormUi};

/// What a single submission attempt resolved to. The UI transition is
/// a pure function of this value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmissionOutcome {
    Success,
    SpamSuppressed,
    ValidationFailed,
    TransportFailed,
}

pub struct SubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Submit the form. Never fails: every network or protocol error is
    /// folded into the outcome and rendered as UI state.
    pub async fn submit(&self, form: &mut ContactForm) {
        form.ui.success_visible = false;
        form.ui.error_visible = false;

        let Some(payload) = serialize(form) else {
            // Honeypot triggered: pretend the submission worked so
            // automated senders learn nothing, and skip the network
            apply_outcome(form, SubmissionOutcome::SpamSuppressed);
            return;
        };

        form.ui.submit_busy = true;
        let outcome = self.post(form.endpoint(), &payload).await;
        form.ui.submit_busy = false;

        apply_outcome(form, outcome);
    }

    async fn post(&self, endpoint: &str, payload: &HashMap<String, String>) -> SubmissionOutcome {
        let url = format!("{}{}", self.base_url, endpoint);

        match self.http.post(&url).json(payload).send().await {
            Ok(response) if response.status().is_success() => SubmissionOutcome::Success,
            Ok(response) if response.status() == StatusCode::BAD_REQUEST => {
                SubmissionOutcome::ValidationFailed
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Contact submission rejected");
                SubmissionOutcome::TransportFailed
            }
            Err(err) => {
                tracing::warn!("Contact submission failed: {}", err);
                SubmissionOutcome::TransportFailed
            }
        }
    }
}

/// Derive the visible UI state from a submission outcome. Failures
/// leave the field values in place so the user can retry without
/// retyping.
fn apply_outcome(form: &mut ContactForm, outcome: SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Success | SubmissionOutcome::SpamSuppressed => {
            form.ui.success_visible = true;
            form.reset();
        }
        SubmissionOutcome::ValidationFailed | SubmissionOutcome::TransportFailed => {
            form.ui.error_visible = true;
        }
    }
}
