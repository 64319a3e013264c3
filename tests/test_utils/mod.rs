//! Test utilities for integration tests
use std::sync::{Arc, Mutex, RwLock};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;

use contact_relay::api::AppState;
use contact_relay::api::app;
use contact_relay::core::AppConfig;
use contact_relay::mail::{MailMessage, Mailer};

/// Records every message handed to it instead of speaking SMTP. Flip
/// `fail` to simulate a transport outage.
pub struct RecordingMailer {
    pub sent: Mutex<Vec<MailMessage>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        smtp_host: String::from("smtp.test"),
        smtp_port: 465,
        smtp_secure: true,
        smtp_user: String::from("noreply@test"),
        smtp_pass: String::from("secret"),
        to_email: String::from("inbox@test"),
        from_email: String::from("noreply@test"),
        subject_prefix: String::from("[Test]"),
    }
}

/// Creates a test application router backed by a recording mailer.
/// Returns the mailer so tests can assert on dispatched messages.
pub fn test_app() -> (Router, Arc<RecordingMailer>) {
    test_app_with_mailer(RecordingMailer::new())
}

pub fn test_app_with_mailer(mailer: RecordingMailer) -> (Router, Arc<RecordingMailer>) {
    let mailer = Arc::new(mailer);
    let app_state = AppState::new(test_config(), mailer.clone());
    (app(Arc::new(RwLock::new(app_state))), mailer)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf8")
}
