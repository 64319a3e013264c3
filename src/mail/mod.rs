//! Outgoing mail composition and dispatch

use anyhow::Result;
use async_trait::async_trait;

use crate::api::routes::contact::validate::ContactSubmission;
use crate::core::AppConfig;

pub mod smtp;

/// A fully composed outgoing email. Built per request, discarded after
/// hand-off to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub reply_to: String,
    pub text: String,
    pub html: String,
}

/// Compose the notification email for a validated submission. Replies
/// go to the submitter, not the from-address.
pub fn contact_notification(submission: &ContactSubmission, config: &AppConfig) -> MailMessage {
    let ContactSubmission {
        fullname,
        email,
        message,
    } = submission;

    let html = format!(
        "<h3>Nuovo messaggio dal form contatti</h3>\n\
         <p><strong>Nome:</strong> {fullname}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Messaggio:</strong></p>\n\
         <p>{}</p>",
        message.replace('\n', "<br/>")
    );

    MailMessage {
        from: config.from_email.clone(),
        to: config.to_email.clone(),
        subject: format!("{} - {}", config.subject_prefix, fullname),
        reply_to: email.clone(),
        text: format!("Nome: {fullname}\nEmail: {email}\n\nMessaggio:\n{message}"),
        html,
    }
}

/// Hand-off seam to the mail transport. Production speaks SMTP, tests
/// record the messages instead.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<()>;
}
