//! SMTP delivery via lettre

use anyhow::Result;
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};

use super::{MailMessage, Mailer};
use crate::core::AppConfig;

/// Sends mail through the configured SMTP relay. The transport is
/// rebuilt from immutable configuration on every send, so no
/// connection or credential state is shared across requests.
pub struct SmtpMailer {
    config: AppConfig,
}

impl SmtpMailer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport> {
        // `smtp_secure` selects implicit TLS (the provider default on
        // port 465) over STARTTLS
        let builder = if self.config.smtp_secure {
            SmtpTransport::relay(&self.config.smtp_host)?
        } else {
            SmtpTransport::starttls_relay(&self.config.smtp_host)?
        };

        let builder = builder.port(self.config.smtp_port);

        // An empty user or password means an unauthenticated relay
        let builder = if self.config.smtp_user.is_empty() || self.config.smtp_pass.is_empty() {
            builder
        } else {
            builder.credentials(Credentials::new(
                self.config.smtp_user.clone(),
                self.config.smtp_pass.clone(),
            ))
        };

        Ok(builder.build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        tracing::info!(to = %message.to, subject = %message.subject, "Sending email");

        let email = Message::builder()
            .from(message.from.parse()?)
            .to(message.to.parse()?)
            .reply_to(message.reply_to.parse()?)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                message.html.clone(),
            ))?;

        self.transport()?.send(&email)?;

        Ok(())
    }
}
