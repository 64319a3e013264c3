use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_secure: bool,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub to_email: String,
    pub from_email: String,
    pub subject_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtps.aruba.it".to_string());
        let smtp_port = env::var("SMTP_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(465);
        // Only an explicit `SMTP_SECURE=false` downgrades to STARTTLS
        let smtp_secure = env::var("SMTP_SECURE").map(|v| v == "true").unwrap_or(true);
        let smtp_user = env::var("SMTP_USER").unwrap_or_else(|_| "noreply@msstn.net".to_string());
        let smtp_pass = env::var("SMTP_PASS").unwrap_or_default();
        let to_email = env::var("TO_EMAIL").unwrap_or_else(|_| "lucifero@msstn.net".to_string());
        let from_email =
            env::var("FROM_EMAIL").unwrap_or_else(|_| "noreply@msstn.net".to_string());
        let subject_prefix = env::var("SUBJECT_PREFIX")
            .unwrap_or_else(|_| "[Sito MSS] Nuova richiesta contatto".to_string());

        Self {
            smtp_host,
            smtp_port,
            smtp_secure,
            smtp_user,
            smtp_pass,
            to_email,
            from_email,
            subject_prefix,
        }
    }
}
