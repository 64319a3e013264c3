use std::sync::Arc;

use crate::core::AppConfig;
use crate::mail::Mailer;

pub struct AppState {
    pub config: AppConfig,
    // Mail transport collaborator, swapped for a recorder in tests
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }
}
