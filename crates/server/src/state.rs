use crate::{auth::TokenVerifier, config::AppConfig};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared handles passed to every request handler.
///
/// The database connection is created once at startup and injected here; nothing
/// else in the server holds global state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let verifier = TokenVerifier::new(&config.jwt);

        Self {
            db,
            config: Arc::new(config),
            verifier: Arc::new(verifier),
        }
    }
}
