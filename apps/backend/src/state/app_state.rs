use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::game::GameConfig;

/// Shared application state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for handler tests that never touch it).
    pub db: Option<DatabaseConnection>,
    /// JWT verification settings.
    pub security: SecurityConfig,
    /// Board limits and admin identity.
    pub game: GameConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, game: GameConfig) -> Self {
        Self {
            db: Some(db),
            security,
            game,
        }
    }

    /// State without a database connection, for tests that stay above the repo layer.
    pub fn without_db(security: SecurityConfig, game: GameConfig) -> Self {
        Self {
            db: None,
            security,
            game,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
