//! Stage 1: hermetic [`AppState`] over migrated in-memory SQLite.

use crate::config::game::GameConfig;
use crate::error::AppError;
use crate::infra::db::connect_sqlite_memory;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// State with default limits and the test signing secret.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_test_state_with_game(GameConfig::default()).await
}

/// State with custom limits, for cap and range tests.
pub async fn build_test_state_with_game(game: GameConfig) -> Result<AppState, AppError> {
    let db = connect_sqlite_memory().await?;
    Ok(AppState::new(db, SecurityConfig::default(), game))
}
