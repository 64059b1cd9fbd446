use std::env;

use crate::error::AppError;

/// Board limits and admin identity, resolved once at startup and passed into
/// the services that enforce them. Nothing reads these from the environment
/// after construction, so tests can build arbitrary configurations directly.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Upper bound on roster size.
    pub max_players: u64,
    /// Lowest board position a player may occupy.
    pub min_position: i32,
    /// Highest board position a player may occupy.
    pub max_position: i32,
    /// Number of task slots; ids run 1..=max_tasks.
    pub max_tasks: i32,
    /// The only identity allowed past the admin gate.
    pub admin_username: String,
    /// Where the admin gate redirects rejected identities.
    pub admin_login_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: 6,
            min_position: 1,
            max_position: 20,
            max_tasks: 20,
            admin_username: "admin".to_string(),
            admin_login_path: "/admin/login".to_string(),
        }
    }
}

impl GameConfig {
    /// Resolve the configuration from the environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            max_players: parse_var("MAX_PLAYERS", defaults.max_players)?,
            min_position: parse_var("MIN_PLAYER_POSITION", defaults.min_position)?,
            max_position: parse_var("MAX_PLAYER_POSITION", defaults.max_position)?,
            max_tasks: parse_var("MAX_TASKS_COUNT", defaults.max_tasks)?,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_login_path: env::var("ADMIN_LOGIN_PATH").unwrap_or(defaults.admin_login_path),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("Invalid value for '{name}': '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::GameConfig;

    #[test]
    #[serial]
    fn defaults_match_board_limits() {
        let config = GameConfig::default();
        assert_eq!(config.max_players, 6);
        assert_eq!(config.min_position, 1);
        assert_eq!(config.max_position, 20);
        assert_eq!(config.max_tasks, 20);
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_login_path, "/admin/login");
    }

    #[test]
    #[serial]
    fn from_env_overrides_defaults() {
        env::set_var("MAX_PLAYERS", "4");
        env::set_var("MAX_TASKS_COUNT", "10");
        env::set_var("ADMIN_USERNAME", "gamemaster");

        let config = GameConfig::from_env().unwrap();
        assert_eq!(config.max_players, 4);
        assert_eq!(config.max_tasks, 10);
        assert_eq!(config.admin_username, "gamemaster");
        assert_eq!(config.min_position, 1);

        env::remove_var("MAX_PLAYERS");
        env::remove_var("MAX_TASKS_COUNT");
        env::remove_var("ADMIN_USERNAME");
    }

    #[test]
    #[serial]
    fn from_env_rejects_garbage() {
        env::set_var("MAX_PLAYERS", "lots");
        let result = GameConfig::from_env();
        assert!(result.is_err());
        env::remove_var("MAX_PLAYERS");
    }
}
