//! Roster management.
//!
//! All limits come from the [`GameConfig`] the service is constructed with;
//! nothing here reads the environment.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::config::game::GameConfig;
use crate::db::locks;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::players::{self, Player};

/// Maximum characters in a player name, matching the column length.
const NAME_MAX_CHARS: usize = 100;

/// Roster domain service.
pub struct PlayersService {
    config: GameConfig,
}

impl PlayersService {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// All players in board order.
    pub async fn list(&self, txn: &DatabaseTransaction) -> Result<Vec<Player>, DomainError> {
        players::find_all(txn).await
    }

    /// Whether another player would still fit under the cap.
    pub async fn can_add(&self, txn: &DatabaseTransaction) -> Result<bool, DomainError> {
        Ok(players::count(txn).await? < self.config.max_players)
    }

    /// Add a player. Writers serialize on the roster lock so the cap check
    /// and the insert observe the same roster.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        name: &str,
        position: i32,
    ) -> Result<Player, DomainError> {
        self.validate_name(name)?;
        self.validate_position(position)?;

        locks::lock_roster(txn).await?;
        let count = players::count(txn).await?;
        if count >= self.config.max_players {
            return Err(DomainError::validation(
                ValidationKind::RosterFull,
                format!("Maximum number of players is {}", self.config.max_players),
            ));
        }

        let player = players::create_player(txn, name.trim(), position).await?;
        info!(player_id = player.id, position, "player added");
        Ok(player)
    }

    /// Rename or move an existing player. The cap is re-checked against the
    /// other players so an over-full roster cannot be laundered through update.
    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
        name: &str,
        position: i32,
    ) -> Result<Player, DomainError> {
        self.validate_name(name)?;
        self.validate_position(position)?;

        players::require_player(txn, id).await?;
        let others = players::count_excluding(txn, id).await?;
        if others >= self.config.max_players {
            return Err(DomainError::validation(
                ValidationKind::RosterFull,
                format!("Maximum number of players is {}", self.config.max_players),
            ));
        }

        let player = players::update_player(txn, id, name.trim(), position).await?;
        info!(player_id = player.id, position, "player updated");
        Ok(player)
    }

    pub async fn delete(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DomainError> {
        players::require_player(txn, id).await?;
        players::delete_player(txn, id).await?;
        info!(player_id = id, "player removed");
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "Name must not be empty",
            ));
        }
        if trimmed.chars().count() > NAME_MAX_CHARS {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                format!("Name must be at most {NAME_MAX_CHARS} characters"),
            ));
        }
        Ok(())
    }

    fn validate_position(&self, position: i32) -> Result<(), DomainError> {
        if position < self.config.min_position || position > self.config.max_position {
            return Err(DomainError::validation(
                ValidationKind::PositionOutOfRange,
                format!(
                    "Position must be between {} and {}",
                    self.config.min_position, self.config.max_position
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::errors::domain::{DomainError, ValidationKind};

    fn service() -> PlayersService {
        PlayersService::new(GameConfig::default())
    }

    #[test]
    fn position_bounds_are_inclusive() {
        let svc = service();
        assert!(svc.validate_position(1).is_ok());
        assert!(svc.validate_position(20).is_ok());
        assert!(matches!(
            svc.validate_position(0),
            Err(DomainError::Validation(ValidationKind::PositionOutOfRange, _))
        ));
        assert!(matches!(
            svc.validate_position(21),
            Err(DomainError::Validation(ValidationKind::PositionOutOfRange, _))
        ));
    }

    #[test]
    fn blank_name_is_rejected() {
        let svc = service();
        assert!(matches!(
            svc.validate_name("   "),
            Err(DomainError::Validation(ValidationKind::InvalidName, _))
        ));
        assert!(svc.validate_name("Ada").is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let svc = service();
        let long = "x".repeat(101);
        assert!(matches!(
            svc.validate_name(&long),
            Err(DomainError::Validation(ValidationKind::InvalidName, _))
        ));
        assert!(svc.validate_name(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn custom_range_is_respected() {
        let svc = PlayersService::new(GameConfig {
            min_position: 5,
            max_position: 8,
            ..GameConfig::default()
        });
        assert!(svc.validate_position(5).is_ok());
        assert!(svc.validate_position(4).is_err());
        assert!(svc.validate_position(9).is_err());
    }

    proptest! {
        /// Every position on the board is accepted.
        #[test]
        fn prop_positions_on_board_accepted(position in 1i32..=20) {
            prop_assert!(service().validate_position(position).is_ok());
        }

        /// Everything off the board is rejected with PositionOutOfRange.
        #[test]
        fn prop_positions_off_board_rejected(position in prop_oneof![i32::MIN..=0, 21..=i32::MAX]) {
            let result = service().validate_position(position);
            prop_assert!(matches!(
                result,
                Err(DomainError::Validation(ValidationKind::PositionOutOfRange, _))
            ));
        }

        /// Name validation counts characters after trimming, not bytes.
        #[test]
        fn prop_name_length_counts_chars(len in 1usize..=100) {
            let name = format!("  {}  ", "ё".repeat(len));
            prop_assert!(service().validate_name(&name).is_ok());
        }
    }
}
