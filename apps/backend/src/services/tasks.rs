//! Task slot management.
//!
//! Tasks occupy a fixed range of ids. Slots never disappear: missing rows are
//! recreated with empty descriptions, and there is no delete operation.

use std::collections::BTreeSet;

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::config::game::GameConfig;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::tasks::{self, Task};

/// Task slot domain service.
pub struct TasksService {
    config: GameConfig,
}

impl TasksService {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// All task slots in id order. Callers that need the full fixed range
    /// should run [`ensure_complete`](Self::ensure_complete) first.
    pub async fn list(&self, txn: &DatabaseTransaction) -> Result<Vec<Task>, DomainError> {
        tasks::find_all(txn).await
    }

    pub async fn get(&self, txn: &DatabaseTransaction, id: i32) -> Result<Task, DomainError> {
        tasks::require_task(txn, id).await
    }

    /// Create any slot in `1..=max_tasks` that has no row yet, with an empty
    /// description. Concurrent callers race benignly: the insert skips slots
    /// that gained a row in the meantime.
    pub async fn ensure_complete(&self, txn: &DatabaseTransaction) -> Result<(), DomainError> {
        let existing: BTreeSet<i32> = tasks::existing_ids(txn).await?.into_iter().collect();
        let mut created = 0u32;
        for id in 1..=self.config.max_tasks {
            if existing.contains(&id) {
                continue;
            }
            if tasks::create_task_if_absent(txn, id, "").await? {
                created += 1;
            }
        }
        if created > 0 {
            debug!(created, "backfilled missing task slots");
        }
        Ok(())
    }

    /// Create a task. With an explicit id the slot must be free and in range;
    /// without one the lowest free slot is used.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        id: Option<i32>,
        description: &str,
    ) -> Result<Task, DomainError> {
        let id = match id {
            Some(id) => {
                self.validate_id(id)?;
                id
            }
            None => self.first_free_slot(txn).await?,
        };
        let task = tasks::create_task(txn, id, description).await?;
        info!(task_id = task.id, "task created");
        Ok(task)
    }

    /// Replace the description of an existing slot.
    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        description: &str,
    ) -> Result<Task, DomainError> {
        tasks::require_task(txn, id).await?;
        let task = tasks::update_description(txn, id, description).await?;
        info!(task_id = task.id, "task description updated");
        Ok(task)
    }

    async fn first_free_slot(&self, txn: &DatabaseTransaction) -> Result<i32, DomainError> {
        let existing: BTreeSet<i32> = tasks::existing_ids(txn).await?.into_iter().collect();
        (1..=self.config.max_tasks)
            .find(|id| !existing.contains(id))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::NoFreeTaskSlot,
                    "All task slots are occupied",
                )
            })
    }

    fn validate_id(&self, id: i32) -> Result<(), DomainError> {
        if id < 1 || id > self.config.max_tasks {
            return Err(DomainError::validation(
                ValidationKind::TaskIdOutOfRange,
                format!("Task id must be between 1 and {}", self.config.max_tasks),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::{DomainError, ValidationKind};

    fn service() -> TasksService {
        TasksService::new(GameConfig::default())
    }

    #[test]
    fn id_range_is_inclusive() {
        let svc = service();
        assert!(svc.validate_id(1).is_ok());
        assert!(svc.validate_id(20).is_ok());
        assert!(matches!(
            svc.validate_id(0),
            Err(DomainError::Validation(ValidationKind::TaskIdOutOfRange, _))
        ));
        assert!(matches!(
            svc.validate_id(21),
            Err(DomainError::Validation(ValidationKind::TaskIdOutOfRange, _))
        ));
    }

    #[test]
    fn smaller_board_shrinks_the_range() {
        let svc = TasksService::new(GameConfig {
            max_tasks: 5,
            ..GameConfig::default()
        });
        assert!(svc.validate_id(5).is_ok());
        assert!(svc.validate_id(6).is_err());
    }
}
