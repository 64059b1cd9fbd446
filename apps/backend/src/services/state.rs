//! Read-side aggregation for the public state endpoint.

use sea_orm::DatabaseTransaction;

use crate::config::game::GameConfig;
use crate::errors::domain::DomainError;
use crate::repos::players::Player;
use crate::repos::rules;
use crate::repos::tasks::Task;
use crate::services::players::PlayersService;
use crate::services::tasks::TasksService;

/// Everything a board client needs, read in one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub players: Vec<Player>,
    pub tasks: Vec<Task>,
    pub rules: Option<String>,
}

/// Aggregates the public read model.
pub struct StateService {
    players: PlayersService,
    tasks: TasksService,
}

impl StateService {
    pub fn new(config: GameConfig) -> Self {
        Self {
            players: PlayersService::new(config.clone()),
            tasks: TasksService::new(config),
        }
    }

    /// Snapshot the whole board. Task slots are backfilled first, inside the
    /// same transaction, so the task list always covers the fixed range.
    pub async fn snapshot(&self, txn: &DatabaseTransaction) -> Result<StateSnapshot, DomainError> {
        self.tasks.ensure_complete(txn).await?;
        let players = self.players.list(txn).await?;
        let tasks = self.tasks.list(txn).await?;
        let rules = rules::find(txn).await?.map(|doc| doc.text);
        Ok(StateSnapshot {
            players,
            tasks,
            rules,
        })
    }
}
