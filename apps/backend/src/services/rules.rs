//! Rules text management.
//!
//! At most one rules document exists. Creation of a second one is refused at
//! the service boundary and, under concurrency, by the fixed primary key.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::rules::{self, RulesDoc};

/// Rules domain service.
pub struct RulesService;

impl RulesService {
    pub fn new() -> Self {
        Self
    }

    pub async fn get(&self, txn: &DatabaseTransaction) -> Result<Option<RulesDoc>, DomainError> {
        rules::find(txn).await
    }

    /// Create the rules document. Conflicts when one already exists.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        text: &str,
    ) -> Result<RulesDoc, DomainError> {
        let doc = rules::create(txn, text).await?;
        info!("rules created");
        Ok(doc)
    }

    /// Replace the rules text. NotFound when it was never created.
    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        text: &str,
    ) -> Result<RulesDoc, DomainError> {
        let doc = rules::update(txn, text).await?;
        info!("rules updated");
        Ok(doc)
    }
}

impl Default for RulesService {
    fn default() -> Self {
        Self::new()
    }
}
