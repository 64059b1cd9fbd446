//! Transaction-scoped advisory locks.
//!
//! The roster cap check is read-then-insert, which two Postgres sessions can
//! interleave under READ COMMITTED. Serializing writers on an advisory lock
//! closes that window; the lock releases with the transaction. SQLite has a
//! single writer, so the call is a no-op there.

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseTransaction, Statement};
use xxhash_rust::xxh3::xxh3_64;

use crate::errors::domain::DomainError;

const ROSTER_LOCK_KEY: &str = "tabula.players.roster";

/// Stable 64-bit lock id for a string key.
pub fn pg_lock_id(key: &str) -> i64 {
    xxh3_64(key.as_bytes()) as i64
}

/// Serialize roster mutations for the rest of this transaction.
pub async fn lock_roster(txn: &DatabaseTransaction) -> Result<(), DomainError> {
    if txn.get_database_backend() != DatabaseBackend::Postgres {
        return Ok(());
    }
    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT pg_advisory_xact_lock($1)",
        vec![pg_lock_id(ROSTER_LOCK_KEY).into()],
    );
    txn.execute(stmt).await.map_err(DomainError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::pg_lock_id;

    #[test]
    fn lock_id_is_stable() {
        assert_eq!(pg_lock_id("tabula.players.roster"), pg_lock_id("tabula.players.roster"));
        assert_ne!(pg_lock_id("tabula.players.roster"), pg_lock_id("something.else"));
    }
}
