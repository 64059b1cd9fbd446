//! Shared transaction helpers for tests.
//!
//! Tests that want to observe or discard a request's writes open a
//! transaction here, inject it into the request, and stay in charge of
//! commit or rollback. `with_txn` never finishes an injected transaction.

use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::db::txn::SharedTxn;

/// Begin a transaction owned by the test.
pub async fn open(conn: &DatabaseConnection) -> SharedTxn {
    let txn = conn.begin().await.expect("begin shared transaction");
    SharedTxn(Arc::new(txn))
}

/// Make `shared` visible to handlers running against `req`.
pub fn inject(req: &HttpRequest, shared: &SharedTxn) {
    req.extensions_mut().insert(shared.clone());
}

/// Roll the transaction back. Every clone (including those held by request
/// extensions) must be dropped first.
pub async fn rollback(shared: SharedTxn) -> Result<(), sea_orm::DbErr> {
    let txn = Arc::try_unwrap(shared.0).map_err(|_| {
        sea_orm::DbErr::Custom("Cannot rollback: transaction is still shared".to_string())
    })?;
    txn.rollback().await
}
