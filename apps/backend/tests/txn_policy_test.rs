//! Rollback policy behavior.
//!
//! The policy is process-wide and set once, so these tests live in their own
//! binary; every other integration binary runs with the commit-on-ok default.

mod common;

use backend::db::txn::with_txn;
use backend::db::txn_policy::{current, set_txn_policy, TxnPolicy};
use backend::repos::players;
use backend::test_support::build_test_state;

#[actix_web::test]
async fn rollback_policy_discards_successful_writes() {
    set_txn_policy(TxnPolicy::RollbackOnOk);
    assert_eq!(current(), TxnPolicy::RollbackOnOk);

    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            players::create_player(txn, "Ephemeral", 3).await?;
            Ok::<_, backend::AppError>(())
        })
    })
    .await
    .expect("with_txn");

    let count = players::count(&db).await.expect("count");
    assert_eq!(count, 0, "row should not persist after rollback-on-ok");
}

#[actix_web::test]
async fn errors_always_roll_back() {
    set_txn_policy(TxnPolicy::RollbackOnOk);

    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");

    let result = with_txn(None, &state, |txn| {
        Box::pin(async move {
            players::create_player(txn, "Doomed", 4).await?;
            Err::<(), _>(backend::AppError::internal("forced failure"))
        })
    })
    .await;

    assert!(result.is_err());
    let count = players::count(&db).await.expect("count");
    assert_eq!(count, 0, "row should not persist after an error");
}
