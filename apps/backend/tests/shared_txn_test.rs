mod common;

use actix_web::test;
use backend::db::txn::with_txn;
use backend::repos::players;
use backend::test_support::{build_test_state, txn as txn_support};

#[actix_web::test]
async fn injected_transactions_stay_with_their_owner() {
    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");

    let shared = txn_support::open(&db).await;
    let req = test::TestRequest::default().to_http_request();
    txn_support::inject(&req, &shared);

    with_txn(Some(&req), &state, |txn| {
        Box::pin(async move {
            players::create_player(txn, "Borrowed", 5).await?;
            Ok::<_, backend::AppError>(())
        })
    })
    .await
    .expect("with_txn");

    // Visible through the shared transaction; nothing was committed.
    let inside = players::count(shared.transaction())
        .await
        .expect("count inside txn");
    assert_eq!(inside, 1);

    // The request extensions hold a clone; drop it before unwrapping the Arc.
    drop(req);
    txn_support::rollback(shared).await.expect("rollback");

    let after = players::count(&db).await.expect("count after rollback");
    assert_eq!(after, 0, "with_txn must not commit an injected transaction");
}

#[actix_web::test]
async fn without_injection_with_txn_owns_the_lifecycle() {
    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");

    let req = test::TestRequest::default().to_http_request();
    with_txn(Some(&req), &state, |txn| {
        Box::pin(async move {
            players::create_player(txn, "Durable", 6).await?;
            Ok::<_, backend::AppError>(())
        })
    })
    .await
    .expect("with_txn");

    let count = players::count(&db).await.expect("count");
    assert_eq!(count, 1, "commit-on-ok is the default policy");
}
