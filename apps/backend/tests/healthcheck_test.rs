mod common;

use actix_web::test;
use backend::test_support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_endpoint_answers_ok() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}
