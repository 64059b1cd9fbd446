mod common;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use backend::test_support::auth::{bearer_header, mint_expired_token};
use backend::test_support::{build_test_state, build_test_state_with_game, create_test_app};
use backend::GameConfig;
use serde_json::Value;

/// Drive a request that the admin gate is expected to reject and render the
/// redirect it carries.
async fn call_and_capture_redirect<S>(app: &S, req: Request) -> actix_web::HttpResponse
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let err = app.call(req).await.expect_err("expected gate redirect");
    err.error_response()
}

#[actix_web::test]
async fn anonymous_requests_get_401_problems() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    let req = test::TestRequest::get()
        .uri("/admin/api/players")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["code"], "UNAUTHORIZED_MISSING_BEARER");
}

#[actix_web::test]
async fn unverifiable_tokens_are_treated_as_anonymous() {
    let state = build_test_state().await.expect("test state");
    let security = state.security.clone();
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    // A token that never was a JWT.
    let req = test::TestRequest::get()
        .uri("/admin/api/players")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["code"], "UNAUTHORIZED_MISSING_BEARER");

    // A real admin token that has expired.
    let expired = mint_expired_token("admin", &security);
    let req = test::TestRequest::get()
        .uri("/admin/api/players")
        .insert_header(("Authorization", format!("Bearer {expired}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["code"], "UNAUTHORIZED_MISSING_BEARER");
}

#[actix_web::test]
async fn wrong_identity_is_redirected_to_login_with_flash() {
    let state = build_test_state().await.expect("test state");
    let security = state.security.clone();
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    let req = test::TestRequest::get()
        .uri("/admin/api/players")
        .insert_header(("Authorization", bearer_header("mallory", &security)))
        .to_request();
    let resp = call_and_capture_redirect(&app, req).await;

    assert_eq!(resp.status().as_u16(), 303);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("location header");
    assert_eq!(location, "/admin/login");
    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("flash cookie");
    assert!(
        cookie.contains("flash_notice=admin_access_denied"),
        "unexpected cookie: {cookie}"
    );
}

#[actix_web::test]
async fn wrong_identity_is_redirected_from_every_admin_path() {
    let state = build_test_state().await.expect("test state");
    let security = state.security.clone();
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");
    let bearer = bearer_header("mallory", &security);

    for uri in [
        "/admin/api/tasks",
        "/admin/api/rules",
        "/admin/api/players/3",
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let resp = call_and_capture_redirect(&app, req).await;
        assert_eq!(resp.status().as_u16(), 303, "uri {uri}");
    }
}

#[actix_web::test]
async fn login_path_is_never_gated() {
    let state = build_test_state().await.expect("test state");
    let security = state.security.clone();
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    // No API route lives at the login path, so passing the gate means a plain
    // 404 rather than a redirect loop.
    let req = test::TestRequest::get()
        .uri("/admin/login")
        .insert_header(("Authorization", bearer_header("mallory", &security)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn the_configured_admin_passes_the_gate() {
    let state = build_test_state().await.expect("test state");
    let security = state.security.clone();
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    let req = test::TestRequest::get()
        .uri("/admin/api/players")
        .insert_header(("Authorization", bearer_header("admin", &security)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn admin_username_is_configurable() {
    let state = build_test_state_with_game(GameConfig {
        admin_username: "gamemaster".to_string(),
        ..GameConfig::default()
    })
    .await
    .expect("test state");
    let security = state.security.clone();
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    // The default name no longer passes.
    let req = test::TestRequest::get()
        .uri("/admin/api/players")
        .insert_header(("Authorization", bearer_header("admin", &security)))
        .to_request();
    let resp = call_and_capture_redirect(&app, req).await;
    assert_eq!(resp.status().as_u16(), 303);

    let req = test::TestRequest::get()
        .uri("/admin/api/players")
        .insert_header(("Authorization", bearer_header("gamemaster", &security)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}
