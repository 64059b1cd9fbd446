mod common;

use actix_web::test;
use backend::repos::{players, rules, tasks};
use backend::test_support::{build_test_state, build_test_state_with_game, create_test_app};
use backend::GameConfig;
use serde_json::Value;

#[actix_web::test]
async fn fresh_board_has_empty_players_full_tasks_and_null_rules() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    let req = test::TestRequest::get().uri("/api/state").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["players"].as_array().expect("players array").len(), 0);
    assert!(body["rules"].is_null());

    // Slot backfill runs inside the read, so a fresh database still
    // serializes the complete range.
    let tasks = body["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 20);
    for entry in tasks {
        assert_eq!(entry["description"], "");
        // Only the description is public.
        assert!(entry.get("id").is_none());
    }
}

#[actix_web::test]
async fn players_are_sorted_by_position_not_insertion_order() {
    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    players::create_player(&db, "Charlie", 15).await.expect("create");
    players::create_player(&db, "Анна", 2).await.expect("create");
    players::create_player(&db, "Bob", 9).await.expect("create");

    let req = test::TestRequest::get().uri("/api/state").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let players: Vec<(&str, i64)> = body["players"]
        .as_array()
        .expect("players array")
        .iter()
        .map(|p| {
            (
                p["name"].as_str().expect("name"),
                p["position"].as_i64().expect("position"),
            )
        })
        .collect();

    assert_eq!(players, vec![("Анна", 2), ("Bob", 9), ("Charlie", 15)]);

    // The public view never leaks row ids.
    assert!(body["players"][0].get("id").is_none());
}

#[actix_web::test]
async fn rules_text_appears_once_created() {
    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    rules::create(&db, "Move clockwise. No skipping.").await.expect("create rules");

    let req = test::TestRequest::get().uri("/api/state").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["rules"], "Move clockwise. No skipping.");
}

/// Two players on the first squares and one filled slot serialize to exactly
/// the documented shape, nothing more.
#[actix_web::test]
async fn a_small_board_serializes_to_the_exact_document() {
    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    players::create_player(&db, "Ann", 1).await.expect("create");
    players::create_player(&db, "Bo", 2).await.expect("create");
    tasks::create_task(&db, 1, "Sing").await.expect("create");

    let req = test::TestRequest::get().uri("/api/state").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let mut expected_tasks = vec![serde_json::json!({"description": "Sing"})];
    expected_tasks.extend((2..=20).map(|_| serde_json::json!({"description": ""})));

    assert_eq!(
        body,
        serde_json::json!({
            "players": [
                {"name": "Ann", "position": 1},
                {"name": "Bo", "position": 2},
            ],
            "tasks": expected_tasks,
            "rules": null,
        })
    );
}

#[actix_web::test]
async fn task_descriptions_come_back_in_id_order() {
    let state = build_test_state().await.expect("test state");
    let db = state.db.clone().expect("db handle");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    // Occupy two slots out of order before the backfill creates the rest.
    tasks::create_task(&db, 7, "seventh").await.expect("create");
    tasks::create_task(&db, 3, "third").await.expect("create");

    let req = test::TestRequest::get().uri("/api/state").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let descriptions: Vec<&str> = body["tasks"]
        .as_array()
        .expect("tasks array")
        .iter()
        .map(|t| t["description"].as_str().expect("description"))
        .collect();

    assert_eq!(descriptions.len(), 20);
    assert_eq!(descriptions[2], "third");
    assert_eq!(descriptions[6], "seventh");
    assert!(descriptions[0].is_empty());
}

#[actix_web::test]
async fn shrunk_board_serializes_fewer_slots() {
    let state = build_test_state_with_game(GameConfig {
        max_tasks: 5,
        ..GameConfig::default()
    })
    .await
    .expect("test state");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    let req = test::TestRequest::get().uri("/api/state").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["tasks"].as_array().expect("tasks array").len(), 5);
}

#[actix_web::test]
async fn non_get_methods_are_rejected_with_405() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    for req in [
        test::TestRequest::post().uri("/api/state").to_request(),
        test::TestRequest::put().uri("/api/state").to_request(),
        test::TestRequest::delete().uri("/api/state").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 405);
    }
}

#[actix_web::test]
async fn state_is_readable_without_any_credentials() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("test app");

    // No Authorization header anywhere near this request.
    let req = test::TestRequest::get().uri("/api/state").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}
