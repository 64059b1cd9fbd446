//! Public read model route.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::state::StateService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct PlayerEntry {
    name: String,
    position: i32,
}

#[derive(Debug, Serialize)]
struct TaskEntry {
    description: String,
}

#[derive(Debug, Serialize)]
struct StateResponse {
    players: Vec<PlayerEntry>,
    tasks: Vec<TaskEntry>,
    rules: Option<String>,
}

/// GET /api/state
///
/// The whole board in one read: players in board order, every task slot in id
/// order, and the rules text (or `null` before it is written). Unauthenticated
/// and read-only; anything but GET gets 405 from the resource itself.
async fn get_state(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = StateService::new(app_state.game.clone());

    let snapshot = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.snapshot(txn).await?) })
    })
    .await?;

    let body = StateResponse {
        players: snapshot
            .players
            .into_iter()
            .map(|p| PlayerEntry {
                name: p.name,
                position: p.position,
            })
            .collect(),
        tasks: snapshot
            .tasks
            .into_iter()
            .map(|t| TaskEntry {
                description: t.description,
            })
            .collect(),
        rules: snapshot.rules,
    };

    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/state").route(web::get().to(get_state)));
}
