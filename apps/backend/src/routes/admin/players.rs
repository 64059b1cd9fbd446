//! Roster administration routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::admin_identity::AdminIdentity;
use crate::repos::players::Player;
use crate::services::players::PlayersService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct PlayerResponse {
    id: i64,
    name: String,
    position: i32,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            position: player.position,
        }
    }
}

#[derive(Debug, Serialize)]
struct RosterResponse {
    players: Vec<PlayerResponse>,
    can_add: bool,
}

#[derive(Debug, Deserialize)]
struct PlayerBody {
    name: String,
    position: i32,
}

/// GET /admin/api/players
///
/// The roster plus whether another player would still fit under the cap, so
/// the UI can grey out its add form the way the original console did.
async fn list_players(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = PlayersService::new(app_state.game.clone());

    let (players, can_add) = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let players = service.list(txn).await?;
            let can_add = service.can_add(txn).await?;
            Ok((players, can_add))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(RosterResponse {
        players: players.into_iter().map(PlayerResponse::from).collect(),
        can_add,
    }))
}

/// POST /admin/api/players
async fn create_player(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    app_state: web::Data<AppState>,
    body: web::Json<PlayerBody>,
) -> Result<HttpResponse, AppError> {
    let service = PlayersService::new(app_state.game.clone());
    let body = body.into_inner();

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.create(txn, &body.name, body.position).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(PlayerResponse::from(player)))
}

/// PUT /admin/api/players/{id}
async fn update_player(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: web::Json<PlayerBody>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = PlayersService::new(app_state.game.clone());
    let body = body.into_inner();

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.update(txn, id, &body.name, body.position).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

/// DELETE /admin/api/players/{id}
///
/// Players are the only board entity that can be removed.
async fn delete_player(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = PlayersService::new(app_state.game.clone());

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.delete(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/players")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player)),
    );
    cfg.service(
        web::resource("/players/{id}")
            .route(web::put().to(update_player))
            .route(web::delete().to(delete_player)),
    );
}
