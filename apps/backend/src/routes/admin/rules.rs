//! Rules text administration routes.
//!
//! One document, created once, updated thereafter. No DELETE.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::admin_identity::AdminIdentity;
use crate::services::rules::RulesService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct RulesResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct RulesBody {
    text: String,
}

/// GET /admin/api/rules
async fn get_rules(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = RulesService::new();

    let doc = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let doc = service.get(txn).await?.ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Rules, "Rules have not been created yet")
            })?;
            Ok(doc)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(RulesResponse { text: doc.text }))
}

/// POST /admin/api/rules
///
/// Creating a second document conflicts with 409.
async fn create_rules(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    app_state: web::Data<AppState>,
    body: web::Json<RulesBody>,
) -> Result<HttpResponse, AppError> {
    let service = RulesService::new();
    let body = body.into_inner();

    let doc = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.create(txn, &body.text).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(RulesResponse { text: doc.text }))
}

/// PUT /admin/api/rules
async fn update_rules(
    http_req: HttpRequest,
    _admin: AdminIdentity,
    app_state: web::Data<AppState>,
    body: web::Json<RulesBody>,
) -> Result<HttpResponse, AppError> {
    let service = RulesService::new();
    let body = body.into_inner();

    let doc = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(service.update(txn, &body.text).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(RulesResponse { text: doc.text }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/rules")
            .route(web::get().to(get_rules))
            .route(web::post().to(create_rules))
            .route(web::put().to(update_rules)),
    );
}
