//! Admin area gate.
//!
//! Mounted on the `/admin` scope. An authenticated identity that is not the
//! configured admin is sent back to the login page (303) with a flash cookie
//! the login UI renders as an access notice. Anonymous requests pass through;
//! each admin handler requires an identity and answers 401 itself, which
//! keeps gate and authentication concerns separate.
//!
//! The login path itself is never gated, so the redirect cannot loop.

use std::fmt;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, StatusCode};
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::Claims;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Cookie the login frontend turns into a visible notice.
pub const FLASH_COOKIE: &str = "flash_notice";
/// Cookie value for a denied admin-area access.
pub const FLASH_ACCESS_DENIED: &str = "admin_access_denied";

pub struct AdminGate;

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateMiddleware { service }))
    }
}

pub struct AdminGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AdminGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Clone what the decision needs before moving req; extensions hold a
        // RefCell borrow that must not live across an await.
        let claims = req.extensions().get::<Claims>().cloned();
        let state = req.app_data::<web::Data<AppState>>().cloned();

        if let (Some(claims), Some(state)) = (claims, state) {
            let login_path = state.game.admin_login_path.as_str();
            if req.path() != login_path && claims.sub != state.game.admin_username {
                security::admin_access_denied(&claims.sub, req.path());
                let redirect = GateRedirect {
                    location: login_path.to_string(),
                };
                return Box::pin(async move { Err(redirect.into()) });
            }
        }

        Box::pin(self.service.call(req))
    }
}

/// Early exit carrying the redirect; rendered below as 303 plus flash cookie.
#[derive(Debug)]
struct GateRedirect {
    location: String,
}

impl fmt::Display for GateRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "redirected to {}", self.location)
    }
}

impl ResponseError for GateRedirect {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        let flash = Cookie::build(FLASH_COOKIE, FLASH_ACCESS_DENIED)
            .path("/")
            .same_site(SameSite::Lax)
            .finish();

        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, self.location.clone()))
            .cookie(flash)
            .finish()
    }
}
