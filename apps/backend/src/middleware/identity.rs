//! Bearer identity extraction.
//!
//! Verifies the `Authorization: Bearer` token when present and stores the
//! claims in request extensions. This middleware never rejects: requests
//! without a usable identity continue anonymously, and the admin gate or the
//! handler's extractor decides what that means. A token that fails
//! verification is treated as no identity at all, with a security log line.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_access_token;
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct Identity;

impl<S, B> Transform<S, ServiceRequest> for Identity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddleware { service }))
    }
}

pub struct IdentityMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddleware<S>
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
        if let Some(token) = extract_bearer(&req) {
            if let Some(state) = req.app_data::<web::Data<AppState>>() {
                match verify_access_token(&token, &state.security) {
                    Ok(claims) => {
                        req.extensions_mut().insert(claims);
                    }
                    Err(err) => {
                        security::token_rejected(&err.to_string());
                    }
                }
            }
        }

        Box::pin(self.service.call(req))
    }
}

/// Token from a well-formed `Authorization: Bearer <token>` header, if any.
fn extract_bearer(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?;
    let auth_str = value.to_str().ok()?;
    let mut parts = auth_str.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token.to_string()),
        _ => None,
    }
}
