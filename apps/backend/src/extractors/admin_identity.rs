//! Extractor for the authenticated admin identity.
//!
//! Reads the claims the identity middleware stored in request extensions.
//! Handlers that take [`AdminIdentity`] answer 401 to anonymous requests;
//! wrong identities never reach them because the admin gate redirects first.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::Claims;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
}

impl FromRequest for AdminIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Claims>()
                .map(|claims| AdminIdentity {
                    username: claims.sub.clone(),
                })
                .ok_or_else(AppError::unauthorized_missing_bearer),
        )
    }
}
