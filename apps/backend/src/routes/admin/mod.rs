//! Admin HTTP API.
//!
//! Registered under `/admin` behind [`AdminGate`]; handlers take
//! [`AdminIdentity`] so unauthenticated calls get a clean 401.
//!
//! [`AdminGate`]: crate::middleware::admin_gate::AdminGate
//! [`AdminIdentity`]: crate::extractors::admin_identity::AdminIdentity

pub mod players;
pub mod rules;
pub mod tasks;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(players::configure_routes)
            .configure(tasks::configure_routes)
            .configure(rules::configure_routes),
    );
}
