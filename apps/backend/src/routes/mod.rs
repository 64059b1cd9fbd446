//! HTTP route registration.

pub mod admin;
pub mod state;

use actix_web::web;

use crate::health;
use crate::middleware::admin_gate::AdminGate;
use crate::middleware::identity::Identity;

/// The production route tree. Tests mount the same function so coverage
/// exercises exactly what ships.
///
/// Identity runs before the gate (outermost wrap executes first), so the gate
/// always sees whatever claims the bearer token carried.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    cfg.service(web::scope("/api").configure(state::configure_routes));
    cfg.service(
        web::scope("/admin")
            .wrap(AdminGate)
            .wrap(Identity)
            .configure(admin::configure_routes),
    );
}
