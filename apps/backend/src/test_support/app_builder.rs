//! Stage 2: given an AppState, build an initialized Actix test service.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};

use crate::error::AppError;
use crate::state::app_state::AppState;

type RoutesFn = Box<dyn FnOnce(&mut web::ServiceConfig) + Send>;

enum Router {
    Prod,
    Custom(RoutesFn),
}

pub struct TestAppBuilder {
    state: AppState,
    router: Router,
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder {
        state,
        router: Router::Prod,
    }
}

impl TestAppBuilder {
    /// Mount the production route tree (the default). Scope-level middleware
    /// ships inside it, so gate behavior is exercised as deployed.
    pub fn with_prod_routes(mut self) -> Self {
        self.router = Router::Prod;
        self
    }

    /// Mount custom routes for a focused test.
    pub fn with_routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut web::ServiceConfig) + Send + 'static,
    {
        self.router = Router::Custom(Box::new(f));
        self
    }

    /// Build and initialize the test service.
    ///
    /// Return type is `impl Service<...>` so callers never name the opaque
    /// service type.
    pub async fn build(
        self,
    ) -> Result<impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>, AppError>
    {
        let app = App::new().app_data(web::Data::new(self.state));

        let app = match self.router {
            Router::Prod => app.configure(crate::routes::configure),
            Router::Custom(f) => app.configure(f),
        };

        Ok(test::init_service(app).await)
    }
}
