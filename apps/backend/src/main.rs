use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::game::GameConfig;
use backend::db::txn::with_txn;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::services::tasks::TasksService;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // No dotenv loading here; the runtime environment (compose env_file,
    // systemd unit, shell) is expected to provide every variable.
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Tabula Backend on http://{host}:{port}");

    let jwt = std::env::var("BACKEND_JWT_SECRET").unwrap_or_else(|_| {
        eprintln!("❌ BACKEND_JWT_SECRET must be set");
        std::process::exit(1);
    });
    let security_config = SecurityConfig::new(jwt.as_bytes());

    let game_config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid game configuration: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_security(security_config)
        .with_game(game_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    if let Err(e) = seed_task_slots(&app_state).await {
        eprintln!("❌ Failed to seed task slots: {e}");
        std::process::exit(1);
    }

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// Backfill missing task slots so a fresh database starts fully seeded.
async fn seed_task_slots(app_state: &AppState) -> Result<(), AppError> {
    let service = TasksService::new(app_state.game.clone());
    with_txn(None, app_state, |txn| {
        Box::pin(async move { Ok(service.ensure_complete(txn).await?) })
    })
    .await
}
