use actix_web::{App, HttpServer, middleware::Logger, web};
use tracing_subscriber::EnvFilter;

use poseidon::config::AppConfig;
use poseidon::services::user_service::UserService;
use poseidon::utils::session::SessionRegistry;
use poseidon::{db, routes};

fn io_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{}: {}", context, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().map_err(|e| io_error("Invalid configuration", e))?;

    tracing::info!("🔌 Connecting to database...");
    let db = db::establish_connection(&config.database)
        .await
        .map_err(|e| io_error("Failed to connect to database", e))?;
    db::init_schema(&db)
        .await
        .map_err(|e| io_error("Failed to create tables", e))?;
    tracing::info!("✅ Database connected!");

    UserService::new(&db, config.password_encoder())
        .ensure_default_admin(&config.admin)
        .await
        .map_err(|e| io_error("Failed to create default admin", e))?;

    let bind = (config.server.host.clone(), config.server.port);
    tracing::info!("🚀 Starting server on http://{}:{}", bind.0, bind.1);

    let db_data = web::Data::new(db);
    let config_data = web::Data::new(config);
    let sessions = web::Data::new(SessionRegistry::default());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .app_data(sessions.clone())
            .configure(routes::configure_routes)
    })
        .bind(bind)?
        .run()
        .await
}
