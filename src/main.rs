use std::sync::Arc;

use posts_backend::{
    config::Config,
    repositories::{self, SqliteRepo},
    routes::create_routes,
    AppState,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,posts_backend=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::init();

    let pool = match repositories::connect(&config.database_url, config.max_connections).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("Failed to connect to the database: {err:?}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(Arc::new(SqliteRepo::new(pool)));
    let app = create_routes(Arc::new(app_state));

    let listener = match tokio::net::TcpListener::bind(format!("[::]:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Server starting on :{}", config.port);

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {err}");
        std::process::exit(1);
    }
}
