mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::waitlist::{MemoryWaitlistStore, PgWaitlistStore, WaitlistStore};

#[tokio::main]
async fn main() {
    // A missing .env file is normal in deployed environments.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let port = config.port;

    let waitlist: Arc<dyn WaitlistStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "waitlist backed by postgres");
            Arc::new(PgWaitlistStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; waitlist entries are kept in memory only");
            Arc::new(MemoryWaitlistStore::default())
        }
    };

    let state = state::AppState::new(waitlist, config);

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application router");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "fillflow listening");
    axum::serve(listener, app).await.expect("server failed");
}
