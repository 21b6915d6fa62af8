use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use markdown_api::application::ports::markdown_repository::MarkdownRepository;
use markdown_api::bootstrap::app_context::{AppContext, AppServices};
use markdown_api::bootstrap::config::{Config, StorageBackend};
use markdown_api::infrastructure::db;
use markdown_api::infrastructure::db::repositories::markdown_repository_sqlx::SqlxMarkdownRepository;
use markdown_api::infrastructure::memory::markdown_repository_memory::InMemoryMarkdownRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "markdown_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting markdown API");

    let markdown_repo: Arc<dyn MarkdownRepository> = match cfg.storage_backend {
        StorageBackend::Postgres => {
            let pool = db::connect_pool(&cfg.database_url, cfg.db_max_connections).await?;
            db::migrate(&pool).await?;
            Arc::new(SqlxMarkdownRepository::new(pool))
        }
        StorageBackend::Memory => {
            warn!("memory_store_enabled_documents_are_not_persisted");
            Arc::new(InMemoryMarkdownRepository::new())
        }
    };

    let ctx = AppContext::new(cfg.clone(), AppServices::new(markdown_repo));
    let app = markdown_api::presentation::http::router(ctx);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown_signal_received");
}
