use std::{future::Future, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.host, cfg.port);
    raw.parse()
        .map_err(|e: std::net::AddrParseError| StartupError::InvalidConfig(format!("server address {raw}: {e}")))
}

/// Resolves on Ctrl+C; a failing signal handler never triggers shutdown.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: open the store, build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_or_env()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    // 启动时打开数据库连接，关闭时显式释放
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    let state = ServerState::with_db(db.clone());

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Bind { addr: addr.to_string(), reason: e.to_string() })?;
    info!(%addr, "starting companies api");
    serve(listener, app, shutdown_signal()).await?;

    models::db::close(db).await?;
    info!("server stopped");
    Ok(())
}
