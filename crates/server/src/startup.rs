use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tokio::{net::TcpListener, sync::watch};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use service::{document_service::DocumentService, storage::memory::MemoryRepository};

use crate::routes;

/// Drain window for in-flight requests once a termination signal arrives.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars; the defaults serve the fixed
/// contract address.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8030);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Completes once SIGINT (Ctrl+C) or SIGTERM is observed.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
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
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // The repository exclusively owns the document map and counter; everything
    // else sees it through the service.
    let repo = Arc::new(MemoryRepository::new());
    let service = DocumentService::new(repo);

    let app: Router = routes::build_router(service, build_cors());

    let addr = load_bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    serve_with_grace(listener, app).await
}

/// Serve until a termination signal, then let in-flight requests drain for at
/// most [`SHUTDOWN_GRACE`] before giving up on them.
pub async fn serve_with_grace(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
    });

    tokio::select! {
        res = &mut server => {
            // serve returned on its own: that is a fatal error path
            res??;
            Ok(())
        }
        _ = shutdown_signal() => {
            info!("termination signal received, draining in-flight requests");
            let _ = shutdown_tx.send(true);
            match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
                Ok(joined) => {
                    joined??;
                    info!("server stopped gracefully");
                    Ok(())
                }
                Err(_) => {
                    warn!("grace period expired with requests still in flight");
                    Ok(())
                }
            }
        }
    }
}
