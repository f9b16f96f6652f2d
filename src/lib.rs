pub mod catalog;
pub mod config;
pub mod db;
pub mod middleware;
pub mod server;
pub mod util;

use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: Option<&str>, debug_logs: bool) -> Result<(), ServerError> {
    let config = config::Config::load(config_path)?;

    match config_path {
        Some(path) => info!("Using config file: {}", path),
        None => info!("No config file given, using defaults"),
    }
    if debug_logs {
        info!("Debug logging enabled");
    }

    // A store that fails to open is logged and answers every query with an
    // error; it does not stop the server.
    let stores = db::Stores::open(&config.database).await;

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let addr: SocketAddr = format!("{}:{}", address, config.listen.port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let state = server::AppState::new(stores.clone());
    let app = server::build_router(state);

    let served = if let (Some(cert_path), Some(key_path)) =
        (config.listen.tlscert.as_deref(), config.listen.tlskey.as_deref())
    {
        serve_tls(app, addr, cert_path, key_path).await
    } else {
        serve_plain(app, addr).await
    };

    stores.close().await;
    info!("Server stopped");
    served
}

async fn serve_plain(app: axum::Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(format!("Server error: {}", e)))
}

async fn serve_tls(
    app: axum::Router,
    addr: SocketAddr,
    cert_path: &str,
    key_path: &str,
) -> Result<(), ServerError> {
    info!("Loading TLS certificate from {}", cert_path);
    info!("Loading TLS key from {}", key_path);

    let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

    let handle = axum_server::Handle::new();
    let shutdown = handle.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.graceful_shutdown(Some(Duration::from_secs(10)));
    });

    info!("Server is running on https://{}", addr);

    axum_server::bind_rustls(addr, tls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown requested, draining connections");
}
