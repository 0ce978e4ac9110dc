pub mod dashboards;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod state;

use crate::shared::data::store::SalesStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build artifacts
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Simple middleware for request logging
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        let status = response.status().as_u16();
        // Cyan for 200, brown for everything else
        let color_code = if status == 200 { "36" } else { "33" };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {} {:>6} {}",
            color_code,
            chrono::Local::now().format("%H:%M:%S"),
            duration.as_millis(),
            status,
            method,
            uri.path()
        );

        response
    }

    // Materialize the read-only record store (loads config from config.toml)
    let config = shared::config::load_config()?;
    let dataset_path = shared::config::get_dataset_path(&config)?;

    let records = shared::data::loader::load_dataset(&dataset_path)
        .map_err(|e| anyhow::anyhow!("dataset load failed: {e}"))?;
    let store = SalesStore::new(records);
    if store.is_empty() {
        tracing::warn!("Dataset is empty; every dashboard query will return zeroes");
    }
    tracing::info!("Sales store ready: {} order records", store.len());

    let app_state = AppState {
        store: Arc::new(store),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = routes::configure_routes(app_state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
