use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use directory_search::directory::handlers::{handle_add_artist, handle_reset};
use directory_search::directory::store::DirectoryStore;
use directory_search::search::handlers::handle_search;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Directory state:
    let store = Arc::new(DirectoryStore::seeded());
    tracing::info!(
        "Seeded directory with {} persons and {} genres",
        store.persons().len(),
        store.genre_count()
    );

    // 2. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/search", get(handle_search))
        .route("/artists", post(handle_add_artist))
        .route("/reset", post(handle_reset))
        .layer(Extension(store));

    // 3. Start HTTP server:
    tracing::info!("API listening on http://{}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_root() -> &'static str {
    "Hello world!"
}
