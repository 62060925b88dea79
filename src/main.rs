use std::net::SocketAddr;
use std::sync::Arc;

use hiremate_backend::{
    config::{Config, LogFormat},
    database::store::{InMemoryStore, RecruitmentStore},
    middleware::cors::cors_layer,
    routes, AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let store: Arc<dyn RecruitmentStore> = match config.seed_data_path.as_deref() {
        Some(path) => {
            let store = InMemoryStore::load(path)?;
            info!(path = %path.display(), "loaded seed snapshot");
            Arc::new(store)
        }
        None => Arc::new(InMemoryStore::new()),
    };

    let cors = cors_layer(&config)?;
    let addr: SocketAddr = config.server_address.parse()?;
    let app_state = AppState::new(config, store);

    let app = routes::build_router(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
