pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{
    Result,
    config::Config,
    gemini::{GeminiClient, GenerativeClient},
};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const RELAY_PATH: &str = "/api/gemini";

/// Largest request body the relay buffers; axum's own default is 2 MiB.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            RELAY_PATH,
            post(handlers::relay).fallback(handlers::method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

/// Builds the state for `config`; a missing credential leaves the generator unset.
pub fn app_state(config: &Config) -> AppState {
    let generator = config.upstream.credential().map(|key| {
        Arc::new(GeminiClient::new(
            &config.upstream.base_url,
            &config.upstream.model,
            key,
        )) as Arc<dyn GenerativeClient>
    });

    if generator.is_none() {
        warn!("GEMINI_API_KEY is not set; relay requests will fail with 500");
    }

    AppState { generator }
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(app_state(&config));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} relaying to model {}",
        addr, config.upstream.model
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
