//! HTTP surface of the dashboard: weather lookups plus the static page that
//! hosts the clock widget.

use std::{io, net::SocketAddr, path::Path, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::json;
use skyclock_proto::config::Config;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::modules::weather::{WeatherDisplay, WeatherError, WeatherLookup, WeatherService};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Weather(#[from] WeatherError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] io::Error),
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    zipcode: String,
}

/// JSON error body returned by the API routes.
struct ApiError(WeatherError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            WeatherError::LocationNotFound(_) => StatusCode::NOT_FOUND,
            err if err.is_upstream() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("Weather lookup failed: {}", self.0);
        } else {
            warn!("Weather lookup rejected: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Build the dashboard router.
///
/// `/weather` and `/health` are handled directly; every other path is served
/// from `static_dir`.
pub fn router<W: WeatherLookup>(weather: Arc<W>, static_dir: &Path) -> Router {
    Router::new()
        .route("/weather", get(get_weather::<W>))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(weather)
}

async fn get_weather<W: WeatherLookup>(
    State(weather): State<Arc<W>>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherDisplay>, ApiError> {
    weather
        .lookup(params.zipcode.trim())
        .await
        .map(Json)
        .map_err(ApiError)
}

async fn health() -> &'static str {
    "ok"
}

/// Serve the dashboard until Ctrl-C is received.
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    let weather = Arc::new(WeatherService::new(config.weather.clone())?);
    let app = router(weather, &config.server.static_dir);

    let addr = config.server.bind;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(
        "listening on http://{addr}, serving {}",
        config.server.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
