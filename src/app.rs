use crate::config::Config;
use crate::pages;
use crate::tmdb::{TmdbApi, TmdbClient};
use crate::views::parse_page;
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

const STYLESHEET: &str = include_str!("../static/app.css");

#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<dyn TmdbApi>,
    /// Language of the second person lookup on `/person/:id`.
    pub secondary_language: String,
    /// Freshness window advertised on rendered pages.
    pub revalidate: Duration,
}

impl AppState {
    pub fn new(tmdb: Arc<dyn TmdbApi>, config: &Config) -> Self {
        Self {
            tmdb,
            secondary_language: config.secondary_language.clone(),
            revalidate: config.revalidate,
        }
    }
}

pub async fn run_server(config: Config) -> Result<()> {
    let tmdb: Arc<dyn TmdbApi> = Arc::new(TmdbClient::new(&config)?);
    info!("Using TMDB at {}", config.base_url);

    let state = AppState::new(tmdb, &config);
    let app = build_router(state);

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let page_cache = HeaderValue::from_str(&format!(
        "public, s-maxage={}",
        state.revalidate.as_secs()
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("public"));

    // Only successful renders are shareable; rejections and error pages are not.
    let pages = pages::router().layer(SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        move |res: &Response| res.status().is_success().then(|| page_cache.clone()),
    ));

    Router::new()
        .route("/api/tv-shows", get(list_tv_shows))
        .route("/health", get(health))
        .route("/static/app.css", get(stylesheet))
        .merge(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<String>,
}

async fn list_tv_shows(State(state): State<AppState>, Query(params): Query<ListParams>) -> Response {
    let page = parse_page(params.page.as_deref());
    match state.tmdb.tv_shows(page).await {
        Ok(shows) => (StatusCode::OK, Json(shows)).into_response(),
        Err(e) => {
            error!("Failed to list TV shows (page {}): {:#}", page, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": format!("{:#}", e) })),
            )
                .into_response()
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
