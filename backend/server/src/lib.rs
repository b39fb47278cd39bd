//! Read-only API over the intern roster.
//!
//!
//!
//! # Routes
//!
//! Mounted under `/collection`, and again under `/api/intern`, the prefix the original web client
//! called. Field names follow the roster model (`avatarUrl`, `lastDonationAmount`, `socialLinks`),
//! so that client has to read the renamed fields.
//!
//! A trailing slash is trimmed before routing, `/collection/` is `/collection`.
//!
//! - `GET /` all interns with progress, seed order
//! - `GET /all` same as above
//! - `GET /leaderboard` all interns with progress and `rank`, highest raised first
//! - `GET /{id}` one intern with progress
//! - `GET /referral/{code}` id, name, referral code and avatar only
//! - `GET /{id}/activity` three entry activity feed
//!
//! Anything else, other methods on these paths included, is a 404 carrying the requested path.
//!
//!
//!
//! # Errors
//!
//! - Unknown id or referral code: 404 with a message
//! - Panics and internal failures: 500, detail only when `RUST_ENV=development`
//!
//!
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=info cargo run --bin internboard
//! ```
//!
//! Serve a different roster.
//! ```sh
//! SEED_PATH=./roster.json cargo run --bin internboard
//! ```
use std::{any::Any as PanicPayload, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router, ServiceExt,
    extract::Request,
    handler::Handler,
    http::{Method, header::CONTENT_TYPE},
    routing::{IntoMakeService, MethodRouter, get},
};
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use error::panic_response;
use routes::{
    activity_handler, intern_handler, interns_handler, leaderboard_handler, referral_handler,
    route_not_found,
};
use state::State;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new()?;
    info!("Loaded {} interns", state.roster.len());

    info!("Starting server...");
    let app = into_service(build_router(state.clone()));

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

pub fn build_router(state: Arc<State>) -> Router {
    build_router_with(state, Router::new())
}

/// `extra` routes sit behind the same fallback and layers as the collection routes.
pub fn build_router_with(state: Arc<State>, extra: Router<Arc<State>>) -> Router {
    let expose_errors = state.config.expose_errors;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let trace = TraceLayer::new_for_http()
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let collection = collection_routes();

    Router::new()
        .nest("/collection", collection.clone())
        .nest("/api/intern", collection)
        .merge(extra)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn PanicPayload + Send + 'static>| {
            panic_response(panic, expose_errors)
        }))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

/// Trailing slashes are trimmed before the router sees the path.
pub fn into_service(router: Router) -> IntoMakeService<NormalizePath<Router>> {
    ServiceExt::<Request>::into_make_service(NormalizePath::trim_trailing_slash(router))
}

fn collection_routes() -> Router<Arc<State>> {
    Router::new()
        .route("/", read(interns_handler))
        .route("/all", read(interns_handler))
        .route("/leaderboard", read(leaderboard_handler))
        .route("/referral/{code}", read(referral_handler))
        .route("/{id}", read(intern_handler))
        .route("/{id}/activity", read(activity_handler))
}

/// GET only, any other method is an unmatched route.
fn read<H, T>(handler: H) -> MethodRouter<Arc<State>>
where
    H: Handler<T, Arc<State>>,
    T: 'static,
{
    get(handler).fallback(route_not_found)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}
