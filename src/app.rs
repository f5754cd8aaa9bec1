/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → AppState 生成 → Router 組み立て
 * - Middleware の適用 (http 全体 / v1 の API key)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{self, v1::handlers::health::health};
use crate::config::Config;
use crate::middleware;
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG=info,apikey_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development: fail fast
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new();
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes())
        .with_state(state);

    middleware::http::apply(router, config)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
