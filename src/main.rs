mod config;
mod domain;
mod error;
mod middleware;
mod state;
mod web;

use crate::config::AppConfig;
use crate::domain::assessment::AssessmentCatalog;
use crate::state::SharedState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    let catalog = AssessmentCatalog::load().map_err(|e| {
        tracing::error!("Assessment catalog failed validation: {}", e);
        e
    })?;
    for definition in catalog.all() {
        tracing::info!(
            "Loaded {} assessment: {} questions in {} categories",
            definition.kind.as_str(),
            definition.bank.len(),
            definition.bank.categories().len()
        );
    }

    let shared: SharedState = Arc::new(state::AppState::new(catalog, &config));

    let scheduler = JobScheduler::new().await?;

    let shared_for_sweep = shared.clone();
    scheduler
        .add(Job::new_async(config.sweep_schedule.as_str(), move |_uuid, _l| {
            let state = shared_for_sweep.clone();
            Box::pin(async move {
                let removed = state.sweep_expired(chrono::Utc::now()).await;
                let tracked = state.limiter.prune().await;
                if removed > 0 {
                    tracing::info!("Removed {} expired assessment sessions", removed);
                }
                tracing::debug!("Rate limiter tracking {} addresses", tracked);
            })
        })?)
        .await?;

    scheduler.start().await?;
    tracing::info!("Session sweep scheduled: {}", config.sweep_schedule);

    let app = web::routes(shared)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
