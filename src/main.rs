mod model;
mod server;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    bot::{self, gateway::serenity_gateway::SerenityGateway, status::BotStatus},
    command::{registry::CommandRegistry, BotServices},
    config::Config,
    error::AppError,
    router,
    scheduler::{bot_stats, unmute::UnmuteScheduler},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let registry = Arc::new(CommandRegistry::standard());
    let status = BotStatus::new();
    let unmute = UnmuteScheduler::new();

    let services = Arc::new(BotServices {
        db: db.clone(),
        registry: registry.clone(),
        unmute: unmute.clone(),
        status: status.clone(),
        settings: config.command_settings(),
    });

    let mut client = bot::start::init_bot(&config, services).await?;
    let shard_manager = client.shard_manager.clone();
    let gateway: Arc<dyn bot::gateway::DiscordGateway> = Arc::new(SerenityGateway::new(
        client.http.clone(),
        client.cache.clone(),
    ));
    status.attach_shard_manager(shard_manager.clone()).await;

    unmute.start(gateway.clone());

    let mut stats_scheduler = bot_stats::start_scheduler(
        db.clone(),
        gateway.clone(),
        status.clone(),
        &config.stats_snapshot_cron,
    )
    .await?;

    // Start Discord bot in a separate task
    let bot_status = status.clone();
    tokio::spawn(async move {
        if let Err(e) = client.start().await {
            tracing::error!("Discord bot error: {}", e);
        }
        bot_status.mark_offline().await;
    });

    let app = router::router().with_state(AppState::new(db, gateway, registry, status));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Dashboard API listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
            shard_manager.shutdown_all().await;
        })
        .await?;

    if let Err(e) = stats_scheduler.shutdown().await {
        tracing::warn!("Failed to stop stats scheduler: {}", e);
    }

    Ok(())
}
