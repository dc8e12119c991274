use std::sync::Arc;
use strategy_coach::coach::{CoachProvider, RuleBasedCoach};
use strategy_coach::config::Config;
use strategy_coach::http::start_http_server;
use strategy_coach::store::CascadeStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    strategy_coach::load_env();

    let config = Arc::new(Config::load()?);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_filter.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!(
        bind = %config.server.bind,
        simulate_latency = config.coach.simulate_latency,
        "starting strategy-coach"
    );

    let coach: Arc<dyn CoachProvider> = Arc::new(RuleBasedCoach::new(&config.coach));
    let store = Arc::new(CascadeStore::new());

    start_http_server(config, coach, store).await?;
    Ok(())
}
