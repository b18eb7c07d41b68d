use std::net::SocketAddr;
use daytrip_api::{app, app_config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daytrip_api=debug,daytrip_offer=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Starting {} on port {} (arrive by {}:00, depart from {}:00, {})",
        config.brand.name,
        config.server.port,
        config.search.morning_arrive_end_hour,
        config.search.evening_depart_start_hour,
        config.search.currency
    );

    let app = app(AppState::new(config.search, config.brand));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
