use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use workout_tracker::{open_file_store, router, AppState, Config, Tracker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let store = open_file_store(config.data_path.clone()).await;
    let mut tracker = Tracker::new(store, config.catalog, config.clock);
    if let Some(year) = config.calendar_year {
        tracker = tracker.with_calendar_year(year);
    }
    let startup = tracker.refresh();
    info!(
        today = %startup.today,
        completed = startup.today_completed,
        month = %startup.monthly.label,
        "loaded workout state from {}",
        config.data_path.display()
    );

    let app = router(AppState::new(tracker));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
