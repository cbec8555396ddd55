//! Benefits Engine HTTP server.

use benefits_engine::api::{create_router, AppState};
use benefits_engine::clock::{FixedClock, SystemClock};
use benefits_engine::config::{LogFormat, RosterLoader, ServerConfig};
use benefits_engine::roster::Roster;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let roster = RosterLoader::load(&config.roster_path)?;
    info!(
        path = %config.roster_path.display(),
        employees = roster.list_employees().len(),
        dependents = roster.list_dependents().len(),
        "Roster loaded"
    );

    let state = match config.today {
        Some(date) => {
            info!(today = %date, "Using fixed date for age calculations");
            AppState::new(roster, FixedClock::new(date))
        }
        None => AppState::new(roster, SystemClock),
    };

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
