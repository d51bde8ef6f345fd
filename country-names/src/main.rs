use country_names::config::ServiceConfig;
use country_names::names::CountryNames;
use country_names::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env()?;

    // Load the name table up front so a bad bundle fails fast
    let names = CountryNames::from_config(&config.resolver)?;
    info!(
        locale = names.locale(),
        countries = names.supported_codes().len(),
        "loaded country names"
    );

    let app = create_router(AppState::new(names));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "country name service listening");
    info!("  GET  /health           - Health check");
    info!("  GET  /countries        - All supported countries");
    info!("  GET  /countries/:code  - Name for one code");
    info!("  GET  /lookup?code=     - Name for one code");

    axum::serve(listener, app).await?;
    Ok(())
}
