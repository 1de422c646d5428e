use mimalloc::MiMalloc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &buzz_buzz::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        "starting buzz-buzz"
    );

    let gateway = buzz_buzz::Gateway::open(&cfg.database_url).await?;
    let profiles = buzz_buzz::ProfileRepository::new(gateway.clone());
    let surveys = buzz_buzz::SurveyRepository::new(gateway);

    // The app cannot run without its tables.
    if let Err(e) = profiles.create_table().await {
        error!(error = %e, "failed to create profiles table");
        return Err(e.into());
    }
    if let Err(e) = surveys.create_table().await {
        error!(error = %e, "failed to create surveys table");
        return Err(e.into());
    }

    // First launch collects a profile; afterwards the app goes straight to
    // survey reports.
    let existing = profiles.find_all().await?;
    if existing.is_empty() {
        info!("no profile on record yet");
    } else {
        info!(profiles = existing.len(), "profile on record; ready for reports");
    }

    Ok(())
}
