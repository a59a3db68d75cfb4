use innkeeper_importer::{Importer, ImporterConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "innkeeper_importer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Import failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ImporterConfig::from_env()?;

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
    let pool = innkeeper_db::create_pool(&database_url).await?;
    innkeeper_db::run_migrations(&pool).await?;

    let summary = Importer::new(pool.clone(), config)?.run().await?;
    tracing::info!(
        cities = summary.cities,
        hotels = summary.hotels,
        "Import complete",
    );

    pool.close().await;
    Ok(())
}
