use std::time::Duration;

use anyhow::Context;
use env_logger::Env;
use sqlx::postgres::PgPoolOptions;
use ucl_tracker_data::{
    configuration::get_configuration,
    dal::player_db,
    domain::{CsvPlayerRow, PlayerRecord},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    // DB being unreachable is the one fatal failure in the pipeline.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(configuration.database.with_db())
        .await
        .context("Failed to connect to Postgres")?;
    log::info!("Connected to PostgreSQL");

    let mut reader = csv::Reader::from_path(&configuration.pipeline.csv_path)
        .with_context(|| format!("Failed to open CSV at {}", configuration.pipeline.csv_path))?;
    log::info!("CSV headers: {:?}", reader.headers()?);

    let mut count = 0;
    for result in reader.deserialize::<CsvPlayerRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipped unreadable CSV row: {}", e);
                continue;
            }
        };

        let record = PlayerRecord::from(row);
        match player_db::insert_player(&pool, &record).await {
            Ok(()) => count += 1,
            Err(e) => log::warn!("Skipped row for {}: {:?}", record.name, e),
        }
    }

    log::info!("Successfully imported {} rows", count);
    Ok(())
}
