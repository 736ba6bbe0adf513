use std::path::Path;

use env_logger::Env;
use ucl_tracker_data::{
    configuration::get_configuration,
    services::{extract_table, write_csv, Fetcher},
};

const CONTAINER_ID: &str = "all_stats_standard";
const TABLE_ID: &str = "stats_standard";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let mut fetcher = Fetcher::new(configuration.pipeline.max_requests_per_minute)?;
    let html = fetcher.fetch_text(&configuration.pipeline.stats_url).await?;

    let Some(table) = extract_table(&html, CONTAINER_ID, TABLE_ID) else {
        log::error!("No data to save");
        return Ok(());
    };

    log::info!("Headers: {:?}", table.headers);
    match table.rows.first() {
        Some(row) => log::info!("Sample row: {:?}", row),
        None => log::info!("No rows extracted"),
    }

    write_csv(&table, Path::new(&configuration.pipeline.csv_path))?;
    Ok(())
}
