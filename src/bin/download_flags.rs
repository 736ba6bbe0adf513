use std::path::Path;

use env_logger::Env;
use ucl_tracker_data::{
    configuration::get_configuration,
    services::{download_flags, nationality_codes, Fetcher},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let codes = nationality_codes(Path::new(&configuration.pipeline.csv_path))?;
    log::info!("Found {} distinct nationality codes", codes.len());

    let mut fetcher = Fetcher::new(configuration.pipeline.max_requests_per_minute)?;
    download_flags(
        &mut fetcher,
        &codes,
        Path::new(&configuration.pipeline.flags_dir),
    )
    .await
}
