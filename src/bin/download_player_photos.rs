use std::path::Path;

use env_logger::Env;
use ucl_tracker_data::{
    configuration::get_configuration,
    services::{download_player_photos, Fetcher},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let mut fetcher = Fetcher::new(configuration.pipeline.max_requests_per_minute)?;
    download_player_photos(&mut fetcher, Path::new(&configuration.pipeline.photos_dir)).await
}
