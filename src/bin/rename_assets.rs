use std::path::Path;

use env_logger::Env;
use ucl_tracker_data::{
    configuration::get_configuration,
    services::{rename_flags, rename_logos},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    rename_flags(Path::new(&configuration.pipeline.flags_dir))?;
    rename_logos(Path::new(&configuration.pipeline.logos_dir))?;

    log::info!("All filenames verified or renamed");
    Ok(())
}
