pub mod asset_renamer;
pub mod csv_export;
pub mod fetcher;
pub mod flag_downloader;
pub mod logo_downloader;
pub mod photo_scraper;
pub mod stats_scraper;

pub use asset_renamer::*;
pub use csv_export::*;
pub use fetcher::*;
pub use flag_downloader::*;
pub use logo_downloader::*;
pub use photo_scraper::*;
pub use stats_scraper::*;
