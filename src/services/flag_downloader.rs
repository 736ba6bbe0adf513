use std::fs;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;

use crate::domain::{iso2_for_fifa_code, CsvPlayerRow};
use crate::services::Fetcher;

const FLAGCDN_BASE: &str = "https://flagcdn.com/w80";

/// Distinct FIFA 3-letter codes from the CSV's nationality column, sorted.
/// Values look like "eng ENG"; the trailing token is the code.
pub fn nationality_codes(csv_path: &Path) -> anyhow::Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV at {}", csv_path.display()))?;

    let codes = reader
        .deserialize::<CsvPlayerRow>()
        .filter_map(|row| match row {
            Ok(row) => row
                .nationality
                .split_whitespace()
                .last()
                .map(|code| code.to_string()),
            Err(e) => {
                log::warn!("Skipping unreadable CSV row: {}", e);
                None
            }
        })
        .unique()
        .sorted()
        .collect();

    Ok(codes)
}

/// Fetch one flag per nationality from flagcdn and write `<iso2>.png` files.
/// Unknown codes and failed downloads are logged and skipped.
pub async fn download_flags(
    fetcher: &mut Fetcher,
    codes: &[String],
    output_dir: &Path,
) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    for code in codes {
        let iso2 = match iso2_for_fifa_code(code) {
            Some(iso2) => iso2,
            None => {
                log::warn!("No ISO code for: {}", code);
                continue;
            }
        };

        let url = format!("{}/{}.png", FLAGCDN_BASE, iso2);
        let filename = format!("{}.png", iso2);
        match fetcher.fetch_bytes(&url).await {
            Ok(bytes) => {
                fs::write(output_dir.join(&filename), bytes)?;
                log::info!("Downloaded: {}", filename);
            }
            Err(e) => {
                log::error!("Failed for {}: {:?}", filename, e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn codes_are_deduped_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "player,nationality,position,team\n\
             A,de GER,FW,Bayern Munich\n\
             B,ar ARG,FW,Inter Miami\n\
             C,de GER,DF,Dortmund"
        )
        .unwrap();

        let codes = nationality_codes(&path).unwrap();
        assert_eq!(codes, vec!["ARG".to_string(), "GER".to_string()]);
    }
}
