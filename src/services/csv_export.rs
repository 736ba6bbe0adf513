use std::path::Path;

use anyhow::Context;

use crate::domain::StatTable;

/// Write the extracted table as UTF-8 CSV with lowercased headers. Rows may
/// be shorter than the header when the source row was missing cells.
pub fn write_csv(table: &StatTable, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to create CSV file at {}", path.display()))?;

    let headers: Vec<String> = table.headers.iter().map(|h| h.to_lowercase()).collect();
    writer.write_record(&headers)?;

    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer.flush()?;
    log::info!("Data saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lowercased_headers_and_rows() {
        let table = StatTable {
            headers: vec!["Player".to_string(), "Goals".to_string()],
            rows: vec![vec!["Lionel Messi".to_string(), "8".to_string()]],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        write_csv(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("player,goals"));
        assert_eq!(lines.next(), Some("Lionel Messi,8"));
    }

    #[test]
    fn rows_shorter_than_the_header_are_still_written() {
        let table = StatTable {
            headers: vec![
                "player".to_string(),
                "nationality".to_string(),
                "goals".to_string(),
            ],
            rows: vec![
                vec![
                    "Raphinha".to_string(),
                    "br BRA".to_string(),
                    "13".to_string(),
                ],
                vec!["Vinicius Júnior".to_string(), "br BRA".to_string()],
            ],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        write_csv(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("player,nationality,goals"));
        assert_eq!(lines.next(), Some("Raphinha,br BRA,13"));
        assert_eq!(lines.next(), Some("Vinicius Júnior,br BRA"));
    }
}
