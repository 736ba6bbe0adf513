use serde::Deserialize;

/// One CSV row as written by the scraper, everything still a string.
#[derive(Debug, Deserialize)]
pub struct CsvPlayerRow {
    pub player: String,
    pub nationality: String,
    pub position: String,
    pub team: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub games: String,
    #[serde(default)]
    pub games_starts: String,
    #[serde(default)]
    pub minutes: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub assists: String,
    #[serde(default)]
    pub pens_made: String,
    #[serde(default)]
    pub xg: String,
    #[serde(default)]
    pub xg_assist: String,
}

/// Typed row for the players2025 table. Counts and metrics that fail to
/// coerce become None rather than failing the import.
#[derive(Debug)]
pub struct PlayerRecord {
    pub name: String,
    pub nationality: String,
    pub position: String,
    pub team: String,
    pub age: Option<i32>,
    pub matches_played: Option<i32>,
    pub starts: Option<i32>,
    pub minutes: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub pk_made: Option<i32>,
    pub xg: Option<f64>,
    pub xag: Option<f64>,
}

impl From<CsvPlayerRow> for PlayerRecord {
    fn from(row: CsvPlayerRow) -> Self {
        PlayerRecord {
            name: row.player,
            nationality: row.nationality,
            position: row.position,
            team: row.team,
            age: parse_count(&row.age),
            matches_played: parse_count(&row.games),
            starts: parse_count(&row.games_starts),
            minutes: parse_count(&row.minutes),
            goals: parse_count(&row.goals),
            assists: parse_count(&row.assists),
            pk_made: parse_count(&row.pens_made),
            xg: parse_metric(&row.xg),
            xag: parse_metric(&row.xg_assist),
        }
    }
}

/// Strip thousands separators and parse as an integer. Empty strings and
/// placeholder dashes come back as None instead of an error.
pub fn parse_count(value: &str) -> Option<i32> {
    let cleaned = value.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<i32>().ok()
}

/// Same policy for floating-point metrics (xg, xag).
pub fn parse_metric(value: &str) -> Option<f64> {
    let cleaned = value.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
