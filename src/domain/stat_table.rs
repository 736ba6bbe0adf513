/// Canonical output columns, in the order they appear in the CSV. Matched
/// against the `data-stat` attribute of the source table's header cells, so
/// the source is free to reorder or add columns without breaking extraction.
pub const TARGET_COLUMNS: [&str; 13] = [
    "player",
    "nationality",
    "position",
    "team",
    "age",
    "games",
    "games_starts",
    "minutes",
    "goals",
    "assists",
    "pens_made",
    "xg",
    "xg_assist",
];

/// Extraction output. Cell values stay as trimmed strings here; numeric
/// coercion happens at import time, in a separate binary.
#[derive(Debug, PartialEq)]
pub struct StatTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
