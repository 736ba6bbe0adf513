use scraper::{Html, Selector};

use crate::domain::{StatTable, TARGET_COLUMNS};

/// Pull the stats table out of a fbref page.
///
/// fbref serializes the real table inside an HTML comment in the container
/// div, so naive DOM scrapers see nothing. The comment text has to be
/// re-parsed as its own document before the table element becomes visible.
/// Missing container, comment or table are all "no data" outcomes: log and
/// return None, the caller decides whether that aborts the run.
pub fn extract_table(html: &str, container_id: &str, table_id: &str) -> Option<StatTable> {
    let document = Html::parse_document(html);

    let container_selector = Selector::parse(&format!("div#{}", container_id)).unwrap();
    let container = match document.select(&container_selector).next() {
        Some(div) => div,
        None => {
            log::error!("No div found with id: {}", container_id);
            return None;
        }
    };

    let table_markup = match container
        .descendants()
        .filter_map(|node| node.value().as_comment())
        .find(|comment| comment.contains(table_id))
    {
        Some(comment) => comment.to_string(),
        None => {
            log::error!("No commented table with id: {} found", table_id);
            return None;
        }
    };

    // Second parse: the comment body is an independent document.
    let table_document = Html::parse_document(&table_markup);
    let table_selector = Selector::parse(&format!("table#{}", table_id)).unwrap();
    let table = match table_document.select(&table_selector).next() {
        Some(table) => table,
        None => {
            log::error!("Table with id {} not found in parsed comment", table_id);
            return None;
        }
    };

    let header_row_selector = Selector::parse("thead > tr").unwrap();
    let header_cell_selector = Selector::parse("th").unwrap();

    // Multi-row headers: only the last row carries per-column data-stat names.
    let declared: Vec<String> = table
        .select(&header_row_selector)
        .last()?
        .select(&header_cell_selector)
        .map(|th| th.value().attr("data-stat").unwrap_or("").to_string())
        .collect();
    log::info!("Parsed headers from table: {:?}", declared);

    // Name-keyed projection: resolve each canonical column to its source
    // index once. Canonical columns absent from the source are dropped.
    let column_map: Vec<(usize, String)> = TARGET_COLUMNS
        .iter()
        .filter_map(|name| {
            declared
                .iter()
                .position(|declared_name| declared_name == name)
                .map(|index| (index, name.to_string()))
        })
        .collect();

    let body_row_selector = Selector::parse("tbody > tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let mut rows = Vec::new();
    for tr in table.select(&body_row_selector) {
        // Mid-table header-repeat banners are flagged with class="thead".
        let is_header_repeat = tr
            .value()
            .attr("class")
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == "thead"));
        if is_header_repeat {
            continue;
        }

        let cells: Vec<_> = tr.select(&cell_selector).collect();
        let row_data: Vec<String> = column_map
            .iter()
            .filter_map(|(index, _)| cells.get(*index))
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if !row_data.is_empty() {
            rows.push(row_data);
        }
    }

    Some(StatTable {
        headers: column_map.into_iter().map(|(_, name)| name).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER_ID: &str = "all_stats_standard";
    const TABLE_ID: &str = "stats_standard";

    fn page_with_commented_table(table: &str) -> String {
        format!(
            "<html><body><div id=\"{}\"><!-- {} --></div></body></html>",
            CONTAINER_ID, table
        )
    }

    fn standard_table() -> String {
        format!(
            r#"<table id="{}">
            <thead>
                <tr><th colspan="4">Standard Stats</th></tr>
                <tr>
                    <th data-stat="ranker">Rk</th>
                    <th data-stat="player">Player</th>
                    <th data-stat="nationality">Nation</th>
                    <th data-stat="goals">Gls</th>
                </tr>
            </thead>
            <tbody>
                <tr>
                    <th>1</th><td>Lionel Messi</td><td>ar ARG</td><td> 8 </td>
                </tr>
                <tr class="thead">
                    <th>Rk</th><td>Player</td><td>Nation</td><td>Gls</td>
                </tr>
                <tr>
                    <th>2</th><td>Raphinha</td><td>br BRA</td><td>13</td>
                </tr>
            </tbody>
            </table>"#,
            TABLE_ID
        )
    }

    #[test]
    fn extracts_commented_table_end_to_end() {
        let html = page_with_commented_table(&standard_table());
        let table = extract_table(&html, CONTAINER_ID, TABLE_ID).unwrap();

        assert_eq!(table.headers, vec!["player", "nationality", "goals"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["Lionel Messi", "ar ARG", "8"],
                vec!["Raphinha", "br BRA", "13"],
            ]
        );
    }

    #[test]
    fn header_repeat_rows_are_excluded() {
        let html = page_with_commented_table(&standard_table());
        let table = extract_table(&html, CONTAINER_ID, TABLE_ID).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|row| row[0] != "Player"));
    }

    #[test]
    fn projection_is_order_independent() {
        let reordered = format!(
            r#"<table id="{}">
            <thead>
                <tr>
                    <th data-stat="goals">Gls</th>
                    <th data-stat="player">Player</th>
                </tr>
            </thead>
            <tbody>
                <tr><th>5</th><td>Ousmane Dembélé</td></tr>
            </tbody>
            </table>"#,
            TABLE_ID
        );
        let html = page_with_commented_table(&reordered);
        let table = extract_table(&html, CONTAINER_ID, TABLE_ID).unwrap();

        // Canonical order, regardless of source order.
        assert_eq!(table.headers, vec!["player", "goals"]);
        assert_eq!(table.rows, vec![vec!["Ousmane Dembélé", "5"]]);
    }

    #[test]
    fn emitted_headers_are_a_subset_of_the_canonical_columns() {
        let html = page_with_commented_table(&standard_table());
        let table = extract_table(&html, CONTAINER_ID, TABLE_ID).unwrap();

        assert!(table.headers.len() <= TARGET_COLUMNS.len());
        assert!(table
            .headers
            .iter()
            .all(|h| TARGET_COLUMNS.contains(&h.as_str())));
    }

    #[test]
    fn only_the_last_header_row_is_consulted() {
        // The ranker column from the decorative first row must not leak in.
        let html = page_with_commented_table(&standard_table());
        let table = extract_table(&html, CONTAINER_ID, TABLE_ID).unwrap();
        assert!(!table.headers.contains(&"ranker".to_string()));
    }

    #[test]
    fn missing_container_yields_no_data() {
        let html = "<html><body><div id=\"something_else\"></div></body></html>";
        assert!(extract_table(html, CONTAINER_ID, TABLE_ID).is_none());
    }

    #[test]
    fn missing_comment_yields_no_data() {
        let html = format!(
            "<html><body><div id=\"{}\"><p>nothing here</p></div></body></html>",
            CONTAINER_ID
        );
        assert!(extract_table(&html, CONTAINER_ID, TABLE_ID).is_none());
    }

    #[test]
    fn comment_without_the_table_yields_no_data() {
        // Comment mentions the id but holds no such table element.
        let html = page_with_commented_table(&format!("<p>{}</p>", TABLE_ID));
        assert!(extract_table(&html, CONTAINER_ID, TABLE_ID).is_none());
    }

    #[test]
    fn short_rows_keep_whatever_cells_exist() {
        let short = format!(
            r#"<table id="{}">
            <thead>
                <tr>
                    <th data-stat="player">Player</th>
                    <th data-stat="nationality">Nation</th>
                    <th data-stat="goals">Gls</th>
                </tr>
            </thead>
            <tbody>
                <tr><th>Vinicius Júnior</th><td>br BRA</td></tr>
            </tbody>
            </table>"#,
            TABLE_ID
        );
        let html = page_with_commented_table(&short);
        let table = extract_table(&html, CONTAINER_ID, TABLE_ID).unwrap();
        assert_eq!(table.rows, vec![vec!["Vinicius Júnior", "br BRA"]]);
    }
}
