use std::fs;
use std::path::Path;

use anyhow::Context;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::slugify;
use crate::services::Fetcher;

const BASE_URL: &str = "https://fbref.com";
const SEASON: &str = "2024-2025";
const COMP_ID: &str = "c8";
const SQUAD_TABLE_ID: &str = "stats_standard_8";

/// (display name, fbref squad id). Remaining squads get appended as their
/// ids are collected from the competition page.
pub const TEAM_SQUADS: &[(&str, &str)] = &[
    ("Real Madrid", "53a2f082"),
    ("Barcelona", "206d90db"),
    ("Bayern Munich", "054efa67"),
    ("Liverpool", "822bd0ba"),
    ("Manchester City", "b8fd03ef"),
    ("Arsenal", "18bb7c10"),
    ("Paris S-G", "e2d8892c"),
    ("Inter", "d609edc0"),
];

pub fn squad_url(team_name: &str, squad_id: &str) -> String {
    format!(
        "{}/en/squads/{}/{}/{}/{}-Stats-Champions-League",
        BASE_URL,
        squad_id,
        SEASON,
        COMP_ID,
        slugify(team_name)
    )
}

/// Players from a squad page's standard stats table with at least one minute
/// played, paired with their absolute profile URL.
pub fn extract_players(html: &str, team_name: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse(&format!("table#{}", SQUAD_TABLE_ID)).unwrap();
    let row_selector = Selector::parse("tbody > tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let table = match document.select(&table_selector).next() {
        Some(table) => table,
        None => {
            log::warn!("Standard stats table not found for {}", team_name);
            return Vec::new();
        }
    };

    let base = Url::parse(BASE_URL).unwrap();
    let mut players = Vec::new();

    for row in table.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 9 {
            log::info!(
                "Skipping row with insufficient cells for {}: {}",
                team_name,
                cells.len()
            );
            continue;
        }

        let minutes_text: String = cells[6].text().collect::<String>().trim().replace(',', "");
        let minutes = minutes_text.parse::<u32>().unwrap_or(0);
        if minutes < 1 {
            continue;
        }

        let name_cell = cells[0];
        match name_cell.select(&link_selector).next() {
            Some(link) => {
                let name: String = link.text().collect::<String>().trim().to_string();
                let href = link.value().attr("href").unwrap_or("");
                match base.join(href) {
                    Ok(profile_url) => players.push((name, profile_url.to_string())),
                    Err(e) => log::warn!("Bad profile link for {}: {}", name, e),
                }
            }
            None => {
                let name: String = name_cell.text().collect::<String>().trim().to_string();
                log::warn!("No profile link for {} in {}", name, team_name);
            }
        }
    }

    log::info!("Extracted {} players for {}", players.len(), team_name);
    players
}

/// Photo URL from a player profile page, if the page carries one.
pub fn extract_photo_url(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let photo_selector = Selector::parse("div.media-item img").unwrap();

    document
        .select(&photo_selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| src.to_string())
}

/// Walk every known squad, then every player with minutes, and store their
/// photo under `<output_dir>/<team-slug>/<player-slug>.jpg`. Per-player
/// failures are logged and skipped.
pub async fn download_player_photos(fetcher: &mut Fetcher, output_dir: &Path) -> anyhow::Result<()> {
    for (team_name, squad_id) in TEAM_SQUADS {
        let url = squad_url(team_name, squad_id);
        log::info!("Processing team: {} ({})", team_name, url);

        let squad_html = match fetcher.fetch_text(&url).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to fetch squad page for {}: {:?}", team_name, e);
                continue;
            }
        };

        let players = extract_players(&squad_html, team_name);
        let team_dir = output_dir.join(slugify(team_name));
        fs::create_dir_all(&team_dir)
            .with_context(|| format!("Failed to create {}", team_dir.display()))?;

        for (player_name, profile_url) in players {
            let profile_html = match fetcher.fetch_text(&profile_url).await {
                Ok(html) => html,
                Err(e) => {
                    log::error!("Failed to fetch profile for {}: {:?}", player_name, e);
                    continue;
                }
            };

            let photo_url = match extract_photo_url(&profile_html) {
                Some(url) => url,
                None => {
                    log::warn!("No photo found for {} ({})", player_name, team_name);
                    continue;
                }
            };

            let filename = format!("{}.jpg", slugify(&player_name));
            match fetcher.fetch_bytes(&photo_url).await {
                Ok(bytes) => {
                    fs::write(team_dir.join(&filename), bytes)?;
                    log::info!("Downloaded: {}/{}", team_dir.display(), filename);
                }
                Err(e) => {
                    log::error!("Failed to download photo for {}: {:?}", player_name, e);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squad_page(rows: &str) -> String {
        format!(
            r#"<html><body><table id="{}">
            <thead><tr><th>Player</th></tr></thead>
            <tbody>{}</tbody>
            </table></body></html>"#,
            SQUAD_TABLE_ID, rows
        )
    }

    fn player_row(name: &str, href: &str, minutes: &str) -> String {
        format!(
            "<tr><th><a href=\"{}\">{}</a></th>\
             <td>br</td><td>FW</td><td>25</td><td>10</td><td>9</td>\
             <td>{}</td><td>8</td><td>2</td></tr>",
            href, name, minutes
        )
    }

    #[test]
    fn players_with_minutes_are_extracted_with_absolute_urls() {
        let rows = [
            player_row("Raphinha", "/en/players/3423f250/Raphinha", "1,024"),
            player_row("Bench Guy", "/en/players/00000000/Bench-Guy", "0"),
        ]
        .join("");
        let players = extract_players(&squad_page(&rows), "Barcelona");

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].0, "Raphinha");
        assert_eq!(
            players[0].1,
            "https://fbref.com/en/players/3423f250/Raphinha"
        );
    }

    #[test]
    fn short_rows_and_missing_tables_yield_nothing() {
        let short = squad_page("<tr><th>Spacer</th><td>only</td></tr>");
        assert!(extract_players(&short, "Inter").is_empty());
        assert!(extract_players("<html><body></body></html>", "Inter").is_empty());
    }

    #[test]
    fn photo_url_comes_from_the_media_item_block() {
        let html = r#"<html><body>
            <div class="media-item"><img src="https://cdn.fbref.com/headshot.jpg"></div>
        </body></html>"#;
        assert_eq!(
            extract_photo_url(html),
            Some("https://cdn.fbref.com/headshot.jpg".to_string())
        );
        assert_eq!(extract_photo_url("<html><body></body></html>"), None);
    }

    #[test]
    fn squad_urls_follow_the_fbref_scheme() {
        assert_eq!(
            squad_url("Bayern Munich", "054efa67"),
            "https://fbref.com/en/squads/054efa67/2024-2025/c8/bayern-munich-Stats-Champions-League"
        );
    }
}
