use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::services::Fetcher;

/// CSV display name (country prefix included) to ESPN team id.
pub const ESPN_TEAM_IDS: &[(&str, u32)] = &[
    ("at RB Salzburg", 379),
    ("at Sturm Graz", 3746),
    ("be Club Brugge", 570),
    ("ch Young Boys", 2722),
    ("cz Sparta Prague", 433),
    ("de Bayern Munich", 132),
    ("de Dortmund", 124),
    ("de Leverkusen", 131),
    ("de RB Leipzig", 2790),
    ("de Stuttgart", 134),
    ("eng Arsenal", 359),
    ("eng Aston Villa", 362),
    ("eng Liverpool", 364),
    ("eng Manchester City", 382),
    ("es Atlético Madrid", 1068),
    ("es Barcelona", 83),
    ("es Girona", 9812),
    ("es Real Madrid", 86),
    ("fr Brest", 6997),
    ("fr Lille", 166),
    ("fr Monaco", 174),
    ("fr Paris S-G", 160),
    ("hr Dinamo Zagreb", 597),
    ("it Atalanta", 105),
    ("it Bologna", 107),
    ("it Inter", 110),
    ("it Juventus", 111),
    ("it Milan", 103),
    ("nl Feyenoord", 142),
    ("nl PSV Eindhoven", 148),
    ("pt Benfica", 1929),
    ("pt Sporting CP", 2250),
    ("rs Red Star", 2290),
    ("sct Celtic", 256),
    ("sk Slovan Bratislava", 521),
    ("ua Shakhtar", 493),
];

fn logo_url(team_id: u32) -> String {
    format!(
        "https://a.espncdn.com/combiner/i?img=/i/teamlogos/soccer/500/{}.png&h=200&w=200",
        team_id
    )
}

/// Fetch every team logo from the ESPN CDN into `output_dir`, named by the
/// CSV display name. Failures are per-team: logged and skipped.
pub async fn download_team_logos(fetcher: &mut Fetcher, output_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    for (team_name, team_id) in ESPN_TEAM_IDS {
        let filename = format!("{}.png", team_name);
        match fetcher.fetch_bytes(&logo_url(*team_id)).await {
            Ok(bytes) => {
                fs::write(output_dir.join(&filename), bytes)?;
                log::info!("Downloaded: {}", filename);
            }
            Err(e) => {
                log::error!("Failed for {}: {:?}", team_name, e);
            }
        }
    }

    Ok(())
}
