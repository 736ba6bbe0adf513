use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::domain::{country_for_iso2, is_country_name, slugify};

/// Rename `<iso2>.png` flags to `<country-name>.png`. Unknown stems are
/// logged and left alone; already-renamed files are a no-op.
pub fn rename_flags(flags_dir: &Path) -> anyhow::Result<()> {
    log::info!("Renaming country flags in {}", flags_dir.display());

    for entry in fs::read_dir(flags_dir)
        .with_context(|| format!("Failed to read {}", flags_dir.display()))?
    {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().to_string();
        let Some(stem) = filename.strip_suffix(".png") else {
            continue;
        };

        let stem = stem.to_lowercase();
        // A stem that already matches a country name needs no rename.
        let country = match country_for_iso2(&stem) {
            Some(country) => country,
            None if is_country_name(&stem) => continue,
            None => {
                log::warn!("Unknown flag filename: {}", filename);
                continue;
            }
        };

        let expected = format!("{}.png", slugify(country));
        if filename == expected {
            log::info!("{} already correctly named", filename);
            continue;
        }

        fs::rename(entry.path(), flags_dir.join(&expected))?;
        log::info!("{} -> {}", filename, expected);
    }

    Ok(())
}

/// Rename `"<prefix> <Team Name>.png"` logos to `<team-slug>.png`, dropping
/// the country prefix before the first space. Idempotent: a slug without a
/// space renames to itself.
pub fn rename_logos(logos_dir: &Path) -> anyhow::Result<()> {
    log::info!("Renaming team logos in {}", logos_dir.display());

    for entry in fs::read_dir(logos_dir)
        .with_context(|| format!("Failed to read {}", logos_dir.display()))?
    {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().to_string();
        let Some(stem) = filename.strip_suffix(".png") else {
            continue;
        };

        let team = match stem.split_once(' ') {
            Some((_prefix, team)) => team,
            None => stem,
        };

        let expected = format!("{}.png", slugify(team));
        if filename == expected {
            log::info!("{} already correctly named", filename);
            continue;
        }

        fs::rename(entry.path(), logos_dir.join(&expected))?;
        log::info!("{} -> {}", filename, expected);
    }

    Ok(())
}
