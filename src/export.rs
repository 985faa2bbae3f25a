use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::ranking::{RankTier, RankedTeam};

#[derive(Debug, Serialize)]
struct StandingsFile<'a> {
    exported_at: String,
    standings: Vec<StandingRow<'a>>,
}

#[derive(Debug, Serialize)]
struct StandingRow<'a> {
    rank: usize,
    tier: RankTier,
    name: &'a str,
    code: &'a str,
    score: i64,
}

pub fn standings_json(ranking: &[RankedTeam]) -> Result<String> {
    let file = StandingsFile {
        exported_at: chrono::Local::now().to_rfc3339(),
        standings: ranking
            .iter()
            .map(|row| StandingRow {
                rank: row.rank,
                tier: row.tier,
                name: &row.team.name,
                code: &row.team.code,
                score: row.team.score,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&file).context("serialize standings")
}

/// Writes the final standings. Never read back by the app.
pub fn export_standings(path: &Path, ranking: &[RankedTeam]) -> Result<()> {
    let raw = standings_json(ranking)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create export dir {}", parent.display()))?;
    }
    fs::write(path, raw).with_context(|| format!("write standings to {}", path.display()))?;
    Ok(())
}
