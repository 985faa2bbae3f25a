use serde::Serialize;

use crate::state::{Team, TeamId, TeamStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Default,
}

impl RankTier {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RankTier::Gold,
            2 => RankTier::Silver,
            3 => RankTier::Bronze,
            _ => RankTier::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTeam {
    pub rank: usize,
    pub tier: RankTier,
    pub team: Team,
}

impl RankedTeam {
    pub fn id(&self) -> TeamId {
        self.team.id
    }
}

/// Sort by score, highest first. `sort_by` is stable, so equal scores keep
/// their insertion order.
pub fn rank_teams(store: &TeamStore) -> Vec<RankedTeam> {
    let mut teams: Vec<&Team> = store.teams().iter().collect();
    teams.sort_by(|a, b| b.score.cmp(&a.score));
    teams
        .into_iter()
        .enumerate()
        .map(|(idx, team)| {
            let rank = idx + 1;
            RankedTeam {
                rank,
                tier: RankTier::for_rank(rank),
                team: team.clone(),
            }
        })
        .collect()
}

pub fn tier_label(tier: RankTier) -> &'static str {
    match tier {
        RankTier::Gold => "GOLD",
        RankTier::Silver => "SILVER",
        RankTier::Bronze => "BRONZE",
        RankTier::Default => "",
    }
}
