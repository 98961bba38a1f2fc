use super::accumulator::{ChampionBucket, RoleDistribution};
use super::metrics::{pct, round1};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionPoolDiversity {
    pub unique_champions: usize,
    /// Whole number in [0, 100].
    pub diversity_score: f64,
    pub most_played_games: u32,
    /// Share of total games on the most played champion, one decimal.
    pub most_played_percentage: f64,
}

/// Score the spread of a champion pool: rewards breadth, penalizes
/// concentration on one champion, offset so a single-champion pool still
/// lands mid-scale. Clamped to [0, 100].
pub fn champion_pool_diversity(
    champions: &BTreeMap<String, ChampionBucket>,
    total_games: u32,
) -> ChampionPoolDiversity {
    if total_games == 0 {
        return ChampionPoolDiversity::default();
    }

    let unique_champions = champions.len();
    let most_played_games = champions.values().map(|b| b.games).max().unwrap_or(0);
    let concentration = most_played_games as f64 / total_games as f64;
    let raw = unique_champions as f64 * 5.0 - concentration * 50.0 + 50.0;

    ChampionPoolDiversity {
        unique_champions,
        diversity_score: raw.round().clamp(0.0, 100.0),
        most_played_games,
        most_played_percentage: round1(concentration * 100.0),
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFlexibility {
    pub roles_played: usize,
    /// Favorite-role share of total games, one decimal.
    pub main_role_percentage: f64,
    /// `roles_played * 20 - main_role_percentage * 0.5`. Deliberately left
    /// unclamped; see DESIGN.md for the open question on its bounds.
    pub flexibility_score: f64,
}

pub fn role_flexibility(roles: &RoleDistribution, total_games: u32) -> RoleFlexibility {
    let roles_played = roles.roles_played();
    let main_role_percentage = round1(pct(roles.count(roles.favorite()), total_games));

    RoleFlexibility {
        roles_played,
        main_role_percentage,
        flexibility_score: roles_played as f64 * 20.0 - main_role_percentage * 0.5,
    }
}
