use super::accumulator::{ChampionBucket, RecapTotals};
use serde::Serialize;
use std::collections::BTreeMap;

/// Champion ranking exposes at most this many entries.
pub const TOP_CHAMPIONS: usize = 5;

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part` over `whole` as a percentage; 0 when `whole` is 0.
pub fn pct(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// (kills + assists) / deaths, defined as kills + assists when deaths is
/// zero.
pub fn kda_ratio(kills: u32, deaths: u32, assists: u32) -> f64 {
    let ka = (kills + assists) as f64;
    if deaths == 0 {
        ka
    } else {
        ka / deaths as f64
    }
}

fn per_game(total: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    }
}

fn floor_avg(total: u64, games: u32) -> u64 {
    if games == 0 {
        0
    } else {
        total / games as u64
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub damage: u64,
    pub gold: u64,
    pub cs: u64,
    pub vision_score: u64,
    pub game_time_minutes: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Percentage, two decimals.
    pub win_rate: f64,
    /// Two decimals.
    pub kda: f64,
    pub averages: Averages,
}

pub fn overview(totals: &RecapTotals) -> Overview {
    let games = totals.total_games;
    Overview {
        total_games: games,
        wins: totals.wins,
        losses: totals.losses,
        win_rate: round2(pct(totals.wins, games)),
        kda: round2(kda_ratio(totals.kills, totals.deaths, totals.assists)),
        averages: Averages {
            kills: round1(per_game(totals.kills, games)),
            deaths: round1(per_game(totals.deaths, games)),
            assists: round1(per_game(totals.assists, games)),
            damage: floor_avg(totals.damage_dealt, games),
            gold: floor_avg(totals.gold_earned, games),
            cs: floor_avg(totals.minions_killed, games),
            vision_score: floor_avg(totals.vision_score, games),
            game_time_minutes: if games == 0 {
                0
            } else {
                totals.total_game_secs / i64::from(games) / 60
            },
        },
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionSummary {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    /// Percentage, one decimal.
    pub win_rate: f64,
    pub kda: f64,
    pub avg_damage: u64,
}

/// Top champions by games played, descending. Equal game counts break
/// lexicographically by name so the ranking is reproducible.
pub fn rank_champions(champions: &BTreeMap<String, ChampionBucket>) -> Vec<ChampionSummary> {
    let mut ranked: Vec<ChampionSummary> = champions
        .iter()
        .map(|(name, b)| ChampionSummary {
            name: name.clone(),
            games: b.games,
            wins: b.wins,
            win_rate: round1(pct(b.wins, b.games)),
            kda: round2(kda_ratio(b.kills, b.deaths, b.assists)),
            avg_damage: floor_avg(b.damage, b.games),
        })
        .collect();

    ranked.sort_by(|a, b| b.games.cmp(&a.games).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(TOP_CHAMPIONS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kda_with_zero_deaths_is_kills_plus_assists() {
        assert_eq!(kda_ratio(3, 0, 2), 5.0);
        assert_eq!(kda_ratio(0, 0, 0), 0.0);
    }

    #[test]
    fn kda_divides_by_deaths_otherwise() {
        assert_eq!(round2(kda_ratio(10, 5, 15)), 5.0);
        assert_eq!(round2(kda_ratio(7, 3, 2)), 3.0);
    }

    #[test]
    fn zero_games_yields_all_zero_overview() {
        let overview = overview(&RecapTotals::default());
        assert_eq!(overview.total_games, 0);
        assert_eq!(overview.win_rate, 0.0);
        assert_eq!(overview.kda, 0.0);
        assert_eq!(overview.averages.kills, 0.0);
        assert_eq!(overview.averages.damage, 0);
        assert_eq!(overview.averages.game_time_minutes, 0);
    }

    #[test]
    fn win_rate_rounds_to_two_decimals() {
        let totals = RecapTotals {
            total_games: 3,
            wins: 2,
            losses: 1,
            ..Default::default()
        };
        assert_eq!(overview(&totals).win_rate, 66.67);
    }

    #[test]
    fn adding_a_win_never_lowers_win_rate() {
        let base = RecapTotals {
            total_games: 10,
            wins: 5,
            losses: 5,
            ..Default::default()
        };
        let with_extra_win = RecapTotals {
            total_games: 11,
            wins: 6,
            losses: 5,
            ..Default::default()
        };

        let before = overview(&base).win_rate;
        let after = overview(&with_extra_win).win_rate;
        assert_eq!(before, 50.0);
        assert!(after >= before);
    }

    #[test]
    fn ranking_sorts_by_games_then_name() {
        let mut champions = BTreeMap::new();
        champions.insert(
            "Zed".to_string(),
            ChampionBucket {
                games: 4,
                wins: 2,
                ..Default::default()
            },
        );
        champions.insert(
            "Ahri".to_string(),
            ChampionBucket {
                games: 4,
                wins: 3,
                ..Default::default()
            },
        );
        champions.insert(
            "Lux".to_string(),
            ChampionBucket {
                games: 9,
                wins: 5,
                ..Default::default()
            },
        );

        let ranked = rank_champions(&champions);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Lux", "Ahri", "Zed"]);
    }

    #[test]
    fn ranking_is_bounded() {
        let mut champions = BTreeMap::new();
        for i in 0..8 {
            champions.insert(
                format!("Champion{}", i),
                ChampionBucket {
                    games: i + 1,
                    ..Default::default()
                },
            );
        }

        assert_eq!(rank_champions(&champions).len(), TOP_CHAMPIONS);
    }

    #[test]
    fn per_champion_rates_use_one_decimal() {
        let mut champions = BTreeMap::new();
        champions.insert(
            "Ahri".to_string(),
            ChampionBucket {
                games: 3,
                wins: 2,
                kills: 10,
                deaths: 5,
                assists: 15,
                damage: 60_000,
            },
        );

        let ranked = rank_champions(&champions);
        assert_eq!(ranked[0].win_rate, 66.7);
        assert_eq!(ranked[0].kda, 5.0);
        assert_eq!(ranked[0].avg_damage, 20_000);
    }
}
