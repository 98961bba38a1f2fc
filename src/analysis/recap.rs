use super::accumulator::{accumulate, HistoryEntry, Role, RoleDistribution};
use super::diversity::{self, ChampionPoolDiversity, RoleFlexibility};
use super::metrics::{self, ChampionSummary, Overview};
use super::timeline::{self, GrowthAnalysis, MonthlyTrend, PerformanceTrend, PeriodStats};
use crate::champions::ChampionRoster;
use crate::input::models::MatchDto;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub penta_kills: u32,
    pub quadra_kills: u32,
    pub triple_kills: u32,
    pub double_kills: u32,
    pub first_bloods: u32,
    pub longest_game_minutes: i64,
    pub shortest_game_minutes: i64,
}

/// The full performance profile for one player. Immutable once built;
/// serializes directly for downstream consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecap {
    pub overview: Overview,
    pub highlights: Highlights,
    pub top_champions: Vec<ChampionSummary>,
    pub role_distribution: RoleDistribution,
    pub favorite_role: Role,
    /// Chronologically ordered.
    pub match_history: Vec<HistoryEntry>,
    pub monthly_trends: Vec<MonthlyTrend>,
    pub early_period: PeriodStats,
    pub late_period: PeriodStats,
    pub growth: GrowthAnalysis,
    pub champion_pool: ChampionPoolDiversity,
    pub role_flexibility: RoleFlexibility,
    pub performance_trend: PerformanceTrend,
}

/// Run the whole pipeline over an already-collected record set. One call is
/// one independent computation: no state survives between invocations, and
/// any well-typed (possibly empty) input yields a well-formed recap.
pub fn build_recap(matches: &[MatchDto], puuid: &str, roster: &ChampionRoster) -> PlayerRecap {
    let totals = accumulate(matches, puuid, roster);

    let overview = metrics::overview(&totals);
    let top_champions = metrics::rank_champions(&totals.champions);
    let favorite_role = totals.roles.favorite();

    let ordered = timeline::chronological(&totals.history);
    let monthly_trends = timeline::monthly_trends(&ordered);
    let (early, late) = timeline::growth_windows(&ordered);
    let early_period = timeline::period_stats(early);
    let late_period = timeline::period_stats(late);
    let growth = timeline::growth_analysis(&early_period, &late_period);
    let performance_trend = timeline::performance_trend(&ordered, overview.win_rate, &growth);

    let champion_pool = diversity::champion_pool_diversity(&totals.champions, totals.total_games);
    let role_flexibility = diversity::role_flexibility(&totals.roles, totals.total_games);

    let highlights = Highlights {
        penta_kills: totals.penta_kills,
        quadra_kills: totals.quadra_kills,
        triple_kills: totals.triple_kills,
        double_kills: totals.double_kills,
        first_bloods: totals.first_bloods,
        longest_game_minutes: totals.longest_game_secs / 60,
        shortest_game_minutes: if totals.total_games == 0 {
            0
        } else {
            totals.shortest_game_secs / 60
        },
    };

    PlayerRecap {
        overview,
        highlights,
        top_champions,
        role_distribution: totals.roles,
        favorite_role,
        match_history: ordered,
        monthly_trends,
        early_period,
        late_period,
        growth,
        champion_pool,
        role_flexibility,
        performance_trend,
    }
}
