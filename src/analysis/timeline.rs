use super::accumulator::HistoryEntry;
use super::metrics::{kda_ratio, pct, round1, round2};
use serde::Serialize;
use std::collections::BTreeMap;

/// How many of the most recent games feed the trend classification.
pub const RECENT_WINDOW: usize = 20;

/// Win-rate delta (percentage points) beyond which the trend stops being
/// classified as stable.
const TREND_THRESHOLD: f64 = 5.0;

/// Chronologically ordered copy of the match history. Produced once and
/// consumed by name by the time-series, growth, and trend passes; the
/// accumulator's input-order list is left untouched.
pub fn chronological(history: &[HistoryEntry]) -> Vec<HistoryEntry> {
    let mut ordered = history.to_vec();
    // Stable sort: entries sharing a date keep their input order.
    ordered.sort_by_key(|e| e.date);
    ordered
}

/// Recover the three integers from a literal "K/D/A" string. The engine
/// writes these itself, so a malformed component reads as zero rather than
/// erroring.
pub fn parse_kda(kda: &str) -> (u32, u32, u32) {
    let mut parts = kda.split('/').map(|p| p.trim().parse::<u32>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// Calendar month key, `YYYY-MM`.
    pub month: String,
    pub games: u32,
    pub win_rate: f64,
    pub kda: f64,
}

/// Group the chronological history into calendar-month buckets. Every entry
/// lands in exactly one bucket; keys are unique and emitted in ascending
/// order.
pub fn monthly_trends(ordered: &[HistoryEntry]) -> Vec<MonthlyTrend> {
    #[derive(Default)]
    struct MonthBucket {
        games: u32,
        wins: u32,
        kills: u32,
        deaths: u32,
        assists: u32,
    }

    let mut buckets: BTreeMap<String, MonthBucket> = BTreeMap::new();
    for entry in ordered {
        let bucket = buckets.entry(entry.date.format("%Y-%m").to_string()).or_default();
        bucket.games += 1;
        if entry.win {
            bucket.wins += 1;
        }
        let (kills, deaths, assists) = parse_kda(&entry.kda);
        bucket.kills += kills;
        bucket.deaths += deaths;
        bucket.assists += assists;
    }

    buckets
        .into_iter()
        .map(|(month, b)| MonthlyTrend {
            month,
            games: b.games,
            win_rate: round1(pct(b.wins, b.games)),
            kda: round2(kda_ratio(b.kills, b.deaths, b.assists)),
        })
        .collect()
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub games: u32,
    pub win_rate: f64,
    pub kda: f64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
}

/// Stats over a chronological window. An empty window is a valid input and
/// produces all zeroes.
pub fn period_stats(window: &[HistoryEntry]) -> PeriodStats {
    let games = window.len() as u32;
    let mut wins = 0u32;
    let (mut kills, mut deaths, mut assists) = (0u32, 0u32, 0u32);

    for entry in window {
        if entry.win {
            wins += 1;
        }
        let (k, d, a) = parse_kda(&entry.kda);
        kills += k;
        deaths += d;
        assists += a;
    }

    let avg = |total: u32| if games == 0 { 0.0 } else { total as f64 / games as f64 };

    PeriodStats {
        games,
        win_rate: round1(pct(wins, games)),
        kda: if games == 0 {
            0.0
        } else {
            round2(kda_ratio(kills, deaths, assists))
        },
        avg_kills: round1(avg(kills)),
        avg_deaths: round1(avg(deaths)),
        avg_assists: round1(avg(assists)),
    }
}

/// The 20% rule: early window is the first fifth of the chronological
/// history, late window the last fifth. Fewer than five games produce empty
/// windows on both sides; small histories may overlap. Both are deliberate
/// boundary behaviors.
pub fn growth_windows(ordered: &[HistoryEntry]) -> (&[HistoryEntry], &[HistoryEntry]) {
    let split = ordered.len() / 5;
    (&ordered[..split], &ordered[ordered.len() - split..])
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAnalysis {
    pub win_rate_delta: f64,
    pub kda_delta: f64,
    pub kills_delta: f64,
    pub deaths_delta: f64,
    pub assists_delta: f64,
}

/// Late-minus-early deltas, each rounded to its source metric's precision.
pub fn growth_analysis(early: &PeriodStats, late: &PeriodStats) -> GrowthAnalysis {
    GrowthAnalysis {
        win_rate_delta: round1(late.win_rate - early.win_rate),
        kda_delta: round2(late.kda - early.kda),
        kills_delta: round1(late.avg_kills - early.avg_kills),
        deaths_delta: round1(late.avg_deaths - early.avg_deaths),
        assists_delta: round1(late.avg_assists - early.avg_assists),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Improving => write!(f, "improving"),
            TrendDirection::Declining => write!(f, "declining"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrend {
    pub direction: TrendDirection,
    /// Win rate over the recent window, one decimal.
    pub recent_win_rate: f64,
    pub overall_win_rate: f64,
    /// Recent minus overall win rate, signed and unbounded.
    pub momentum: f64,
}

pub fn performance_trend(
    ordered: &[HistoryEntry],
    overall_win_rate: f64,
    growth: &GrowthAnalysis,
) -> PerformanceTrend {
    let recent = &ordered[ordered.len().saturating_sub(RECENT_WINDOW)..];
    let recent_wins = recent.iter().filter(|e| e.win).count() as u32;
    let recent_win_rate = round1(pct(recent_wins, recent.len() as u32));

    let direction = if growth.win_rate_delta > TREND_THRESHOLD {
        TrendDirection::Improving
    } else if growth.win_rate_delta < -TREND_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    PerformanceTrend {
        direction,
        recent_win_rate,
        overall_win_rate,
        momentum: recent_win_rate - overall_win_rate,
    }
}
